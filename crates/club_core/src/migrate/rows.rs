use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use crate::models::{MatchRecord, Player, UniformSettings};

/// `players` table row.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlayerRow {
    pub id: String,
    pub name: String,
    pub number: Option<u32>,
    pub is_active: bool,
}

impl From<&Player> for PlayerRow {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
            number: player.number,
            is_active: player.is_active,
        }
    }
}

/// `matches` table row. `photos` and `sub_matches` are JSON columns.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatchRow {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub match_type: String,
    pub opponent: String,
    pub venue: String,
    pub goals_for: u32,
    pub goals_against: u32,
    pub formation: String,
    pub mvp: Option<String>,
    pub notes: String,
    pub youtube_url: Option<String>,
    pub photos: Value,
    pub is_multi_match: bool,
    pub sub_matches: Value,
}

impl MatchRow {
    /// Convert a local match to its relational row.
    ///
    /// The Document stores dates as entered; the relational `date` column
    /// does not, so this is where a malformed date surfaces.
    pub fn from_match(record: &MatchRecord) -> Result<Self, String> {
        let date = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d")
            .map_err(|_| format!("invalid date '{}'", record.date))?;

        Ok(Self {
            id: record.id.clone(),
            date,
            match_type: record.match_type.clone(),
            opponent: record.opponent.clone(),
            venue: record.venue.clone(),
            goals_for: record.goals_for,
            goals_against: record.goals_against,
            formation: record.formation.code().to_string(),
            mvp: record.mvp.clone(),
            notes: record.notes.clone(),
            youtube_url: record.youtube_url.clone(),
            photos: Value::from(record.photos.clone()),
            is_multi_match: record.is_multi_match,
            sub_matches: serde_json::to_value(&record.sub_matches).unwrap_or(Value::Null),
        })
    }
}

/// `match_lineups` table row, one per assigned position.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineupRow {
    pub match_id: String,
    pub player_id: String,
    pub position: String,
    pub is_starter: bool,
}

/// `substitutions` table row.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SubstitutionRow {
    pub match_id: String,
    pub player_out_id: String,
    pub player_in_id: String,
    pub minute: u8,
    pub reason: Option<String>,
}

/// `team_settings` table row.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TeamSettingsRow {
    pub team_name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub logo_url: Option<String>,
    pub header_image_url: Option<String>,
}

impl From<&UniformSettings> for TeamSettingsRow {
    fn from(settings: &UniformSettings) -> Self {
        Self {
            team_name: settings.team_name.clone(),
            primary_color: settings.primary_color.clone(),
            secondary_color: settings.secondary_color.clone(),
            logo_url: settings.logo_url.clone(),
            header_image_url: settings.header_image_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Formation;

    #[test]
    fn test_match_row_parses_valid_date() {
        let m = MatchRecord::new("2025-04-12", "league", "FC Riverside", Formation::F442);
        let row = MatchRow::from_match(&m).unwrap();
        assert_eq!(row.date, NaiveDate::from_ymd_opt(2025, 4, 12).unwrap());
        assert_eq!(row.formation, "4-4-2");
    }

    #[test]
    fn test_match_row_rejects_malformed_date() {
        let m = MatchRecord::new("12/04/2025", "league", "FC Riverside", Formation::F442);
        let err = MatchRow::from_match(&m).unwrap_err();
        assert!(err.contains("12/04/2025"));
    }
}
