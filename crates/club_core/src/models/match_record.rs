use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::formation::Formation;

/// One played (or scheduled) match with its lineup, substitutions and
/// attached media.
///
/// `lineup` is keyed by exactly the position labels of `formation`; an
/// empty string value means the slot is unassigned. `date` stays a plain
/// string as entered in the app; it is only validated when leaving the
/// Document (relational migration).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MatchRecord {
    pub id: String,

    pub date: String,

    /// Free-form category: "league", "cup", "friendly", ...
    #[serde(default)]
    pub match_type: String,

    #[serde(default)]
    pub opponent: String,

    #[serde(default)]
    pub venue: String,

    #[serde(default)]
    pub goals_for: u32,

    #[serde(default)]
    pub goals_against: u32,

    /// Player id of the man of the match, if voted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mvp: Option<String>,

    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub formation: Formation,

    /// position label -> player id ("" when unassigned).
    #[serde(default)]
    pub lineup: BTreeMap<String, String>,

    /// Photo URLs attached to this match.
    #[serde(default)]
    pub photos: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,

    #[serde(default)]
    pub substitutions: Vec<Substitution>,

    /// Tournament days are recorded as one MatchRecord holding several
    /// short sub-matches.
    #[serde(default)]
    pub is_multi_match: bool,

    #[serde(default)]
    pub sub_matches: Vec<SubMatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Substitution {
    pub id: String,

    /// Match minute, 0..=120 (extra time included).
    pub minute: u8,

    /// Player id leaving the pitch.
    pub player_out: String,

    /// Player id coming on.
    pub player_in: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

pub const MAX_SUBSTITUTION_MINUTE: u8 = 120;

impl Substitution {
    pub fn new(minute: u8, player_out: impl Into<String>, player_in: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            minute,
            player_out: player_out.into(),
            player_in: player_in.into(),
            reason: None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.minute > MAX_SUBSTITUTION_MINUTE {
            return Err(format!("Substitution minute out of range: {}", self.minute));
        }
        if self.player_out.is_empty() || self.player_in.is_empty() {
            return Err("Substitution needs both players".to_string());
        }
        Ok(())
    }
}

/// Segment score within a multi-game match day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SubMatch {
    pub id: String,
    pub opponent: String,
    #[serde(default)]
    pub goals_for: u32,
    #[serde(default)]
    pub goals_against: u32,
}

impl MatchRecord {
    pub fn new(
        date: impl Into<String>,
        match_type: impl Into<String>,
        opponent: impl Into<String>,
        formation: Formation,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: date.into(),
            match_type: match_type.into(),
            opponent: opponent.into(),
            formation,
            lineup: empty_lineup(formation),
            ..Default::default()
        }
    }

    /// Switch formation, keeping assignments for position labels both
    /// formations share and clearing everything else. The lineup keys
    /// afterwards are exactly the new formation's labels.
    pub fn set_formation(&mut self, formation: Formation) {
        let mut lineup = empty_lineup(formation);
        for (label, slot) in lineup.iter_mut() {
            if let Some(existing) = self.lineup.get(label) {
                *slot = existing.clone();
            }
        }
        self.formation = formation;
        self.lineup = lineup;
    }

    /// Assign a player to a position label of the current formation.
    pub fn assign_position(&mut self, label: &str, player_id: &str) -> Result<(), String> {
        match self.lineup.get_mut(label) {
            Some(slot) => {
                *slot = player_id.to_string();
                Ok(())
            }
            None => Err(format!(
                "Position {} does not exist in formation {}",
                label,
                self.formation.code()
            )),
        }
    }

    /// Record a substitution after range-checking it.
    pub fn add_substitution(&mut self, sub: Substitution) -> Result<(), String> {
        sub.validate()?;
        self.substitutions.push(sub);
        Ok(())
    }

    /// Position labels with a player assigned.
    pub fn assigned_positions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lineup
            .iter()
            .filter(|(_, player_id)| !player_id.is_empty())
            .map(|(label, player_id)| (label.as_str(), player_id.as_str()))
    }
}

fn empty_lineup(formation: Formation) -> BTreeMap<String, String> {
    formation.position_labels().iter().map(|label| (label.to_string(), String::new())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_lineup_keys_match_formation() {
        let m = MatchRecord::new("2025-04-12", "league", "FC Riverside", Formation::F442);
        let labels: Vec<&str> = m.lineup.keys().map(|k| k.as_str()).collect();
        let mut expected: Vec<&str> = Formation::F442.position_labels().to_vec();
        expected.sort_unstable();
        assert_eq!(labels, expected);
        assert!(m.lineup.values().all(|v| v.is_empty()));
    }

    #[test]
    fn test_set_formation_preserves_common_labels() {
        let mut m = MatchRecord::new("2025-04-12", "league", "FC Riverside", Formation::F442);
        m.assign_position("GK", "p-gk").unwrap();
        m.assign_position("CB1", "p-cb").unwrap();
        m.assign_position("LM", "p-lm").unwrap();

        m.set_formation(Formation::F433);

        // Shared labels keep their players.
        assert_eq!(m.lineup["GK"], "p-gk");
        assert_eq!(m.lineup["CB1"], "p-cb");
        // 4-3-3 has no LM; the assignment is gone and the key set is
        // exactly the new formation's labels.
        assert!(!m.lineup.contains_key("LM"));
        let mut expected: Vec<&str> = Formation::F433.position_labels().to_vec();
        expected.sort_unstable();
        let labels: Vec<&str> = m.lineup.keys().map(|k| k.as_str()).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_assign_unknown_position_rejected() {
        let mut m = MatchRecord::new("2025-04-12", "league", "FC Riverside", Formation::F433);
        assert!(m.assign_position("LM", "p1").is_err());
    }

    #[test]
    fn test_substitution_minute_range() {
        let mut m = MatchRecord::new("2025-04-12", "cup", "Athletic Han", Formation::F442);
        assert!(m.add_substitution(Substitution::new(120, "out", "in")).is_ok());
        assert!(m.add_substitution(Substitution::new(121, "out", "in")).is_err());
        assert!(m.add_substitution(Substitution::new(60, "out", "")).is_err());
        assert_eq!(m.substitutions.len(), 1);
    }
}
