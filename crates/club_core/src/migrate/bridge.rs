use crate::store::Document;

use super::rows::{LineupRow, MatchRow, PlayerRow, SubstitutionRow, TeamSettingsRow};
use super::{MigrateError, RelationalStore};

/// Per-category success/failure counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub success: u32,
    pub failed: u32,
}

/// Outcome of one migration run.
///
/// `completed` means the run iterated everything — it is deliberately
/// true even when the tallies carry failures. Callers must inspect the
/// counts and the error list, not just the flag.
#[derive(Debug, Clone, Default)]
pub struct MigrationReport {
    pub completed: bool,
    pub players: Tally,
    pub matches: Tally,
    pub errors: Vec<String>,
    pub message: String,
}

/// One-shot, best-effort transfer of the whole Document into the
/// relational remote.
///
/// Every insert is isolated: a failure is tallied and recorded, never
/// propagated, and nothing already inserted is rolled back. A match row
/// that fails contributes no lineup or substitution rows; a match row
/// that succeeds gets its children attempted even when a sibling match
/// already failed. Records go over one at a time, in iteration order.
pub fn migrate_document<R: RelationalStore>(doc: &Document, remote: &mut R) -> MigrationReport {
    let mut report = MigrationReport::default();

    for player in &doc.players {
        match remote.insert_player(&PlayerRow::from(player)) {
            Ok(()) => report.players.success += 1,
            Err(err) => {
                report.players.failed += 1;
                report.errors.push(format!("player {}: {}", player.name, err));
            }
        }
    }

    for record in &doc.matches {
        let row = match MatchRow::from_match(record) {
            Ok(row) => row,
            Err(err) => {
                report.matches.failed += 1;
                report.errors.push(format!("match vs {}: {}", record.opponent, err));
                continue;
            }
        };

        if let Err(err) = remote.insert_match(&row) {
            report.matches.failed += 1;
            report.errors.push(format!("match vs {}: {}", record.opponent, err));
            continue;
        }
        report.matches.success += 1;

        migrate_match_children(record, remote, &mut report.errors);
    }

    if let Some(settings) = &doc.uniform_settings {
        if let Err(err) = remote.insert_team_settings(&TeamSettingsRow::from(settings)) {
            report.errors.push(format!("team settings: {}", err));
        }
    }

    report.completed = true;
    report.message = format!(
        "Migrated {} players and {} matches ({} errors)",
        report.players.success,
        report.matches.success,
        report.errors.len()
    );
    log::info!("{}", report.message);
    report
}

/// Lineup and substitution rows for one successfully inserted match.
/// Failures land in the shared error list; the match stays counted as
/// success, possibly with a partial lineup on the remote side.
fn migrate_match_children<R: RelationalStore>(
    record: &crate::models::MatchRecord,
    remote: &mut R,
    errors: &mut Vec<String>,
) {
    for (position, player_id) in record.assigned_positions() {
        let row = LineupRow {
            match_id: record.id.clone(),
            player_id: player_id.to_string(),
            position: position.to_string(),
            is_starter: true,
        };
        if let Err(err) = remote.insert_lineup(&row) {
            errors.push(format!("lineup {} vs {}: {}", position, record.opponent, err));
        }
    }

    for sub in &record.substitutions {
        let row = SubstitutionRow {
            match_id: record.id.clone(),
            player_out_id: sub.player_out.clone(),
            player_in_id: sub.player_in.clone(),
            minute: sub.minute,
            reason: sub.reason.clone(),
        };
        if let Err(err) = remote.insert_substitution(&row) {
            errors.push(format!("substitution minute {} vs {}: {}", sub.minute, record.opponent, err));
        }
    }
}

/// In-memory relational store for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryRelationalStore {
    pub players: Vec<PlayerRow>,
    pub matches: Vec<MatchRow>,
    pub lineups: Vec<LineupRow>,
    pub substitutions: Vec<SubstitutionRow>,
    pub team_settings: Vec<TeamSettingsRow>,
    /// Player numbers whose insert should be rejected (failure injection).
    pub reject_numbers: Vec<u32>,
}

impl RelationalStore for MemoryRelationalStore {
    fn insert_player(&mut self, row: &PlayerRow) -> Result<(), MigrateError> {
        if row.number.is_some_and(|n| self.reject_numbers.contains(&n)) {
            return Err(MigrateError::Rejected {
                table: "players".to_string(),
                message: format!("duplicate key number={:?}", row.number),
            });
        }
        self.players.push(row.clone());
        Ok(())
    }

    fn insert_match(&mut self, row: &MatchRow) -> Result<(), MigrateError> {
        self.matches.push(row.clone());
        Ok(())
    }

    fn insert_lineup(&mut self, row: &LineupRow) -> Result<(), MigrateError> {
        self.lineups.push(row.clone());
        Ok(())
    }

    fn insert_substitution(&mut self, row: &SubstitutionRow) -> Result<(), MigrateError> {
        self.substitutions.push(row.clone());
        Ok(())
    }

    fn insert_team_settings(&mut self, row: &TeamSettingsRow) -> Result<(), MigrateError> {
        self.team_settings.push(row.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Formation, MatchRecord, Player, Substitution, UniformSettings};

    fn document_with_two_matches(second_date: &str) -> Document {
        let mut doc = Document::new();
        doc.players.push(Player::new("Kim", 7));
        doc.players.push(Player::new("Park", 10));

        let mut first = MatchRecord::new("2025-04-12", "league", "FC Riverside", Formation::F442);
        first.assign_position("GK", "p-gk").unwrap();
        first.assign_position("ST1", "p-st").unwrap();
        first.add_substitution(Substitution::new(60, "p-st", "p-sub")).unwrap();
        doc.matches.push(first);

        let second = MatchRecord::new(second_date, "cup", "Athletic Han", Formation::F433);
        doc.matches.push(second);
        doc
    }

    #[test]
    fn test_full_migration_counts_everything() {
        let doc = document_with_two_matches("2025-05-03");
        let mut remote = MemoryRelationalStore::default();

        let report = migrate_document(&doc, &mut remote);
        assert!(report.completed);
        assert_eq!(report.players, Tally { success: 2, failed: 0 });
        assert_eq!(report.matches, Tally { success: 2, failed: 0 });
        assert!(report.errors.is_empty());
        assert_eq!(remote.lineups.len(), 2);
        assert_eq!(remote.substitutions.len(), 1);
    }

    #[test]
    fn test_malformed_date_isolates_one_match() {
        let doc = document_with_two_matches("not-a-date");
        let mut remote = MemoryRelationalStore::default();

        let report = migrate_document(&doc, &mut remote);
        assert!(report.completed, "completion flag holds despite failures");
        assert_eq!(report.matches, Tally { success: 1, failed: 1 });
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("not-a-date"));

        // The healthy match's children still went over.
        assert_eq!(remote.lineups.len(), 2);
        assert_eq!(remote.substitutions.len(), 1);
    }

    #[test]
    fn test_player_failures_do_not_stop_the_run() {
        let doc = document_with_two_matches("2025-05-03");
        let mut remote =
            MemoryRelationalStore { reject_numbers: vec![7], ..Default::default() };

        let report = migrate_document(&doc, &mut remote);
        assert!(report.completed);
        assert_eq!(report.players, Tally { success: 1, failed: 1 });
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("Kim"));
        // Matches still migrated after the player failure.
        assert_eq!(report.matches.success, 2);
    }

    #[test]
    fn test_team_settings_row_is_sent() {
        let mut doc = document_with_two_matches("2025-05-03");
        doc.uniform_settings =
            Some(UniformSettings { team_name: "FC Dynamo".to_string(), ..Default::default() });
        let mut remote = MemoryRelationalStore::default();

        migrate_document(&doc, &mut remote);
        assert_eq!(remote.team_settings.len(), 1);
        assert_eq!(remote.team_settings[0].team_name, "FC Dynamo");
    }
}
