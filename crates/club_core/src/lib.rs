//! # club_core - Local-First Club Data Engine
//!
//! This library owns the persistent state of an amateur soccer club
//! manager: roster, match records with lineups and substitutions, and
//! the plumbing that keeps an on-device JSON Document reconciled with a
//! remote player collection.
//!
//! ## Features
//! - Single-Document local store with legacy-key migration and fail-soft
//!   loading
//! - Bulk roster import with natural-key (jersey number) upsert and
//!   per-row skip diagnostics
//! - Cloud sync with a permissive id-or-jersey match and three
//!   caller-visible modes
//! - One-shot relational migration with per-record failure isolation

pub mod import;
pub mod migrate;
pub mod models;
pub mod store;
pub mod sync;

// Re-export the data model
pub use models::{
    Comment, Formation, MatchRecord, Photo, Player, SavedLineup, SubMatch, SubRecord,
    Substitution, UniformSet, UniformSettings,
};

// Re-export the local store
pub use store::{
    ClubStore, Document, FileStorage, MemoryStorage, StoragePort, StoreError, CANONICAL_KEY,
    LEGACY_KEYS,
};

// Re-export the importer
pub use import::{import_roster, upsert_rows, ImportReport, RawPlayerRow, SkipReason, SkippedRow};

// Re-export the cloud sync engine
pub use sync::{CloudSync, HttpPlayerCloud, PlayerCloud, SaveReceipt, SyncError, SyncOutcome};

// Re-export the migration bridge
pub use migrate::{migrate_document, MigrateError, MigrationReport, RelationalStore, Tally};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_import_then_migrate_end_to_end() {
        let store = ClubStore::new(MemoryStorage::new());

        let rows: Vec<RawPlayerRow> = serde_json::from_value(json!([
            {"name": "Kim", "jersey": 7},
            {"name": "Park", "jersey": "１０"},
            {"name": "", "jersey": 4}
        ]))
        .unwrap();
        let report = import_roster(&store, &rows).unwrap();
        assert_eq!((report.added, report.updated, report.skipped.len()), (2, 0, 1));

        let mut doc = store.load();
        let mut m = MatchRecord::new("2025-04-12", "league", "FC Riverside", Formation::F442);
        let keeper_id = doc.players[0].id.clone();
        m.assign_position("GK", &keeper_id).unwrap();
        doc.matches.push(m);
        store.save(&doc).unwrap();

        let mut remote = migrate::MemoryRelationalStore::default();
        let report = migrate_document(&store.load(), &mut remote);
        assert!(report.completed);
        assert_eq!(report.players.success, 2);
        assert_eq!(report.matches.success, 1);
        assert_eq!(remote.lineups.len(), 1);
    }
}
