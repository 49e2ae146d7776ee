// Migration Bridge: one-shot, best-effort transfer of the Document into
// a normalized relational remote. Per-record failure isolation, no
// rollback.

pub mod bridge;
pub mod rest;
pub mod rows;

use thiserror::Error;

pub use bridge::{migrate_document, MemoryRelationalStore, MigrationReport, Tally};
pub use rest::RestRelationalStore;
pub use rows::{LineupRow, MatchRow, PlayerRow, SubstitutionRow, TeamSettingsRow};

#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Remote rejected {table} row: {message}")]
    Rejected { table: String, message: String },
}

/// Per-table write access to the relational remote.
pub trait RelationalStore {
    fn insert_player(&mut self, row: &PlayerRow) -> Result<(), MigrateError>;
    fn insert_match(&mut self, row: &MatchRow) -> Result<(), MigrateError>;
    fn insert_lineup(&mut self, row: &LineupRow) -> Result<(), MigrateError>;
    fn insert_substitution(&mut self, row: &SubstitutionRow) -> Result<(), MigrateError>;
    fn insert_team_settings(&mut self, row: &TeamSettingsRow) -> Result<(), MigrateError>;
}
