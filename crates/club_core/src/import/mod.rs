//! Bulk roster import: merge an externally supplied list of loosely-typed
//! player rows into the Document, classifying every input row as added,
//! updated, or skipped with a reason.
//!
//! Bad rows are never errors: they come back as classified skip entries
//! so the caller can render diagnostics and re-submit corrected data.

pub(crate) mod normalize;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Player;
use crate::store::{ClubStore, Document, StoragePort, StoreError};

use normalize::{jersey_is_blank, parse_jersey};

/// One row of an uploaded roster file: both fields may be missing, blank,
/// or carry the wrong JSON type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawPlayerRow {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub jersey: Option<Value>,
}

/// Why a row was not merged. The `Display` strings are what reaches the
/// user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    EmptyName,
    EmptyJersey,
    /// Jersey present but not a usable number; carries the raw value.
    InvalidJersey(String),
    /// Remote row carrying neither id nor jersey/number.
    NoMatchKey,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EmptyName => write!(f, "name empty or invalid"),
            SkipReason::EmptyJersey => write!(f, "jersey empty or invalid"),
            SkipReason::InvalidJersey(raw) => write!(f, "jersey not a number: {}", raw),
            SkipReason::NoMatchKey => write!(f, "no id or jersey/number"),
        }
    }
}

/// A row the importer refused, paired with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub row: RawPlayerRow,
    pub reason: SkipReason,
}

/// Outcome of one bulk import. The skip list is complete; truncating it
/// for display is the caller's business.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    pub added: usize,
    pub updated: usize,
    pub skipped: Vec<SkippedRow>,
}

/// A row that survived validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidRow {
    pub name: String,
    pub number: u32,
}

/// Classify one raw row. First failing check wins; checks run in the
/// fixed order name, jersey presence, jersey numeric.
pub(crate) fn validate_row(row: &RawPlayerRow) -> Result<ValidRow, SkipReason> {
    let name = row.name.as_deref().map(str::trim).unwrap_or("");
    if name.is_empty() {
        return Err(SkipReason::EmptyName);
    }

    if jersey_is_blank(row.jersey.as_ref()) {
        return Err(SkipReason::EmptyJersey);
    }

    // jersey_is_blank ruled out None above.
    let jersey = row.jersey.as_ref().ok_or(SkipReason::EmptyJersey)?;
    let number = parse_jersey(jersey).map_err(SkipReason::InvalidJersey)?;

    Ok(ValidRow { name: name.to_string(), number })
}

/// Merge validated rows into the Document's player collection.
///
/// Matching is by exact jersey number only. A match overwrites the
/// existing record's name and number and preserves everything else; no
/// match appends a new player with a fresh id. Re-running the same input
/// therefore yields pure updates, never duplicates.
pub fn upsert_rows(doc: &mut Document, rows: &[RawPlayerRow]) -> ImportReport {
    let mut report = ImportReport::default();

    for raw in rows {
        let valid = match validate_row(raw) {
            Ok(valid) => valid,
            Err(reason) => {
                report.skipped.push(SkippedRow { row: raw.clone(), reason });
                continue;
            }
        };

        match doc.players.iter_mut().find(|p| p.number == Some(valid.number)) {
            Some(existing) => {
                existing.name = valid.name;
                existing.number = Some(valid.number);
                report.updated += 1;
            }
            None => {
                doc.players.push(Player::new(valid.name, valid.number));
                report.added += 1;
            }
        }
    }

    log::info!(
        "Roster import: {} added, {} updated, {} skipped",
        report.added,
        report.updated,
        report.skipped.len()
    );
    report
}

/// Run a bulk import against the store as one serialized
/// read-modify-write cycle.
pub fn import_roster<S: StoragePort>(
    store: &ClubStore<S>,
    rows: &[RawPlayerRow],
) -> Result<ImportReport, StoreError> {
    store.update(|doc| upsert_rows(doc, rows))
}
