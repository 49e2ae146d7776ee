use serde_json::Value;
use uuid::Uuid;

use crate::import::normalize::parse_jersey;
use crate::import::SkipReason;
use crate::models::Player;
use crate::store::Document;

/// A remote row that survived upstream validation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RemoteRow {
    /// Usable id: non-empty string (numeric ids are stringified).
    pub id: Option<String>,
    pub name: String,
    /// Jersey value as sent; `jersey` wins over `number`, the two are one
    /// semantic field.
    pub jersey: Option<Value>,
    pub position: Option<String>,
}

/// How an incoming row is matched against the local roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MatchKey {
    Id(String),
    /// `jersey` and `number` share this namespace on purpose.
    Jersey(u32),
}

/// A row the pipeline refused after validation, with the reason.
#[derive(Debug, Clone)]
pub struct SkippedRemote {
    pub row: Value,
    pub reason: SkipReason,
}

/// Counts for one upsert pass. Unlike the importer, a matched record
/// only counts as updated when the merge actually changed it.
#[derive(Debug, Clone, Default)]
pub struct UpsertReport {
    pub added: usize,
    pub updated: usize,
    pub skipped: Vec<SkippedRemote>,
}

/// Upstream filter: rows failing this are dropped from the merge input
/// entirely and never reach the skip list.
///
/// A row is eligible when it is a non-null object, has a non-empty
/// string `name`, and has at least one of `id`, `jersey`, `number`
/// present and non-null.
pub(crate) fn validate_remote_row(value: &Value) -> Option<RemoteRow> {
    let obj = value.as_object()?;

    let name = obj.get("name")?.as_str()?.trim();
    if name.is_empty() {
        return None;
    }

    let defined = |key: &str| obj.get(key).is_some_and(|v| !v.is_null());
    if !defined("id") && !defined("jersey") && !defined("number") {
        return None;
    }

    let id = obj.get("id").and_then(scalar_string);
    let jersey = ["jersey", "number"]
        .iter()
        .find_map(|key| obj.get(*key).filter(|v| !v.is_null()).cloned());
    let position = obj.get("position").and_then(|v| v.as_str()).map(str::to_string);

    Some(RemoteRow { id, name: name.to_string(), jersey, position })
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Pick the single match key for an incoming row: id first, else
/// jersey/number. A jersey that does not normalize to a positive integer
/// cannot key (or become) a typed roster number and skips the row.
pub(crate) fn select_key(row: &RemoteRow) -> Result<MatchKey, SkipReason> {
    if let Some(id) = &row.id {
        return Ok(MatchKey::Id(id.clone()));
    }
    match &row.jersey {
        Some(jersey) => parse_jersey(jersey)
            .map(MatchKey::Jersey)
            .map_err(SkipReason::InvalidJersey),
        None => Err(SkipReason::NoMatchKey),
    }
}

/// Integrate fetched remote rows into the local roster.
///
/// Each eligible row is matched by its single key; a match shallow-merges
/// the incoming fields over the local record, incoming values winning,
/// except that an established local id is never overwritten. Unmatched
/// rows are appended, generating an id when the row lacks one.
pub fn upsert_remote_players(doc: &mut Document, rows: &[Value]) -> UpsertReport {
    let mut report = UpsertReport::default();

    for value in rows {
        let Some(row) = validate_remote_row(value) else { continue };

        let key = match select_key(&row) {
            Ok(key) => key,
            Err(reason) => {
                report.skipped.push(SkippedRemote { row: value.clone(), reason });
                continue;
            }
        };

        let index = match &key {
            MatchKey::Id(id) => doc.players.iter().position(|p| &p.id == id),
            MatchKey::Jersey(n) => doc.players.iter().position(|p| p.number == Some(*n)),
        };

        let jersey_number = row.jersey.as_ref().and_then(|j| parse_jersey(j).ok());

        match index {
            Some(i) => {
                let existing = &doc.players[i];
                let merged = Player {
                    id: if existing.id.is_empty() {
                        row.id.clone().unwrap_or_else(generated_id)
                    } else {
                        existing.id.clone()
                    },
                    name: row.name.clone(),
                    number: jersey_number.or(existing.number),
                    position: row.position.clone().or_else(|| existing.position.clone()),
                    is_active: existing.is_active,
                };
                if merged != doc.players[i] {
                    doc.players[i] = merged;
                    report.updated += 1;
                }
            }
            None => {
                doc.players.push(Player {
                    id: row.id.clone().unwrap_or_else(generated_id),
                    name: row.name.clone(),
                    number: jersey_number,
                    position: row.position.clone(),
                    is_active: true,
                });
                report.added += 1;
            }
        }
    }

    report
}

fn generated_id() -> String {
    Uuid::new_v4().to_string()
}
