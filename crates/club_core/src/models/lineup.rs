use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::formation::Formation;

/// A reusable lineup preset the manager saves between matches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SavedLineup {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub formation: Formation,

    /// position label -> player id, same keying as `MatchRecord::lineup`.
    #[serde(default)]
    pub assignments: BTreeMap<String, String>,
}

/// Flat substitution log entry. Older app versions kept substitutions in
/// a top-level collection instead of inside the match; the Document keeps
/// the collection so those records survive round-trips.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SubRecord {
    pub id: String,

    #[serde(default)]
    pub match_id: String,

    #[serde(default)]
    pub minute: u8,

    #[serde(default)]
    pub player_out: String,

    #[serde(default)]
    pub player_in: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
