use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{
    Comment, MatchRecord, Photo, Player, SavedLineup, SubRecord, UniformSet, UniformSettings,
};

use super::error::StoreError;

/// The single root structure holding all locally persisted club state.
///
/// Every collection field carries `#[serde(default)]`, so a partial
/// persisted payload deserializes with defaults filled in underneath it:
/// persisted values win on collision, absent keys become empty
/// collections, and consumers never branch on key presence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Document {
    #[serde(default)]
    pub players: Vec<Player>,

    #[serde(default)]
    pub matches: Vec<MatchRecord>,

    /// Saved lineup presets.
    #[serde(default)]
    pub lineups: Vec<SavedLineup>,

    /// Flat substitution log kept by older app versions.
    #[serde(default)]
    pub subs: Vec<SubRecord>,

    #[serde(default)]
    pub photos: Vec<Photo>,

    #[serde(default)]
    pub comments: Vec<Comment>,

    /// Per-team kit definitions, keyed by team id.
    #[serde(default)]
    pub team_uniforms: BTreeMap<String, UniformSet>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uniform_settings: Option<UniformSettings>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_by_id(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_by_number(&self, number: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.number == Some(number))
    }
}

/// Serialize the Document to its canonical JSON text.
pub fn to_json(doc: &Document) -> Result<String, StoreError> {
    Ok(serde_json::to_string(doc)?)
}

/// Parse persisted JSON text back into a Document.
///
/// Callers that need fail-soft semantics (the store manager) map the
/// error to `Document::default()` themselves.
pub fn from_json(text: &str) -> Result<Document, StoreError> {
    Ok(serde_json::from_str(text)?)
}
