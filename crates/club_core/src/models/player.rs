use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A roster entry.
///
/// `id` is the stable opaque identity. `number` is the jersey number and
/// doubles as the natural key for merge matching when ids are absent or
/// foreign; within one Document no two players carry the same number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: String,

    pub name: String,

    /// Jersey number. Optional because a cloud record may arrive with an
    /// id but no number; uniqueness holds over the assigned values.
    #[serde(default)]
    pub number: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// Retired players stay in the Document for match history but drop
    /// out of roster screens.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Player {
    pub fn new(name: impl Into<String>, number: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            number: Some(number),
            position: None,
            is_active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_gets_fresh_id() {
        let a = Player::new("Kim", 7);
        let b = Player::new("Kim", 7);
        assert_ne!(a.id, b.id);
        assert!(a.is_active);
        assert_eq!(a.number, Some(7));
    }

    #[test]
    fn test_deserialize_defaults_missing_fields() {
        let p: Player = serde_json::from_str(r#"{"id":"p1","name":"Lee"}"#).unwrap();
        assert_eq!(p.number, None);
        assert_eq!(p.position, None);
        assert!(p.is_active);
    }
}
