use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A photo attached to a match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Photo {
    pub id: String,

    #[serde(default)]
    pub match_id: String,

    pub url: String,

    #[serde(default)]
    pub caption: String,
}

/// A comment left on a match page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: String,

    #[serde(default)]
    pub match_id: String,

    #[serde(default)]
    pub author: String,

    pub text: String,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}
