use serde::{Deserialize, Serialize};

/// One kit: shirt / shorts / socks colors as CSS-style hex strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UniformSet {
    #[serde(default)]
    pub shirt: String,
    #[serde(default)]
    pub shorts: String,
    #[serde(default)]
    pub socks: String,
}

/// Club-wide branding and kit defaults shown on every screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UniformSettings {
    #[serde(default)]
    pub team_name: String,

    #[serde(default = "default_primary_color")]
    pub primary_color: String,

    #[serde(default)]
    pub secondary_color: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_image_url: Option<String>,
}

fn default_primary_color() -> String {
    "#1a5c2e".to_string()
}

impl Default for UniformSettings {
    fn default() -> Self {
        Self {
            team_name: String::new(),
            primary_color: default_primary_color(),
            secondary_color: String::new(),
            logo_url: None,
            header_image_url: None,
        }
    }
}
