use std::time::Duration;

use serde::Serialize;

use super::rows::{LineupRow, MatchRow, PlayerRow, SubstitutionRow, TeamSettingsRow};
use super::{MigrateError, RelationalStore};

/// PostgREST-style relational remote: every table insert is a POST to
/// `<base>/rest/v1/<table>` carrying the service key.
pub struct RestRelationalStore {
    base_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl RestRelationalStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url: base_url.into(), api_key: api_key.into(), client }
    }

    fn insert<T: Serialize>(&self, table: &str, row: &T) -> Result<(), MigrateError> {
        let url = format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table);
        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .map_err(|e| MigrateError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(MigrateError::Rejected {
                table: table.to_string(),
                message: format!("{}: {}", status, body),
            });
        }
        Ok(())
    }
}

impl RelationalStore for RestRelationalStore {
    fn insert_player(&mut self, row: &PlayerRow) -> Result<(), MigrateError> {
        self.insert("players", row)
    }

    fn insert_match(&mut self, row: &MatchRow) -> Result<(), MigrateError> {
        self.insert("matches", row)
    }

    fn insert_lineup(&mut self, row: &LineupRow) -> Result<(), MigrateError> {
        self.insert("match_lineups", row)
    }

    fn insert_substitution(&mut self, row: &SubstitutionRow) -> Result<(), MigrateError> {
        self.insert("substitutions", row)
    }

    fn insert_team_settings(&mut self, row: &TeamSettingsRow) -> Result<(), MigrateError> {
        self.insert("team_settings", row)
    }
}
