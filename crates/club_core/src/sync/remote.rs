use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::models::Player;

use super::error::SyncError;

/// The remote player collection as fetched.
///
/// Rows stay loosely typed (`Value`): validation and shape decisions
/// belong to the upsert pipeline, not the transport.
#[derive(Debug, Clone, Default)]
pub struct RemoteSnapshot {
    pub players: Vec<Value>,
    pub last_updated: Option<String>,
    pub version: u64,
}

/// What the remote reports back after a successful write. `version`
/// increments monotonically server-side; `last_updated` is stamped there
/// too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReceipt {
    pub version: u64,
    pub last_updated: Option<String>,
}

/// Read/write access to the remote player collection.
pub trait PlayerCloud {
    fn fetch_players(&self) -> Result<RemoteSnapshot, SyncError>;

    /// Push the full local player list. Requires a caller-supplied
    /// credential; a rejected credential surfaces as
    /// `SyncError::Unauthorized`, never as a panic.
    fn store_players(&self, players: &[Player], credential: &str) -> Result<SaveReceipt, SyncError>;
}

/// Wire envelope shared by the fetch and store endpoints.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    data: Option<SnapshotPayload>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotPayload {
    #[serde(default)]
    players: Vec<Value>,
    #[serde(default)]
    last_updated: Option<String>,
    #[serde(default)]
    version: u64,
}

/// HTTP implementation of the cloud port.
pub struct HttpPlayerCloud {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpPlayerCloud {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url: base_url.into(), client }
    }

    fn unwrap_envelope(
        status: u16,
        envelope: Envelope,
        operation: &str,
    ) -> Result<SnapshotPayload, SyncError> {
        if envelope.success {
            return Ok(envelope.data.unwrap_or_default());
        }

        let message = envelope
            .message
            .unwrap_or_else(|| format!("Remote {} failed with status {}", operation, status));
        if status == 401 {
            Err(SyncError::Unauthorized(message))
        } else {
            Err(SyncError::Remote(message))
        }
    }
}

impl PlayerCloud for HttpPlayerCloud {
    fn fetch_players(&self) -> Result<RemoteSnapshot, SyncError> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .map_err(|e| SyncError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let envelope: Envelope = response
            .json()
            .map_err(|e| SyncError::Remote(format!("Malformed remote response: {}", e)))?;

        let data = Self::unwrap_envelope(status, envelope, "fetch")?;
        log::debug!("Fetched {} remote players (version {})", data.players.len(), data.version);
        Ok(RemoteSnapshot {
            players: data.players,
            last_updated: data.last_updated,
            version: data.version,
        })
    }

    fn store_players(&self, players: &[Player], credential: &str) -> Result<SaveReceipt, SyncError> {
        let body = serde_json::json!({ "players": players });
        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(credential)
            .json(&body)
            .send()
            .map_err(|e| SyncError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let envelope: Envelope = response
            .json()
            .map_err(|e| SyncError::Remote(format!("Malformed remote response: {}", e)))?;

        let data = Self::unwrap_envelope(status, envelope, "save")?;
        log::info!("Stored {} players to cloud, version {}", players.len(), data.version);
        Ok(SaveReceipt { version: data.version, last_updated: data.last_updated })
    }
}
