use crate::store::{ClubStore, StoragePort};

use super::error::SyncError;
use super::remote::{PlayerCloud, SaveReceipt};
use super::upsert::{upsert_remote_players, UpsertReport};

/// Caller-visible outcome of a sync pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Imported { added: usize, updated: usize },
    /// Nothing to do; the local store was not touched (or the upsert
    /// changed nothing).
    NoChange,
    /// The remote collection is empty. Only the explicit upsert-sync
    /// mode reports this; the background mode folds it into `NoChange`.
    NoData,
}

/// Reconciles the local roster with the remote player collection.
///
/// All three operations are thin wrappers over one fetch → validate →
/// upsert pipeline; they differ only in how they classify the outcome
/// for the caller.
pub struct CloudSync<'a, S: StoragePort, C: PlayerCloud> {
    store: &'a ClubStore<S>,
    cloud: &'a C,
}

impl<'a, S: StoragePort, C: PlayerCloud> CloudSync<'a, S, C> {
    pub fn new(store: &'a ClubStore<S>, cloud: &'a C) -> Self {
        Self { store, cloud }
    }

    /// Background reconciliation on app start.
    ///
    /// An empty remote, or an upsert that changed nothing, both report
    /// `NoChange` so the UI stays quiet.
    pub fn sync_with_cloud(&self) -> Result<SyncOutcome, SyncError> {
        let snapshot = self.cloud.fetch_players()?;
        if snapshot.players.is_empty() {
            return Ok(SyncOutcome::NoChange);
        }

        let report = self.run_upsert(&snapshot.players)?;
        if report.added == 0 && report.updated == 0 {
            Ok(SyncOutcome::NoChange)
        } else {
            Ok(SyncOutcome::Imported { added: report.added, updated: report.updated })
        }
    }

    /// Caller-initiated push of the full local player list. Pure
    /// forwarding; no local mutation.
    pub fn save_players_to_cloud(&self, credential: &str) -> Result<SaveReceipt, SyncError> {
        let doc = self.store.load();
        self.cloud.store_players(&doc.players, credential)
    }

    /// User-initiated "sync now".
    ///
    /// Same pipeline as `sync_with_cloud`, but the user expects
    /// confirmation even when nothing changed: an empty remote reports
    /// `NoData`, and the literal upsert counts come back otherwise.
    pub fn sync_from_cloud_upsert(&self) -> Result<SyncOutcome, SyncError> {
        let snapshot = self.cloud.fetch_players()?;
        if snapshot.players.is_empty() {
            return Ok(SyncOutcome::NoData);
        }

        let report = self.run_upsert(&snapshot.players)?;
        Ok(SyncOutcome::Imported { added: report.added, updated: report.updated })
    }

    fn run_upsert(&self, rows: &[serde_json::Value]) -> Result<UpsertReport, SyncError> {
        let report = self.store.update(|doc| upsert_remote_players(doc, rows))?;
        for skipped in &report.skipped {
            log::warn!("Cloud row skipped: {}", skipped.reason);
        }
        log::info!(
            "Cloud upsert: {} added, {} updated, {} skipped",
            report.added,
            report.updated,
            report.skipped.len()
        );
        Ok(report)
    }
}
