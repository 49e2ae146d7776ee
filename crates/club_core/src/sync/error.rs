use thiserror::Error;

use crate::store::StoreError;

/// Everything that can go wrong between the local store and the cloud.
///
/// Network and remote-side failures are caught at the port boundary and
/// carried as values; no transport exception ever crosses into callers.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Remote error: {0}")]
    Remote(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
