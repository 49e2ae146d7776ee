// Cloud Sync Engine: reconciles the local roster with the remote player
// collection using a permissive natural-key match (id OR jersey/number).

pub mod engine;
pub mod error;
pub mod remote;
pub mod upsert;

pub use engine::{CloudSync, SyncOutcome};
pub use error::SyncError;
pub use remote::{HttpPlayerCloud, PlayerCloud, RemoteSnapshot, SaveReceipt};
pub use upsert::{upsert_remote_players, SkippedRemote, UpsertReport};
