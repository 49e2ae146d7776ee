// Local Store: durable on-device persistence of the club Document,
// with backward-compatible migration from older storage layouts.

pub mod backend;
pub mod error;
pub mod format;
pub mod manager;

pub use backend::{FileStorage, MemoryStorage, StoragePort};
pub use error::StoreError;
pub use format::{from_json, to_json, Document};
pub use manager::ClubStore;

/// The current storage key the Document is persisted under.
pub const CANONICAL_KEY: &str = "club-data";

/// Storage keys used by earlier releases, highest priority first.
/// Read once for migration, then deleted.
pub const LEGACY_KEYS: [&str; 3] = ["soccer-team-data", "team-data-v2", "team-manager-state"];
