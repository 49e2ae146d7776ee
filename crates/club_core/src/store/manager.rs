use std::sync::Mutex;

use super::backend::StoragePort;
use super::error::StoreError;
use super::format::{from_json, to_json, Document};
use super::{CANONICAL_KEY, LEGACY_KEYS};

/// Owner of the persisted Document.
///
/// All read-modify-write cycles go through one internal mutex, so two
/// overlapping operations (a sync kicked off twice, an import racing a
/// sync) serialize instead of clobbering each other's writes.
pub struct ClubStore<S: StoragePort> {
    storage: S,
    guard: Mutex<()>,
}

impl<S: StoragePort> ClubStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage, guard: Mutex::new(()) }
    }

    /// Load the Document, defaulting every absent piece.
    ///
    /// NOT read-only: the first call that finds data under a legacy
    /// storage key copies it to the canonical key and deletes every
    /// legacy key it encounters, whether or not the copy happened. Test
    /// fixtures seeded under legacy keys are consumed by this call.
    ///
    /// A corrupt canonical payload is treated as absent and replaced
    /// with a default Document; no error crosses this boundary.
    pub fn load(&self) -> Document {
        let _guard = self.guard.lock().unwrap();
        self.load_locked()
    }

    /// Serialize and write the full Document to the canonical key,
    /// replacing any prior value.
    pub fn save(&self, doc: &Document) -> Result<(), StoreError> {
        let _guard = self.guard.lock().unwrap();
        self.save_locked(doc)
    }

    /// One serialized read-modify-write cycle: load a snapshot, apply
    /// `mutate`, persist the result. The mutex is held across the whole
    /// cycle.
    pub fn update<T>(&self, mutate: impl FnOnce(&mut Document) -> T) -> Result<T, StoreError> {
        let _guard = self.guard.lock().unwrap();
        let mut doc = self.load_locked();
        let out = mutate(&mut doc);
        self.save_locked(&doc)?;
        Ok(out)
    }

    fn load_locked(&self) -> Document {
        self.migrate_legacy_keys();

        let text = match self.storage.read(CANONICAL_KEY) {
            Ok(Some(text)) => text,
            Ok(None) => return Document::default(),
            Err(err) => {
                log::warn!("Storage read failed, starting from defaults: {}", err);
                return Document::default();
            }
        };

        match from_json(&text) {
            Ok(doc) => doc,
            Err(err) => {
                log::warn!("Corrupt club data, starting from defaults: {}", err);
                Document::default()
            }
        }
    }

    fn save_locked(&self, doc: &Document) -> Result<(), StoreError> {
        let text = to_json(doc)?;
        self.storage.write(CANONICAL_KEY, &text)
    }

    /// One-shot legacy storage migration.
    ///
    /// Legacy keys are checked in priority order. The first one holding
    /// data while the canonical key is empty gets copied over; every
    /// legacy key found is deleted regardless of the copy outcome, so a
    /// second load never sees them.
    fn migrate_legacy_keys(&self) {
        for key in LEGACY_KEYS {
            let payload = match self.storage.read(key) {
                Ok(payload) => payload,
                Err(err) => {
                    log::warn!("Could not read legacy key {}: {}", key, err);
                    continue;
                }
            };
            let Some(payload) = payload else { continue };

            let canonical_empty = matches!(self.storage.read(CANONICAL_KEY), Ok(None));
            if canonical_empty {
                match self.storage.write(CANONICAL_KEY, &payload) {
                    Ok(()) => log::info!("Migrated legacy storage key {}", key),
                    Err(err) => log::warn!("Could not migrate legacy key {}: {}", key, err),
                }
            }

            if let Err(err) = self.storage.remove(key) {
                log::warn!("Could not delete legacy key {}: {}", key, err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Player;
    use crate::store::backend::MemoryStorage;

    fn store() -> ClubStore<MemoryStorage> {
        ClubStore::new(MemoryStorage::new())
    }

    #[test]
    fn test_load_on_empty_storage_returns_complete_defaults() {
        let doc = store().load();
        assert!(doc.players.is_empty());
        assert!(doc.matches.is_empty());
        assert!(doc.lineups.is_empty());
        assert!(doc.subs.is_empty());
        assert!(doc.photos.is_empty());
        assert!(doc.comments.is_empty());
    }

    #[test]
    fn test_load_on_corrupt_payload_fails_soft() {
        let storage = MemoryStorage::new();
        storage.write(CANONICAL_KEY, "{not json at all").unwrap();
        let store = ClubStore::new(storage);

        let doc = store.load();
        assert!(doc.players.is_empty());
    }

    #[test]
    fn test_load_merges_defaults_under_partial_payload() {
        let storage = MemoryStorage::new();
        storage
            .write(CANONICAL_KEY, r#"{"players":[{"id":"p1","name":"Seo","number":4}]}"#)
            .unwrap();
        let store = ClubStore::new(storage);

        let doc = store.load();
        assert_eq!(doc.players.len(), 1);
        assert!(doc.matches.is_empty());
        assert!(doc.comments.is_empty());
    }

    #[test]
    fn test_legacy_migration_is_destructive_and_one_shot() {
        let storage = MemoryStorage::new();
        storage
            .write("soccer-team-data", r#"{"players":[{"id":"p1","name":"Seo","number":4}]}"#)
            .unwrap();
        let store = ClubStore::new(storage);

        // First load copies the legacy payload and deletes the legacy key.
        let doc = store.load();
        assert_eq!(doc.players.len(), 1);
        assert!(store.storage.read("soccer-team-data").unwrap().is_none());
        assert!(store.storage.read(CANONICAL_KEY).unwrap().is_some());

        // Second load finds no legacy key and the canonical data intact.
        let doc2 = store.load();
        assert_eq!(doc2, doc);
    }

    #[test]
    fn test_legacy_keys_checked_in_priority_order() {
        let storage = MemoryStorage::new();
        storage.write("soccer-team-data", r#"{"players":[{"id":"a","name":"A"}]}"#).unwrap();
        storage.write("team-data-v2", r#"{"players":[{"id":"b","name":"B"}]}"#).unwrap();
        let store = ClubStore::new(storage);

        let doc = store.load();
        // The higher-priority key wins; both legacy keys are gone.
        assert_eq!(doc.players[0].id, "a");
        assert!(store.storage.read("soccer-team-data").unwrap().is_none());
        assert!(store.storage.read("team-data-v2").unwrap().is_none());
    }

    #[test]
    fn test_legacy_key_never_overwrites_canonical_data() {
        let storage = MemoryStorage::new();
        storage.write(CANONICAL_KEY, r#"{"players":[{"id":"new","name":"New"}]}"#).unwrap();
        storage.write("team-manager-state", r#"{"players":[{"id":"old","name":"Old"}]}"#).unwrap();
        let store = ClubStore::new(storage);

        let doc = store.load();
        assert_eq!(doc.players[0].id, "new");
        // Legacy key still cleaned up.
        assert!(store.storage.read("team-manager-state").unwrap().is_none());
    }

    #[test]
    fn test_save_overwrites_fully() {
        let store = store();
        let mut doc = Document::new();
        doc.players.push(Player::new("Park", 10));
        store.save(&doc).unwrap();

        let mut smaller = Document::new();
        smaller.players.push(Player::new("Lee", 7));
        store.save(&smaller).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.players.len(), 1);
        assert_eq!(loaded.players[0].name, "Lee");
    }

    #[test]
    fn test_update_serializes_concurrent_writers() {
        use std::sync::Arc;

        let store = Arc::new(ClubStore::new(MemoryStorage::new()));
        let mut handles = Vec::new();
        for i in 0..8u32 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                store
                    .update(|doc| doc.players.push(Player::new(format!("P{}", i), 50 + i)))
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        // Every read-modify-write cycle landed; none was lost to a
        // concurrent overwrite.
        assert_eq!(store.load().players.len(), 8);
    }

    #[test]
    fn test_update_is_read_modify_write() {
        let store = store();
        store
            .update(|doc| {
                doc.players.push(Player::new("Park", 10));
            })
            .unwrap();
        let count = store
            .update(|doc| {
                doc.players.push(Player::new("Lee", 7));
                doc.players.len()
            })
            .unwrap();
        assert_eq!(count, 2);
        assert_eq!(store.load().players.len(), 2);
    }
}
