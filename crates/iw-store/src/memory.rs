use std::collections::HashMap;
use std::sync::RwLock;

use iw_core::{AnyKey, AttachmentValue, OwnedKey};
use tracing::trace;

use crate::config::StoreConfig;
use crate::traits::AttachmentStore;

/// In-memory, HashMap-based attachment store.
///
/// Entries live behind a `RwLock`, so a set on one thread happens-before
/// any later get of the same key on another. Values are shared (`Arc`),
/// never cloned.
pub struct InMemoryAttachmentStore {
    entries: RwLock<HashMap<OwnedKey, AttachmentValue>>,
}

impl InMemoryAttachmentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::default())
    }

    /// Create a new empty store sized by `config`.
    pub fn with_config(config: &StoreConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(config.initial_capacity)),
        }
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryAttachmentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AttachmentStore for InMemoryAttachmentStore {
    fn get(&self, key: &dyn AnyKey) -> Option<AttachmentValue> {
        let map = self.entries.read().expect("lock poisoned");
        map.get(key).cloned()
    }

    fn set(&self, key: &dyn AnyKey, value: AttachmentValue) {
        let mut map = self.entries.write().expect("lock poisoned");
        if map.insert(key.to_owned_key(), value).is_some() {
            trace!(key = %key.label(), "replaced attachment");
        }
    }

    fn remove(&self, key: &dyn AnyKey) -> Option<AttachmentValue> {
        let mut map = self.entries.write().expect("lock poisoned");
        map.remove(key)
    }

    fn keys(&self) -> Vec<OwnedKey> {
        let map = self.entries.read().expect("lock poisoned");
        map.keys().cloned().collect()
    }

    fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    fn contains(&self, key: &dyn AnyKey) -> bool {
        let map = self.entries.read().expect("lock poisoned");
        map.contains_key(key)
    }
}

impl std::fmt::Debug for InMemoryAttachmentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryAttachmentStore")
            .field("entry_count", &count)
            .finish()
    }
}
