use std::sync::Arc;

use iw_core::{AnyKey, AttachmentValue, OwnedKey};

/// Keyed storage for attachment values.
///
/// Implementations decide their own thread-safety; the trait only requires
/// `Send + Sync` so a store can be shared between links with `Arc`.
/// Keys are compared by concrete type and value (see [`AnyKey`]).
/// Invariants:
/// - `set` overwrites any previous value for the key.
/// - `get` returns `None` for a missing key and never fails.
/// - No ordering across keys is promised.
pub trait AttachmentStore: Send + Sync {
    /// The value stored under `key`, if any.
    fn get(&self, key: &dyn AnyKey) -> Option<AttachmentValue>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &dyn AnyKey, value: AttachmentValue);

    /// Remove the value under `key`, returning it if it existed.
    fn remove(&self, key: &dyn AnyKey) -> Option<AttachmentValue>;

    /// All keys currently holding a value, in no particular order.
    fn keys(&self) -> Vec<OwnedKey>;

    /// Number of stored values.
    fn len(&self) -> usize;

    /// Check whether a value is stored under `key`.
    fn contains(&self, key: &dyn AnyKey) -> bool {
        self.get(key).is_some()
    }

    /// Returns `true` if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: AttachmentStore + ?Sized> AttachmentStore for Arc<S> {
    fn get(&self, key: &dyn AnyKey) -> Option<AttachmentValue> {
        (**self).get(key)
    }

    fn set(&self, key: &dyn AnyKey, value: AttachmentValue) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &dyn AnyKey) -> Option<AttachmentValue> {
        (**self).remove(key)
    }

    fn keys(&self) -> Vec<OwnedKey> {
        (**self).keys()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn contains(&self, key: &dyn AnyKey) -> bool {
        (**self).contains(key)
    }
}
