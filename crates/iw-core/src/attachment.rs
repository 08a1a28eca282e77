//! The attachment capability: per-link key/value metadata.

use std::any::{self, Any};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::{AttachmentError, AttachmentResult};
use crate::inspectable::Inspectable;
use crate::key::AnyKey;

/// A type-erased attachment value.
pub type AttachmentValue = Arc<dyn Any + Send + Sync>;

/// A chain participant that publishes key/value metadata.
///
/// Keys are any [`AnyKey`]: a string name, an enum variant, a unit struct.
/// Mutation goes through `&self`: the backing store decides how concurrent
/// `set`/`get` calls are ordered. Setting a key overwrites the previous
/// value; getting a missing key returns `None`.
pub trait Attachable: Inspectable {
    /// The value stored under `key`, if any.
    fn get_attachment(&self, key: &dyn AnyKey) -> Option<AttachmentValue>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_attachment(&self, key: &dyn AnyKey, value: AttachmentValue);
}

/// An attachment key that fixes the type of its value.
///
/// The key part `K` defaults to a `&'static str` name. The value type is
/// checked when the value is read back.
///
/// ```rust
/// use iw_core::AttachmentKey;
///
/// const BUSY: AttachmentKey<String> = AttachmentKey::new("busy");
/// assert_eq!(BUSY.name(), "busy");
///
/// #[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// enum Slot {
///     Owner,
/// }
/// const OWNER: AttachmentKey<u64, Slot> = AttachmentKey::new(Slot::Owner);
/// assert_eq!(OWNER.key(), &Slot::Owner);
/// ```
pub struct AttachmentKey<V, K = &'static str> {
    key: K,
    _value: PhantomData<fn() -> V>,
}

impl<V, K> AttachmentKey<V, K> {
    pub const fn new(key: K) -> Self {
        Self {
            key,
            _value: PhantomData,
        }
    }

    pub const fn key(&self) -> &K {
        &self.key
    }
}

impl<V> AttachmentKey<V> {
    pub const fn name(&self) -> &'static str {
        self.key
    }
}

impl<V, K: Clone> Clone for AttachmentKey<V, K> {
    fn clone(&self) -> Self {
        Self::new(self.key.clone())
    }
}

impl<V, K: Copy> Copy for AttachmentKey<V, K> {}

impl<V, K: PartialEq> PartialEq for AttachmentKey<V, K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<V, K: Eq> Eq for AttachmentKey<V, K> {}

impl<V, K: fmt::Debug> fmt::Debug for AttachmentKey<V, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachmentKey")
            .field("key", &self.key)
            .field("value_type", &any::type_name::<V>())
            .finish()
    }
}

/// Downcast a raw attachment value to the type fixed by `key`.
pub fn downcast_value<V: Any + Send + Sync, K: AnyKey>(
    key: &AttachmentKey<V, K>,
    value: AttachmentValue,
) -> AttachmentResult<Arc<V>> {
    value
        .downcast::<V>()
        .map_err(|_| AttachmentError::TypeMismatch {
            key: key.key.label(),
            expected: any::type_name::<V>(),
        })
}

/// Typed access on top of [`Attachable`].
pub trait AttachableExt: Attachable {
    /// Store `value` under `key`.
    fn attach<V: Any + Send + Sync, K: AnyKey>(&self, key: &AttachmentKey<V, K>, value: V) {
        self.set_attachment(&key.key, Arc::new(value));
    }

    /// The value under `key`, or `None` if absent or of another type.
    fn attachment<V: Any + Send + Sync, K: AnyKey>(
        &self,
        key: &AttachmentKey<V, K>,
    ) -> Option<Arc<V>> {
        self.try_attachment(key).ok().flatten()
    }

    /// The value under `key`, distinguishing absence from a type mismatch.
    fn try_attachment<V: Any + Send + Sync, K: AnyKey>(
        &self,
        key: &AttachmentKey<V, K>,
    ) -> AttachmentResult<Option<Arc<V>>> {
        self.get_attachment(&key.key)
            .map(|value| downcast_value(key, value))
            .transpose()
    }
}

impl<T: Attachable + ?Sized> AttachableExt for T {}
