//! Type-erased attachment keys.
//!
//! Any `'static` value with `Eq + Hash + Clone + Debug` can key an
//! attachment: string names, enums, unit structs. Two keys are equal only
//! if they have the same concrete type and compare equal as that type, so
//! the key `"busy"` (a `&'static str`) and `String::from("busy")` are
//! different keys.

use std::any::{Any, TypeId};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An attachment key with its concrete type erased.
///
/// Implemented for every suitable type; there is nothing to implement by
/// hand. Stores hold keys as [`OwnedKey`] and look them up through
/// `&dyn AnyKey`, so a lookup never allocates.
pub trait AnyKey: Any + Send + Sync + fmt::Debug {
    /// The key as `&dyn Any`, for checked downcasts.
    fn key_as_any(&self) -> &dyn Any;

    /// Same concrete type and equal as that type.
    fn key_eq(&self, other: &(dyn AnyKey + 'static)) -> bool;

    /// Feed the key, tagged with its concrete type, into `state`.
    fn key_hash(&self, state: &mut dyn Hasher);

    /// An owned copy of the key.
    fn to_owned_key(&self) -> OwnedKey;

    /// Human-readable form for logs and error messages: string keys as
    /// they are, anything else through `Debug`.
    fn label(&self) -> String;
}

impl<K> AnyKey for K
where
    K: Any + Eq + Hash + Clone + Send + Sync + fmt::Debug,
{
    fn key_as_any(&self) -> &dyn Any {
        self
    }

    fn key_eq(&self, other: &(dyn AnyKey + 'static)) -> bool {
        other
            .key_as_any()
            .downcast_ref::<K>()
            .is_some_and(|other| self == other)
    }

    fn key_hash(&self, mut state: &mut dyn Hasher) {
        TypeId::of::<K>().hash(&mut state);
        self.hash(&mut state);
    }

    fn to_owned_key(&self) -> OwnedKey {
        OwnedKey::new(self.clone())
    }

    fn label(&self) -> String {
        let any: &dyn Any = self;
        if let Some(name) = any.downcast_ref::<&'static str>() {
            (*name).to_string()
        } else if let Some(name) = any.downcast_ref::<String>() {
            name.clone()
        } else if let Some(key) = any.downcast_ref::<OwnedKey>() {
            key.as_key().label()
        } else {
            format!("{self:?}")
        }
    }
}

/// Look through an [`OwnedKey`] to the key it holds, so a borrowed owned
/// key and the bare key it was built from hash and compare alike.
fn resolve<'k>(key: &'k (dyn AnyKey + 'static)) -> &'k (dyn AnyKey + 'static) {
    match key.key_as_any().downcast_ref::<OwnedKey>() {
        Some(owned) => owned.as_key(),
        None => key,
    }
}

impl PartialEq for dyn AnyKey {
    fn eq(&self, other: &Self) -> bool {
        resolve(self).key_eq(resolve(other))
    }
}

impl Eq for dyn AnyKey {}

impl Hash for dyn AnyKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        resolve(self).key_hash(state);
    }
}

/// A shared, owned attachment key.
///
/// Cloning shares the key. Equality and hashing follow the wrapped key.
#[derive(Clone)]
pub struct OwnedKey(Arc<dyn AnyKey>);

impl OwnedKey {
    pub fn new<K: AnyKey>(key: K) -> Self {
        let any: &dyn Any = &key;
        match any.downcast_ref::<OwnedKey>() {
            Some(owned) => owned.clone(),
            None => Self(Arc::new(key)),
        }
    }

    /// The key as `&dyn AnyKey`.
    pub fn as_key(&self) -> &(dyn AnyKey + 'static) {
        &*self.0
    }

    /// The key as its concrete type, if it is a `K`.
    pub fn downcast_ref<K: Any>(&self) -> Option<&K> {
        self.0.key_as_any().downcast_ref::<K>()
    }
}

impl PartialEq for OwnedKey {
    fn eq(&self, other: &Self) -> bool {
        self.as_key() == other.as_key()
    }
}

impl Eq for OwnedKey {}

impl Hash for OwnedKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_key().hash(state);
    }
}

impl<'k> Borrow<dyn AnyKey + 'k> for OwnedKey {
    fn borrow(&self) -> &(dyn AnyKey + 'k) {
        &*self.0
    }
}

impl fmt::Debug for OwnedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
