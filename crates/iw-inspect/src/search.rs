//! Type search over a wrapper chain.

use std::any::Any;

use iw_core::Inspectable;
use tracing::debug;

use crate::chain::chain;

/// Returns `true` if any object in the chain, the root included, is a `T`.
///
/// The test is an exact runtime type check (`Any::is`). If `start` itself
/// is a `T` the chain is not unwrapped at all. For trait-level membership
/// ("does any link implement `Executor`?") use [`any_link`] with a
/// capability query instead.
pub fn is_instance_of<T: Any>(start: &(impl Inspectable + ?Sized)) -> bool {
    find_instance::<T>(start).is_some()
}

/// The outermost object in the chain that is a `T`.
pub fn find_instance<T: Any>(start: &(impl Inspectable + ?Sized)) -> Option<&T> {
    let found = chain(start).find_map(|link| link.as_any().downcast_ref::<T>());
    if found.is_some() {
        debug!(target_type = std::any::type_name::<T>(), "found instance in chain");
    }
    found
}

/// Returns `true` if any object in the chain satisfies `predicate`.
///
/// Stops at the first match.
pub fn any_link<P>(start: &(impl Inspectable + ?Sized), mut predicate: P) -> bool
where
    P: FnMut(&dyn Inspectable) -> bool,
{
    chain(start).any(|link| predicate(link))
}
