//! Attachment lookup over a wrapper chain.
//!
//! Every object in the chain that answers
//! [`as_attachable`](iw_core::Inspectable::as_attachable) is asked for the
//! key, outermost first. The first value found wins, so a link closer to
//! the caller shadows the same key set deeper in the chain. Objects that
//! do not publish attachments are skipped.

use std::any::Any;
use std::sync::Arc;

use iw_core::{
    downcast_value, AnyKey, AttachmentKey, AttachmentResult, AttachmentValue, Inspectable,
};
use tracing::{debug, warn};

use crate::chain::chain;

/// The raw value published under `key` by the outermost link that has one.
pub fn find_attachment(
    start: &(impl Inspectable + ?Sized),
    key: &dyn AnyKey,
) -> Option<AttachmentValue> {
    let found = chain(start)
        .filter_map(|link| link.as_attachable().map(|attachable| (link, attachable)))
        .find_map(|(link, attachable)| {
            attachable
                .get_attachment(key)
                .map(|value| (link.type_name(), value))
        });

    found.map(|(publisher, value)| {
        debug!(key = %key.label(), publisher, "found attachment in chain");
        value
    })
}

/// The typed value published under `key`, distinguishing absence from a
/// value of the wrong type.
///
/// Only the outermost value for the key is considered; a mismatching value
/// shadows deeper ones like any other.
pub fn try_get_attachment<V: Any + Send + Sync, K: AnyKey>(
    start: &(impl Inspectable + ?Sized),
    key: &AttachmentKey<V, K>,
) -> AttachmentResult<Option<Arc<V>>> {
    find_attachment(start, key.key())
        .map(|value| downcast_value(key, value))
        .transpose()
}

/// The typed value published under `key`, or `None`.
///
/// A value of the wrong type is logged and treated as absent.
pub fn get_attachment<V: Any + Send + Sync, K: AnyKey>(
    start: &(impl Inspectable + ?Sized),
    key: &AttachmentKey<V, K>,
) -> Option<Arc<V>> {
    match try_get_attachment(start, key) {
        Ok(value) => value,
        Err(err) => {
            warn!(%err, "ignoring attachment of unexpected type");
            None
        }
    }
}
