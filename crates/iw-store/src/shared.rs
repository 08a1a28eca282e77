use std::fmt;
use std::sync::Arc;

use iw_core::{AnyKey, Attachable, AttachmentValue};

use crate::traits::AttachmentStore;

/// An [`Attachable`] view over a store that may be shared with other links.
///
/// Cloning the view shares the store. Decorators that want to publish
/// attachments can hold one and forward to it; synthesized adapters use it
/// to expose a caller-supplied store.
#[derive(Clone)]
pub struct SharedAttachable {
    store: Arc<dyn AttachmentStore>,
}

impl SharedAttachable {
    pub fn new(store: Arc<dyn AttachmentStore>) -> Self {
        Self { store }
    }

    /// The backing store.
    pub fn store(&self) -> &Arc<dyn AttachmentStore> {
        &self.store
    }
}

iw_core::inspectable!(SharedAttachable: Attachable);

impl Attachable for SharedAttachable {
    fn get_attachment(&self, key: &dyn AnyKey) -> Option<AttachmentValue> {
        self.store.get(key)
    }

    fn set_attachment(&self, key: &dyn AnyKey, value: AttachmentValue) {
        self.store.set(key, value);
    }
}

impl fmt::Debug for SharedAttachable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedAttachable")
            .field("entry_count", &self.store.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryAttachmentStore;
    use iw_core::{AttachableExt, AttachmentKey, Inspectable};

    const BUSY: AttachmentKey<String> = AttachmentKey::new("busy");

    #[test]
    fn views_over_one_store_see_each_other() {
        let store: Arc<dyn AttachmentStore> = Arc::new(InMemoryAttachmentStore::new());
        let first = SharedAttachable::new(Arc::clone(&store));
        let second = SharedAttachable::new(Arc::clone(&store));

        first.attach(&BUSY, "very busy".to_string());
        assert_eq!(
            second.attachment(&BUSY).as_deref().map(String::as_str),
            Some("very busy")
        );
        assert!(store.contains(&"busy"));
    }

    #[test]
    fn reports_attachable_capability() {
        let view = SharedAttachable::new(Arc::new(InMemoryAttachmentStore::new()));
        assert!(view.as_attachable().is_some());
        assert!(view.as_wrapper().is_none());
    }
}
