use std::any::{self, Any};
use std::fmt;
use std::sync::Arc;

use iw_core::{AnyKey, Attachable, AttachmentValue, Inspectable, Wrapper, WrapperAdapter};
use iw_store::SharedAttachable;
use tracing::warn;

// ---------------------------------------------------------------------------
// SyntheticAdapter
// ---------------------------------------------------------------------------

/// A wrapper adapter assembled at runtime around an existing object.
///
/// Business calls go to the adaptee, [`Wrapper::unwrap`] reports the
/// underlying object, and when a store was supplied the adapter publishes
/// attachments through it. Without a store the adapter is not attachable:
/// [`Inspectable::as_attachable`] answers `None`, and a direct
/// [`Attachable::set_attachment`] is logged and dropped.
///
/// The business trait itself is implemented with
/// [`adapt_interface!`](crate::adapt_interface), which forwards every
/// listed method to [`adapted`](Self::adapted).
///
/// Build one with [`create_wrapper_adapter`](crate::create_wrapper_adapter)
/// or [`WrapperAdapterBuilder`](crate::WrapperAdapterBuilder).
pub struct SyntheticAdapter<B: ?Sized> {
    underlying: Arc<B>,
    adaptee: Arc<B>,
    attachments: Option<SharedAttachable>,
}

impl<B: ?Sized + Inspectable> SyntheticAdapter<B> {
    /// Callers go through the validating constructors.
    pub(crate) fn new(
        underlying: Arc<B>,
        adaptee: Arc<B>,
        attachments: Option<SharedAttachable>,
    ) -> Self {
        Self {
            underlying,
            adaptee,
            attachments,
        }
    }

    /// The object reported by `unwrap`.
    pub fn underlying(&self) -> &Arc<B> {
        &self.underlying
    }

    /// The object business calls are forwarded to.
    pub fn adapted(&self) -> &Arc<B> {
        &self.adaptee
    }

    /// Returns `true` if the adapter publishes attachments.
    pub fn has_attachments(&self) -> bool {
        self.attachments.is_some()
    }
}

impl<B: ?Sized + Inspectable> Inspectable for SyntheticAdapter<B> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_inspectable(&self) -> &dyn Inspectable {
        self
    }

    fn type_name(&self) -> &'static str {
        any::type_name::<Self>()
    }

    fn as_wrapper(&self) -> Option<&dyn Wrapper> {
        Some(self)
    }

    fn as_wrapper_adapter(&self) -> Option<&dyn WrapperAdapter> {
        Some(self)
    }

    fn as_attachable(&self) -> Option<&dyn Attachable> {
        if self.attachments.is_some() {
            Some(self)
        } else {
            None
        }
    }
}

impl<B: ?Sized + Inspectable> Attachable for SyntheticAdapter<B> {
    fn get_attachment(&self, key: &dyn AnyKey) -> Option<AttachmentValue> {
        self.attachments.as_ref()?.get_attachment(key)
    }

    fn set_attachment(&self, key: &dyn AnyKey, value: AttachmentValue) {
        match &self.attachments {
            Some(attachments) => attachments.set_attachment(key, value),
            None => warn!(
                key = %key.label(),
                adaptee = self.adaptee.type_name(),
                "adapter has no attachment store, dropping value"
            ),
        }
    }
}

impl<B: ?Sized + Inspectable> Wrapper for SyntheticAdapter<B> {
    fn unwrap(&self) -> &dyn Inspectable {
        self.underlying.as_inspectable()
    }
}

impl<B: ?Sized + Inspectable> WrapperAdapter for SyntheticAdapter<B> {
    fn adaptee(&self) -> &dyn Inspectable {
        self.adaptee.as_inspectable()
    }
}

impl<B: ?Sized + Inspectable> fmt::Display for SyntheticAdapter<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[WrapperAdapter proxy created by iw-adapter] {}",
            self.adaptee.type_name()
        )
    }
}

impl<B: ?Sized + Inspectable> fmt::Debug for SyntheticAdapter<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntheticAdapter")
            .field("underlying", &self.underlying.type_name())
            .field("adaptee", &self.adaptee.type_name())
            .field("attachments", &self.attachments)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// adapt_interface!
// ---------------------------------------------------------------------------

/// Implements a business trait for [`SyntheticAdapter<dyn Trait>`] by
/// forwarding each listed method to the adaptee.
///
/// Methods take `&self` and named arguments; return values pass through
/// unchanged. Invoke it once per business trait, in the crate that defines
/// the trait.
///
/// ```rust
/// use iw_adapter::adapt_interface;
/// use iw_core::Inspectable;
///
/// pub trait Runner: Inspectable {
///     fn run(&self) -> String;
///     fn run_with(&self, input: &str, times: usize) -> String;
/// }
///
/// adapt_interface!(Runner {
///     fn run(&self) -> String;
///     fn run_with(&self, input: &str, times: usize) -> String;
/// });
/// ```
#[macro_export]
macro_rules! adapt_interface {
    ($interface:ident {
        $(fn $method:ident(&self $(, $arg:ident: $arg_ty:ty)*) $(-> $ret:ty)?;)*
    }) => {
        impl $interface for $crate::SyntheticAdapter<dyn $interface> {
            $(
                fn $method(&self $(, $arg: $arg_ty)*) $(-> $ret)? {
                    self.adapted().$method($($arg),*)
                }
            )*
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use iw_core::{same_object, AttachableExt, AttachmentKey};
    use iw_store::{AttachmentStore, InMemoryAttachmentStore};

    const BUSY: AttachmentKey<String> = AttachmentKey::new("busy");

    trait Greeter: Inspectable {
        fn greet(&self, name: &str) -> String;
    }

    crate::adapt_interface!(Greeter {
        fn greet(&self, name: &str) -> String;
    });

    struct English;
    iw_core::inspectable!(English);

    impl Greeter for English {
        fn greet(&self, name: &str) -> String {
            format!("hello, {name}")
        }
    }

    struct French;
    iw_core::inspectable!(French);

    impl Greeter for French {
        fn greet(&self, name: &str) -> String {
            format!("bonjour, {name}")
        }
    }

    fn adapter(store: Option<Arc<dyn AttachmentStore>>) -> SyntheticAdapter<dyn Greeter> {
        let underlying: Arc<dyn Greeter> = Arc::new(English);
        let adaptee: Arc<dyn Greeter> = Arc::new(French);
        SyntheticAdapter::new(underlying, adaptee, store.map(SharedAttachable::new))
    }

    #[test]
    fn business_calls_go_to_adaptee() {
        let adapter = adapter(None);
        assert_eq!(adapter.greet("ann"), "bonjour, ann");
        assert_eq!(adapter.greet("ann"), adapter.adapted().greet("ann"));
    }

    #[test]
    fn unwrap_and_adaptee_relations() {
        let adapter = adapter(None);
        assert!(same_object(adapter.unwrap(), adapter.underlying().as_inspectable()));
        assert!(same_object(adapter.adaptee(), adapter.adapted().as_inspectable()));
        assert!(adapter.as_wrapper().is_some());
        assert!(adapter.as_wrapper_adapter().is_some());
    }

    #[test]
    fn usable_as_business_trait_object() {
        let greeter: Arc<dyn Greeter> = Arc::new(adapter(None));
        assert_eq!(greeter.greet("bob"), "bonjour, bob");
        assert!(greeter.as_wrapper().is_some());
    }

    #[test]
    fn attachable_only_with_store() {
        assert!(adapter(None).as_attachable().is_none());
        assert!(!adapter(None).has_attachments());

        let store: Arc<dyn AttachmentStore> = Arc::new(InMemoryAttachmentStore::new());
        let adapter = adapter(Some(Arc::clone(&store)));
        let attachable = adapter.as_attachable().expect("store was supplied");
        attachable.attach(&BUSY, "very busy".to_string());
        assert!(store.contains(&"busy"));
    }

    #[test]
    fn attachable_view_keeps_adapter_identity() {
        let store: Arc<dyn AttachmentStore> = Arc::new(InMemoryAttachmentStore::new());
        let adapter = adapter(Some(store));
        let attachable = adapter.as_attachable().expect("store was supplied");

        assert!(same_object(attachable.as_inspectable(), &adapter));
        assert!(attachable.as_wrapper().is_some());
        assert!(attachable.as_wrapper_adapter().is_some());
        assert!(attachable.type_name().contains("SyntheticAdapter"));
    }

    #[test]
    fn storeless_adapter_ignores_direct_attachment_calls() {
        let adapter = adapter(None);
        adapter.attach(&BUSY, "very busy".to_string());
        assert!(adapter.attachment(&BUSY).is_none());
        assert!(adapter.get_attachment(&"busy").is_none());
    }

    #[test]
    fn description_names_adaptee() {
        let adapter = adapter(None);
        let shown = adapter.to_string();
        assert!(shown.starts_with("[WrapperAdapter proxy created by iw-adapter]"));
        assert!(shown.ends_with("French"));

        let debug = format!("{adapter:?}");
        assert!(debug.contains("SyntheticAdapter"));
        assert!(debug.contains("English"));
    }
}
