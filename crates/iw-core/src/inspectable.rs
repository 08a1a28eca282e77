//! The root trait of every object that can appear in a wrapper chain.

use std::any::Any;

use crate::attachment::Attachable;
use crate::wrapper::{AsWrapper, Wrapper, WrapperAdapter};

/// An object that can take part in a wrapper chain, as a link or as the root.
///
/// Besides the checked downcast used by type search, the trait carries the
/// capability queries the chain walker relies on. A link answers
/// [`as_wrapper`](Self::as_wrapper) with itself, a link publishing metadata
/// answers [`as_attachable`](Self::as_attachable). The defaults report no
/// capability, which is exactly what a plain root object wants.
///
/// Business traits take `Inspectable` as a supertrait so that a
/// `&dyn Executor` (or any other business trait object) can be handed
/// straight to the inspection functions.
///
/// Implement it with the [`inspectable!`](crate::inspectable) macro:
///
/// ```rust
/// use iw_core::{inspectable, Inspectable, Wrapper};
///
/// struct Root;
/// inspectable!(Root);
///
/// struct Link {
///     inner: Box<dyn Inspectable>,
/// }
/// inspectable!(Link: Wrapper);
///
/// impl Wrapper for Link {
///     fn unwrap(&self) -> &dyn Inspectable {
///         self.inner.as_inspectable()
///     }
/// }
///
/// let link = Link { inner: Box::new(Root) };
/// assert!(link.as_wrapper().is_some());
/// assert!(Root.as_wrapper().is_none());
/// ```
pub trait Inspectable: Any + Send + Sync {
    /// The object as `&dyn Any`, for checked downcasts.
    fn as_any(&self) -> &dyn Any;

    /// The object as `&dyn Inspectable`.
    ///
    /// Lets a business trait object (`&dyn Executor`) be viewed as a chain
    /// participant without trait upcasting.
    fn as_inspectable(&self) -> &dyn Inspectable;

    /// Fully qualified name of the concrete type, for diagnostics.
    fn type_name(&self) -> &'static str;

    /// `Some` if this object is a chain link.
    ///
    /// Every wrapper adapter is a link, so the default answers through
    /// [`as_wrapper_adapter`](Self::as_wrapper_adapter).
    fn as_wrapper(&self) -> Option<&dyn Wrapper> {
        self.as_wrapper_adapter().map(|adapter| adapter.as_dyn_wrapper())
    }

    /// `Some` if this object is a link that also delegates to an adaptee.
    fn as_wrapper_adapter(&self) -> Option<&dyn WrapperAdapter> {
        None
    }

    /// `Some` if this object publishes attachments.
    fn as_attachable(&self) -> Option<&dyn Attachable> {
        None
    }
}

/// Returns `true` if both references point at the same object.
///
/// Compares addresses only, so two distinct zero-sized values may compare
/// equal. Objects held behind `Arc`/`Box` never do.
pub fn same_object(a: &dyn Inspectable, b: &dyn Inspectable) -> bool {
    std::ptr::addr_eq(a as *const dyn Inspectable, b as *const dyn Inspectable)
}

/// Implements [`Inspectable`] for a concrete type.
///
/// List the capabilities the type implements after a colon; each one
/// switches on the matching capability query. The type must implement the
/// named traits itself.
///
/// - `Wrapper` → [`Inspectable::as_wrapper`]
/// - `WrapperAdapter` → [`Inspectable::as_wrapper_adapter`], and through it
///   [`Inspectable::as_wrapper`]
/// - `Attachable` → [`Inspectable::as_attachable`]
///
/// ```rust,ignore
/// inspectable!(PlainRoot);
/// inspectable!(LoggingLink: Wrapper);
/// inspectable!(TaggedLink: Wrapper, Attachable);
/// ```
#[macro_export]
macro_rules! inspectable {
    (@capability Wrapper) => {
        fn as_wrapper(&self) -> ::std::option::Option<&dyn $crate::Wrapper> {
            ::std::option::Option::Some(self)
        }
    };
    (@capability WrapperAdapter) => {
        fn as_wrapper_adapter(&self) -> ::std::option::Option<&dyn $crate::WrapperAdapter> {
            ::std::option::Option::Some(self)
        }
    };
    (@capability Attachable) => {
        fn as_attachable(&self) -> ::std::option::Option<&dyn $crate::Attachable> {
            ::std::option::Option::Some(self)
        }
    };
    ($ty:ty) => {
        $crate::inspectable!($ty:);
    };
    ($ty:ty: $($capability:ident),* $(,)?) => {
        impl $crate::Inspectable for $ty {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_inspectable(&self) -> &dyn $crate::Inspectable {
                self
            }

            fn type_name(&self) -> &'static str {
                ::std::any::type_name::<Self>()
            }

            $($crate::inspectable!(@capability $capability);)*
        }
    };
}
