//! Contracts for inspectable wrapper chains.
//!
//! A wrapper chain is a run of decorators around a common business
//! interface, each holding the next one, ending at a plain root object.
//! This crate defines the minimal contracts a decorator implements so the
//! chain can be inspected from the outside without knowing its structure.
//!
//! # Contracts
//!
//! - [`Inspectable`] -- every chain participant (links and roots)
//! - [`Wrapper`] -- a link; reveals the object it directly wraps
//! - [`WrapperAdapter`] -- a link that also delegates to a separate adaptee
//! - [`Attachable`] -- a participant publishing key/value metadata, keyed
//!   by any [`AnyKey`]
//!
//! Walking and searching chains lives in `iw-inspect`; attachment stores in
//! `iw-store`; synthesized adapters in `iw-adapter`.

pub mod attachment;
pub mod error;
pub mod inspectable;
pub mod key;
pub mod wrapper;

pub use attachment::{downcast_value, Attachable, AttachableExt, AttachmentKey, AttachmentValue};
pub use error::{AttachmentError, AttachmentResult};
pub use inspectable::{same_object, Inspectable};
pub use key::{AnyKey, OwnedKey};
pub use wrapper::{AsWrapper, Wrapper, WrapperAdapter};
