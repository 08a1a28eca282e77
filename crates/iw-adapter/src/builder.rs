//! Validated construction of [`SyntheticAdapter`]s.

use std::sync::Arc;

use iw_core::Inspectable;
use iw_store::{AttachmentStore, SharedAttachable};
use tracing::{debug, warn};

use crate::adapter::SyntheticAdapter;
use crate::error::{AdapterError, AdapterResult};
use crate::interface::BizInterface;

/// Synthesize a wrapper adapter for the business interface `B`.
///
/// The adapter forwards business calls to `adaptee` and reports
/// `underlying` from `unwrap`. It does not publish attachments.
///
/// # Errors
///
/// - [`AdapterError::NotAnInterface`] if `B` is not a trait object type
/// - [`AdapterError::ReservedInterface`] if `B` is one of the contracts the
///   adapter implements itself
/// - [`AdapterError::AdapteeIsWrapper`] if `adaptee` is already a wrapper
pub fn create_wrapper_adapter<B: ?Sized + Inspectable>(
    underlying: Arc<B>,
    adaptee: Arc<B>,
) -> AdapterResult<SyntheticAdapter<B>> {
    WrapperAdapterBuilder::new()
        .underlying(underlying)
        .adaptee(adaptee)
        .build()
}

/// Like [`create_wrapper_adapter`], but the adapter also publishes
/// attachments through `attachments`.
///
/// The store may be shared with other links.
pub fn create_wrapper_adapter_with_attachments<B: ?Sized + Inspectable>(
    underlying: Arc<B>,
    adaptee: Arc<B>,
    attachments: Arc<dyn AttachmentStore>,
) -> AdapterResult<SyntheticAdapter<B>> {
    WrapperAdapterBuilder::new()
        .underlying(underlying)
        .adaptee(adaptee)
        .attachments(attachments)
        .build()
}

/// Step-by-step construction of a [`SyntheticAdapter`].
///
/// `underlying` and `adaptee` are required, `attachments` optional. All
/// checks run in [`build`](Self::build), before anything is assembled.
pub struct WrapperAdapterBuilder<B: ?Sized> {
    underlying: Option<Arc<B>>,
    adaptee: Option<Arc<B>>,
    attachments: Option<Arc<dyn AttachmentStore>>,
}

impl<B: ?Sized + Inspectable> WrapperAdapterBuilder<B> {
    pub fn new() -> Self {
        Self {
            underlying: None,
            adaptee: None,
            attachments: None,
        }
    }

    /// The object the adapter reports from `unwrap`.
    pub fn underlying(mut self, underlying: Arc<B>) -> Self {
        self.underlying = Some(underlying);
        self
    }

    /// The object business calls are forwarded to.
    pub fn adaptee(mut self, adaptee: Arc<B>) -> Self {
        self.adaptee = Some(adaptee);
        self
    }

    /// Publish attachments through `attachments`.
    pub fn attachments(mut self, attachments: Arc<dyn AttachmentStore>) -> Self {
        self.attachments = Some(attachments);
        self
    }

    /// Validate the parts and assemble the adapter.
    ///
    /// Missing arguments are reported first, then the interface, then the
    /// adaptee.
    pub fn build(self) -> AdapterResult<SyntheticAdapter<B>> {
        let interface = BizInterface::of::<B>();
        self.assemble(&interface).inspect_err(|err| {
            warn!(interface = interface.name(), %err, "rejected wrapper adapter");
        })
    }

    fn assemble(self, interface: &BizInterface) -> AdapterResult<SyntheticAdapter<B>> {
        let underlying = self
            .underlying
            .ok_or(AdapterError::MissingArgument("underlying"))?;
        let adaptee = self
            .adaptee
            .ok_or(AdapterError::MissingArgument("adaptee"))?;

        interface.validate()?;
        if adaptee.as_wrapper().is_some() {
            return Err(AdapterError::AdapteeIsWrapper(adaptee.type_name()));
        }

        debug!(
            interface = interface.name(),
            underlying = underlying.type_name(),
            adaptee = adaptee.type_name(),
            attachable = self.attachments.is_some(),
            "created wrapper adapter"
        );
        Ok(SyntheticAdapter::new(
            underlying,
            adaptee,
            self.attachments.map(SharedAttachable::new),
        ))
    }
}

impl<B: ?Sized + Inspectable> Default for WrapperAdapterBuilder<B> {
    fn default() -> Self {
        Self::new()
    }
}
