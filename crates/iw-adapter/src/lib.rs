//! Wrapper adapters synthesized at runtime.
//!
//! Writing one decorator type per business interface just to make an
//! existing object inspectable is boilerplate. A [`SyntheticAdapter`]
//! instead pairs two objects behind one business interface `B`:
//!
//! - the **adaptee**, which receives every business call, and
//! - the **underlying** object, which the adapter reports from
//!   [`Wrapper::unwrap`](iw_core::Wrapper::unwrap),
//!
//! and optionally publishes attachments through a caller-supplied store.
//! The business trait is wired once per trait with [`adapt_interface!`].
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use iw_adapter::{adapt_interface, create_wrapper_adapter};
//! use iw_core::{inspectable, Inspectable, Wrapper};
//!
//! pub trait Runner: Inspectable {
//!     fn run(&self) -> String;
//! }
//! adapt_interface!(Runner {
//!     fn run(&self) -> String;
//! });
//!
//! struct Fast;
//! inspectable!(Fast);
//! impl Runner for Fast {
//!     fn run(&self) -> String {
//!         "fast".into()
//!     }
//! }
//!
//! struct Slow;
//! inspectable!(Slow);
//! impl Runner for Slow {
//!     fn run(&self) -> String {
//!         "slow".into()
//!     }
//! }
//!
//! let underlying: Arc<dyn Runner> = Arc::new(Slow);
//! let adaptee: Arc<dyn Runner> = Arc::new(Fast);
//! let adapter = create_wrapper_adapter(underlying, adaptee).unwrap();
//!
//! assert_eq!(adapter.run(), "fast");
//! assert!(adapter.unwrap().as_any().is::<Slow>());
//! ```
//!
//! # Preconditions
//!
//! Checked before the adapter is assembled, each with its own
//! [`AdapterError`]: `B` must be a trait object type, must not be one of
//! the contracts the adapter supplies itself (`Inspectable`, `Wrapper`,
//! `WrapperAdapter`, `Attachable`), and the adaptee must not already be a
//! wrapper. That underlying and adaptee implement `B` is guaranteed by
//! their type.

pub mod adapter;
pub mod builder;
pub mod error;
pub mod interface;

pub use adapter::SyntheticAdapter;
pub use builder::{
    create_wrapper_adapter, create_wrapper_adapter_with_attachments, WrapperAdapterBuilder,
};
pub use error::{AdapterError, AdapterResult};
pub use interface::{BizInterface, InterfaceKind};
