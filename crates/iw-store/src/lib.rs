//! Attachment stores for wrapper chain links.
//!
//! A link that publishes attachments keeps them in a store. Every backend
//! implements the [`AttachmentStore`] trait:
//!
//! - [`InMemoryAttachmentStore`] -- `RwLock<HashMap>`-backed, thread-safe
//!
//! [`SharedAttachable`] turns a store into an [`iw_core::Attachable`] so
//! several links (or a synthesized adapter) can publish through the same
//! store.
//!
//! # Design Rules
//!
//! 1. A store is owned by one link unless it is shared explicitly through `Arc`.
//! 2. `set` overwrites; `get` of a missing key is `None`, never an error.
//! 3. The store never interprets values; typing is the caller's business.

pub mod config;
pub mod memory;
pub mod shared;
pub mod traits;

pub use config::StoreConfig;
pub use memory::InMemoryAttachmentStore;
pub use shared::SharedAttachable;
pub use traits::AttachmentStore;
