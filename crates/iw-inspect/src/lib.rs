//! Inspection of wrapper chains.
//!
//! Given any chain participant, these functions walk the chain through
//! [`Wrapper::unwrap`](iw_core::Wrapper::unwrap) alone, outermost first:
//!
//! - [`chain`] -- the walker itself, a lazy single-pass iterator
//! - [`is_instance_of`] / [`find_instance`] / [`any_link`] -- type search
//! - [`get_attachment`] / [`try_get_attachment`] / [`find_attachment`] --
//!   attachment lookup, outermost value wins
//!
//! Every search stops at its first hit. None of them fail on a well-formed
//! chain: absence is `false` or `None`. A cyclic chain is the caller's bug
//! and makes the walk run forever.
//!
//! ```rust
//! use iw_core::{inspectable, Inspectable, Wrapper};
//! use iw_inspect::{depth_of, is_instance_of};
//!
//! struct Root;
//! inspectable!(Root);
//!
//! struct Link(Box<dyn Inspectable>);
//! inspectable!(Link: Wrapper);
//!
//! impl Wrapper for Link {
//!     fn unwrap(&self) -> &dyn Inspectable {
//!         self.0.as_inspectable()
//!     }
//! }
//!
//! let start = Link(Box::new(Link(Box::new(Root))));
//! assert!(is_instance_of::<Root>(&start));
//! assert_eq!(depth_of(&start), 2);
//! ```

pub mod chain;
pub mod lookup;
pub mod search;

pub use chain::{chain, depth_of, root_of, Chain};
pub use lookup::{find_attachment, get_attachment, try_get_attachment};
pub use search::{any_link, find_instance, is_instance_of};
