//! Inspectable wrapper chains.
//!
//! Decorators built around a common business trait form a chain: each one
//! holds the next, the last holds a plain root object. This crate lets a
//! caller look into such a chain while the decorators reveal nothing but
//! the object they directly wrap.
//!
//! # Crates
//!
//! - [`iw_core`] -- the contracts: [`Inspectable`], [`Wrapper`],
//!   [`WrapperAdapter`], [`Attachable`]
//! - [`iw_store`] -- attachment stores
//! - [`iw_inspect`] -- chain walking, type search, attachment lookup
//! - [`iw_adapter`] -- adapters synthesized around existing objects
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use inspectable_wrappers::prelude::*;
//!
//! const BUSY: AttachmentKey<String> = AttachmentKey::new("busy");
//!
//! pub trait Executor: Inspectable {
//!     fn execute(&self, command: &str) -> String;
//! }
//!
//! struct Direct;
//! inspectable!(Direct);
//! impl Executor for Direct {
//!     fn execute(&self, command: &str) -> String {
//!         command.to_string()
//!     }
//! }
//!
//! struct Tagged {
//!     inner: Arc<dyn Executor>,
//!     attachments: InMemoryAttachmentStore,
//! }
//! inspectable!(Tagged: Wrapper, Attachable);
//! impl Wrapper for Tagged {
//!     fn unwrap(&self) -> &dyn Inspectable {
//!         self.inner.as_inspectable()
//!     }
//! }
//! impl Attachable for Tagged {
//!     fn get_attachment(&self, key: &dyn AnyKey) -> Option<AttachmentValue> {
//!         self.attachments.get(key)
//!     }
//!     fn set_attachment(&self, key: &dyn AnyKey, value: AttachmentValue) {
//!         self.attachments.set(key, value)
//!     }
//! }
//! impl Executor for Tagged {
//!     fn execute(&self, command: &str) -> String {
//!         self.inner.execute(command)
//!     }
//! }
//!
//! let tagged = Tagged { inner: Arc::new(Direct), attachments: InMemoryAttachmentStore::new() };
//! tagged.attach(&BUSY, "very busy".to_string());
//! let executor: Arc<dyn Executor> = Arc::new(tagged);
//!
//! assert!(is_instance_of::<Direct>(&*executor));
//! assert_eq!(get_attachment(&*executor, &BUSY).as_deref().map(String::as_str), Some("very busy"));
//! ```

pub use iw_adapter::{
    adapt_interface, create_wrapper_adapter, create_wrapper_adapter_with_attachments,
    AdapterError, AdapterResult, BizInterface, InterfaceKind, SyntheticAdapter,
    WrapperAdapterBuilder,
};
pub use iw_core::{
    inspectable, same_object, AnyKey, AsWrapper, Attachable, AttachableExt, AttachmentError,
    AttachmentKey, AttachmentResult, AttachmentValue, Inspectable, OwnedKey, Wrapper,
    WrapperAdapter,
};
pub use iw_inspect::{
    any_link, chain, depth_of, find_attachment, find_instance, get_attachment, is_instance_of,
    root_of, try_get_attachment, Chain,
};
pub use iw_store::{AttachmentStore, InMemoryAttachmentStore, SharedAttachable, StoreConfig};

pub use iw_adapter;
pub use iw_core;
pub use iw_inspect;
pub use iw_store;

/// Everything needed to write decorators and inspect chains.
pub mod prelude {
    pub use crate::{
        adapt_interface, create_wrapper_adapter, create_wrapper_adapter_with_attachments,
        get_attachment, inspectable, is_instance_of, AnyKey, Attachable, AttachableExt,
        AttachmentKey, AttachmentStore, AttachmentValue, InMemoryAttachmentStore, Inspectable,
        Wrapper, WrapperAdapter,
    };
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Once};

    use super::*;

    const BUSY: AttachmentKey<String> = AttachmentKey::new("busy");
    const MISSING: AttachmentKey<String> = AttachmentKey::new("missing");

    fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_max_level(tracing::Level::TRACE)
                .with_test_writer()
                .try_init();
        });
    }

    // -----------------------------------------------------------------------
    // Executor chain
    // -----------------------------------------------------------------------

    trait Executor: Inspectable {
        fn execute(&self, command: &str) -> String;
    }

    struct DirectExecutor;
    inspectable!(DirectExecutor);

    impl Executor for DirectExecutor {
        fn execute(&self, command: &str) -> String {
            format!("ran {command}")
        }
    }

    /// Defers work and publishes how busy it is.
    struct LazyExecutor {
        inner: Arc<dyn Executor>,
        attachments: InMemoryAttachmentStore,
    }
    inspectable!(LazyExecutor: Wrapper, Attachable);

    impl LazyExecutor {
        fn new(inner: Arc<dyn Executor>) -> Self {
            Self {
                inner,
                attachments: InMemoryAttachmentStore::new(),
            }
        }
    }

    impl Wrapper for LazyExecutor {
        fn unwrap(&self) -> &dyn Inspectable {
            self.inner.as_inspectable()
        }
    }

    impl Attachable for LazyExecutor {
        fn get_attachment(&self, key: &dyn AnyKey) -> Option<AttachmentValue> {
            self.attachments.get(key)
        }

        fn set_attachment(&self, key: &dyn AnyKey, value: AttachmentValue) {
            self.attachments.set(key, value);
        }
    }

    impl Executor for LazyExecutor {
        fn execute(&self, command: &str) -> String {
            format!("later: {}", self.inner.execute(command))
        }
    }

    /// Talks about every command.
    struct ChattyExecutor {
        inner: Arc<dyn Executor>,
    }
    inspectable!(ChattyExecutor: Wrapper);

    impl Wrapper for ChattyExecutor {
        fn unwrap(&self) -> &dyn Inspectable {
            self.inner.as_inspectable()
        }
    }

    impl Executor for ChattyExecutor {
        fn execute(&self, command: &str) -> String {
            format!("about to run {command}; {}", self.inner.execute(command))
        }
    }

    struct ExecutorService;

    #[test]
    fn lazy_and_chatty_executor_chain() {
        init_tracing();

        let lazy = LazyExecutor::new(Arc::new(DirectExecutor));
        lazy.attach(&BUSY, "very busy".to_string());
        let chatty: Arc<dyn Executor> = Arc::new(ChattyExecutor {
            inner: Arc::new(lazy),
        });

        assert!(is_instance_of::<LazyExecutor>(&*chatty));
        assert!(is_instance_of::<DirectExecutor>(&*chatty));
        assert!(!is_instance_of::<ExecutorService>(&*chatty));

        assert_eq!(
            get_attachment(&*chatty, &BUSY).as_deref().map(String::as_str),
            Some("very busy")
        );
        assert!(get_attachment(&*chatty, &MISSING).is_none());

        assert_eq!(depth_of(&*chatty), 2);
        assert!(root_of(&*chatty).as_any().is::<DirectExecutor>());
        assert_eq!(chatty.execute("x"), "about to run x; later: ran x");
    }

    #[test]
    fn outer_lazy_shadows_inner_lazy() {
        let inner = LazyExecutor::new(Arc::new(DirectExecutor));
        inner.attach(&BUSY, "inner".to_string());
        let outer = LazyExecutor::new(Arc::new(inner));
        outer.attach(&BUSY, "outer".to_string());
        let start: Arc<dyn Executor> = Arc::new(ChattyExecutor {
            inner: Arc::new(outer),
        });

        assert_eq!(
            get_attachment(&*start, &BUSY).as_deref().map(String::as_str),
            Some("outer")
        );
    }

    // -----------------------------------------------------------------------
    // Synthesized Runner adapter
    // -----------------------------------------------------------------------

    trait Runner: Inspectable {
        fn run(&self) -> usize;
    }

    adapt_interface!(Runner {
        fn run(&self) -> usize;
    });

    #[derive(Default)]
    struct CountingRunner {
        runs: AtomicUsize,
    }
    inspectable!(CountingRunner);

    impl Runner for CountingRunner {
        fn run(&self) -> usize {
            self.runs.fetch_add(1, Ordering::SeqCst) + 1
        }
    }

    /// A runner decorator, to check that wrapped adaptees are rejected.
    struct RetryingRunner {
        inner: Arc<dyn Runner>,
    }
    inspectable!(RetryingRunner: Wrapper);

    impl Wrapper for RetryingRunner {
        fn unwrap(&self) -> &dyn Inspectable {
            self.inner.as_inspectable()
        }
    }

    impl Runner for RetryingRunner {
        fn run(&self) -> usize {
            self.inner.run()
        }
    }

    #[test]
    fn synthesized_runner_adapter() {
        init_tracing();

        let underlying = Arc::new(CountingRunner::default());
        let adaptee = Arc::new(CountingRunner::default());
        let u: Arc<dyn Runner> = underlying.clone();
        let a: Arc<dyn Runner> = adaptee.clone();

        let adapter: Arc<dyn Runner> =
            Arc::new(create_wrapper_adapter(Arc::clone(&u), Arc::clone(&a)).unwrap());

        assert_eq!(adapter.run(), 1);
        assert_eq!(adapter.run(), 2);
        assert_eq!(adaptee.runs.load(Ordering::SeqCst), 2);
        assert_eq!(underlying.runs.load(Ordering::SeqCst), 0);

        let wrapper = adapter.as_wrapper().expect("adapter is a wrapper");
        assert!(same_object(wrapper.unwrap(), u.as_inspectable()));

        let wrapped: Arc<dyn Runner> = Arc::new(RetryingRunner { inner: a });
        let err = create_wrapper_adapter(u, wrapped).unwrap_err();
        assert!(matches!(err, AdapterError::AdapteeIsWrapper(_)));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn synthesized_adapter_joins_a_chain() {
        init_tracing();

        let store: Arc<dyn AttachmentStore> = Arc::new(InMemoryAttachmentStore::new());
        let u: Arc<dyn Runner> = Arc::new(CountingRunner::default());
        let a: Arc<dyn Runner> = Arc::new(CountingRunner::default());
        let adapter = create_wrapper_adapter_with_attachments(u, a, Arc::clone(&store)).unwrap();
        adapter
            .as_attachable()
            .expect("store was supplied")
            .attach(&BUSY, "adapted".to_string());

        let outer: Arc<dyn Runner> = Arc::new(RetryingRunner {
            inner: Arc::new(adapter),
        });

        assert!(is_instance_of::<SyntheticAdapter<dyn Runner>>(&*outer));
        assert!(is_instance_of::<CountingRunner>(&*outer));
        assert_eq!(depth_of(&*outer), 2);
        assert_eq!(
            get_attachment(&*outer, &BUSY).as_deref().map(String::as_str),
            Some("adapted")
        );
        assert!(store.contains(&"busy"));
        assert_eq!(outer.run(), 1);
    }

    #[test]
    fn trait_level_search_with_any_link() {
        let chatty: Arc<dyn Executor> = Arc::new(ChattyExecutor {
            inner: Arc::new(LazyExecutor::new(Arc::new(DirectExecutor))),
        });
        assert!(any_link(&*chatty, |link| link.as_attachable().is_some()));
        assert!(!any_link(&*chatty, |link| link.as_wrapper_adapter().is_some()));
    }
}
