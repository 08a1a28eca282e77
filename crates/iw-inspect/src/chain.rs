//! The chain walker.
//!
//! [`Chain`] yields the starting object, then each successive
//! [`Wrapper::unwrap`](iw_core::Wrapper::unwrap) result, ending with the
//! first object that is not a wrapper (the root). The walk is lazy: a link
//! is unwrapped only when the caller asks for the element after it, so a
//! search that matches early never touches the rest of the chain.
//!
//! # Invariants
//!
//! - Order is outermost first, root last.
//! - The chain is finite and acyclic; a cyclic chain never terminates.

use std::iter::FusedIterator;

use iw_core::Inspectable;
use tracing::trace;

/// A single forward pass over a wrapper chain.
#[derive(Clone)]
pub struct Chain<'a> {
    state: State<'a>,
}

#[derive(Clone, Copy)]
enum State<'a> {
    /// Nothing yielded yet.
    Start(&'a dyn Inspectable),
    /// The last yielded object; unwrapped on the next call.
    Visited(&'a dyn Inspectable),
    Done,
}

impl<'a> Chain<'a> {
    pub fn new(start: &'a dyn Inspectable) -> Self {
        Self {
            state: State::Start(start),
        }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a dyn Inspectable;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Start(start) => {
                self.state = State::Visited(start);
                Some(start)
            }
            State::Visited(previous) => match previous.as_wrapper() {
                Some(wrapper) => {
                    let next = wrapper.unwrap();
                    trace!(
                        from = previous.type_name(),
                        to = next.type_name(),
                        "unwrapped chain link"
                    );
                    self.state = State::Visited(next);
                    Some(next)
                }
                None => {
                    self.state = State::Done;
                    None
                }
            },
            State::Done => None,
        }
    }
}

impl FusedIterator for Chain<'_> {}

/// Walk the chain starting at `start`.
pub fn chain<S: Inspectable + ?Sized>(start: &S) -> Chain<'_> {
    Chain::new(start.as_inspectable())
}

/// The root of the chain: the first object reached that is not a wrapper.
pub fn root_of<S: Inspectable + ?Sized>(start: &S) -> &dyn Inspectable {
    let mut current = start.as_inspectable();
    while let Some(wrapper) = current.as_wrapper() {
        current = wrapper.unwrap();
    }
    current
}

/// Number of wrapper links in front of the root.
pub fn depth_of<S: Inspectable + ?Sized>(start: &S) -> usize {
    chain(start).count() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use iw_core::{same_object, Wrapper};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Root;
    iw_core::inspectable!(Root);

    struct Layer {
        inner: Box<dyn Inspectable>,
        unwraps: Arc<AtomicUsize>,
    }
    iw_core::inspectable!(Layer: Wrapper);

    impl Wrapper for Layer {
        fn unwrap(&self) -> &dyn Inspectable {
            self.unwraps.fetch_add(1, Ordering::SeqCst);
            self.inner.as_inspectable()
        }
    }

    fn layered(depth: usize, unwraps: &Arc<AtomicUsize>) -> Box<dyn Inspectable> {
        let mut current: Box<dyn Inspectable> = Box::new(Root);
        for _ in 0..depth {
            current = Box::new(Layer {
                inner: current,
                unwraps: Arc::clone(unwraps),
            });
        }
        current
    }

    #[test]
    fn bare_root_yields_itself_only() {
        let root = Root;
        let visited: Vec<_> = chain(&root).collect();
        assert_eq!(visited.len(), 1);
        assert!(visited[0].as_any().is::<Root>());
        assert_eq!(depth_of(&root), 0);
    }

    #[test]
    fn yields_outermost_first_root_last() {
        let unwraps = Arc::new(AtomicUsize::new(0));
        let start = layered(3, &unwraps);
        let visited: Vec<_> = chain(&*start).collect();

        assert_eq!(visited.len(), 4);
        assert!(same_object(visited[0], &*start));
        assert!(visited[..3].iter().all(|link| link.as_any().is::<Layer>()));
        assert!(visited[3].as_any().is::<Root>());
    }

    #[test]
    fn walk_is_lazy() {
        let unwraps = Arc::new(AtomicUsize::new(0));
        let start = layered(5, &unwraps);
        let mut walk = chain(&*start);

        walk.next();
        assert_eq!(unwraps.load(Ordering::SeqCst), 0);
        walk.next();
        assert_eq!(unwraps.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn walk_is_fused() {
        let root = Root;
        let mut walk = chain(&root);
        assert!(walk.next().is_some());
        assert!(walk.next().is_none());
        assert!(walk.next().is_none());
    }

    #[test]
    fn root_and_depth() {
        let unwraps = Arc::new(AtomicUsize::new(0));
        let start = layered(4, &unwraps);
        assert!(root_of(&*start).as_any().is::<Root>());
        assert_eq!(depth_of(&*start), 4);
    }
}
