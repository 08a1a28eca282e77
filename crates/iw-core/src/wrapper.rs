use crate::inspectable::Inspectable;

/// A link in a wrapper chain.
///
/// A wrapper reveals exactly one thing: the object it directly wraps. That
/// single hook is enough for the inspection functions to walk the whole
/// chain down to its root.
///
/// Invariants every implementation must satisfy:
/// - `unwrap` is a pure accessor. It always returns the same object, which
///   is fixed when the link is constructed.
/// - Following `unwrap` from any link reaches an object that is not a
///   wrapper in finitely many steps. Cycles are not detected; a walk over
///   a cyclic chain never terminates.
pub trait Wrapper: Inspectable {
    /// The object this link directly wraps.
    fn unwrap(&self) -> &dyn Inspectable;
}

/// A wrapper that delegates its business calls to a second object.
///
/// The adaptee is a parallel edge: inspection follows [`Wrapper::unwrap`]
/// only, never `adaptee`. An adaptee is therefore never a wrapper itself,
/// otherwise its own chain would be invisible to type search.
pub trait WrapperAdapter: Wrapper + AsWrapper {
    /// The object business calls are forwarded to.
    fn adaptee(&self) -> &dyn Inspectable;
}

/// Views any wrapper as `&dyn Wrapper`.
///
/// Implemented for every sized [`Wrapper`]. It lets a `&dyn WrapperAdapter`
/// hand out its wrapper half, which is how
/// [`Inspectable::as_wrapper`] answers for a type that only declared the
/// adapter capability.
pub trait AsWrapper {
    fn as_dyn_wrapper(&self) -> &dyn Wrapper;
}

impl<T: Wrapper> AsWrapper for T {
    fn as_dyn_wrapper(&self) -> &dyn Wrapper {
        self
    }
}
