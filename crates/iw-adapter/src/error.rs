use std::fmt;

/// Errors raised while synthesizing a wrapper adapter.
///
/// All of them are detected before the adapter is built; none is worth
/// retrying, the call itself has to change.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// The business interface is a concrete type, not a trait object.
    #[error("business interface ({0}) is not a trait object type")]
    NotAnInterface(&'static str),

    /// The business interface is one of the contracts the adapter supplies
    /// itself.
    #[error("{0} is implemented by the synthesized adapter, not a valid business interface")]
    ReservedInterface(&'static str),

    /// The adaptee already is a wrapper.
    #[error("adaptee ({0}) is a wrapper; adapting a wrapper to a wrapper is unnecessary")]
    AdapteeIsWrapper(&'static str),

    /// A required part of the adapter was never supplied.
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),
}

impl AdapterError {
    /// Returns `true` for precondition violations on supplied arguments.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::NotAnInterface(_) | Self::ReservedInterface(_) | Self::AdapteeIsWrapper(_)
        )
    }

    /// Returns `true` if a required argument was absent.
    pub fn is_missing_argument(&self) -> bool {
        matches!(self, Self::MissingArgument(_))
    }
}

impl PartialEq for AdapterError {
    fn eq(&self, other: &Self) -> bool {
        // Compare by display representation for test convenience.
        fmt::format(format_args!("{self}")) == fmt::format(format_args!("{other}"))
    }
}

impl Eq for AdapterError {}

/// Result alias for adapter synthesis.
pub type AdapterResult<T> = Result<T, AdapterError>;
