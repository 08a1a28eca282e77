/// Errors from typed attachment access.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AttachmentError {
    /// A value is stored under the key, but not of the requested type.
    /// `key` is the key's label.
    #[error("attachment `{key}` does not hold a value of type {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
    },
}

/// Result alias for typed attachment access.
pub type AttachmentResult<T> = Result<T, AttachmentError>;
