//! Error types for the diff crate.

use dcm_types::{Tag, ValueKind};

/// Errors that can occur during diff operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// The same tag holds a sequence on one side and a scalar on the other.
    #[error("type mismatch at {tag}: left is {left}, right is {right}")]
    TypeMismatch {
        tag: Tag,
        left: ValueKind,
        right: ValueKind,
    },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
