use thiserror::Error;

use crate::tag::Tag;

/// Errors produced by tree model operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid tag: {0}")]
    InvalidTag(String),

    /// Two elements of one tree level share a tag.
    #[error("duplicate tag {0} in one dataset level")]
    DuplicateTag(Tag),

    #[error("invalid tag path: {0}")]
    InvalidPath(String),

    #[error("tag {0} not found")]
    TagNotFound(Tag),

    #[error("tag {0} does not hold a sequence")]
    NotASequence(Tag),

    #[error("index {index} out of range for {tag} ({len} items)")]
    IndexOutOfRange { tag: Tag, index: usize, len: usize },
}
