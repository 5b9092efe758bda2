use std::path::PathBuf;

use dcm_types::TypeError;

/// Errors from reading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The dataset file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not have the expected shape.
    #[error("malformed dataset document: {0}")]
    Json(#[from] serde_json::Error),

    /// An element object could not be turned into an element.
    #[error("invalid element {tag}: {reason}")]
    InvalidElement { tag: String, reason: String },

    /// Tag syntax error or a duplicate tag within one level.
    #[error(transparent)]
    Type(#[from] TypeError),
}

/// Result alias for reader operations.
pub type ReadResult<T> = Result<T, ReadError>;
