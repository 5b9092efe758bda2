//! Dataset readers for the DICOM tools.
//!
//! The diff engine only needs a [`Tree`](dcm_types::Tree); this crate is the
//! boundary that produces one from a file. Every reader implements
//! [`DatasetReader`].
//!
//! # Readers
//!
//! - [`JsonDatasetReader`] -- JSON dataset documents (an array of element
//!   objects, sequences nesting further arrays)
//!
//! Readers reject duplicate tags at every nesting level, so a tree handed to
//! the diff engine always has unique tags.

pub mod error;
pub mod json;
pub mod traits;

pub use error::{ReadError, ReadResult};
pub use json::JsonDatasetReader;
pub use traits::DatasetReader;
