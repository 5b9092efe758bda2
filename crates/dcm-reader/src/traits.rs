use std::path::Path;

use dcm_types::Tree;

use crate::error::{ReadError, ReadResult};

/// Source of dataset trees.
///
/// Implementations must return trees whose levels have unique tags; a
/// repeated tag is an error, never silently merged.
pub trait DatasetReader {
    /// Parse a dataset from an in-memory document.
    fn read_str(&self, input: &str) -> ReadResult<Tree>;

    /// Read and parse the dataset stored at `path`.
    ///
    /// The default implementation loads the whole file and calls
    /// [`read_str`](Self::read_str).
    fn read_path(&self, path: &Path) -> ReadResult<Tree> {
        let input = std::fs::read_to_string(path).map_err(|source| ReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.read_str(&input)
    }
}
