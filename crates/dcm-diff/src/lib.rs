//! Diff engine for DICOM dataset trees.
//!
//! Compares two [`Tree`](dcm_types::Tree)s tag by tag, aligns sequence items
//! by index, and flattens nested differences into a single display-ordered
//! list annotated with tree-drawing connectors.
//!
//! # Key Types
//!
//! - [`diff`] -- compute the ordered list of [`Diff`] records
//! - [`Diff`] / [`DiffType`] / [`DiffValue`] / [`Connector`] -- one reported difference
//! - [`DatasetDiff`] -- result list with per-type counters
//! - [`RenderConfig`] / [`render_line`] / [`render_header`] -- column output

pub mod dataset_diff;
pub mod error;
pub mod render;

pub use dataset_diff::{diff, diff_datasets, Connector, DatasetDiff, Diff, DiffType, DiffValue, PLACEHOLDER};
pub use error::{DiffError, DiffResult};
pub use render::{fit, render_header, render_line, RenderConfig};
