//! Dataset tree model for the DICOM tools.
//!
//! A dataset is a [`Tree`]: an ordered collection of [`Element`]s keyed by a
//! unique [`Tag`]. Each element holds a [`Value`], which is either a single
//! [`Scalar`], absent, or a sequence of nested trees. Every other crate in the
//! workspace depends on `dcm-types`.
//!
//! # Key Types
//!
//! - [`Tag`] — `(group, element)` key, totally ordered
//! - [`Scalar`] — displayable, comparable leaf value
//! - [`Value`] / [`ValueKind`] — `Absent | Scalar | Sequence`
//! - [`Element`] — tag, description and value
//! - [`Tree`] — tag-keyed element collection with unique tags
//! - [`TagPath`] — dotted path into nested sequences (`0008,1115[0].0020,000E`)

pub mod element;
pub mod error;
pub mod path;
pub mod scalar;
pub mod tag;
pub mod tree;

pub use element::{Element, Value, ValueKind};
pub use error::TypeError;
pub use path::{PathSegment, Resolved, TagPath};
pub use scalar::Scalar;
pub use tag::Tag;
pub use tree::Tree;
