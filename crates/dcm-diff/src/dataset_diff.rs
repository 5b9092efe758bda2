//! Dataset-level diff: compare two trees and produce a flat list of differences.
//!
//! Tags are reconciled as the sorted union of both sides. Sequence items are
//! aligned by index and diffed recursively; a non-empty nested result is
//! emitted under a synthetic header line, its records re-stamped with
//! tree-drawing connectors.

use std::collections::BTreeSet;
use std::fmt;

use dcm_types::{Element, Scalar, Tag, Tree, Value};
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::{DiffError, DiffResult};

/// Display value standing in for sequence content.
pub const PLACEHOLDER: &str = "-----";

/// Classification of a single difference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffType {
    /// Present on both sides with unequal values.
    Different,
    /// Present only on the right.
    MissingLeft,
    /// Present only on the left.
    MissingRight,
}

impl DiffType {
    /// The same difference seen with left and right swapped.
    pub fn mirrored(self) -> Self {
        match self {
            Self::Different => Self::Different,
            Self::MissingLeft => Self::MissingRight,
            Self::MissingRight => Self::MissingLeft,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Different => "≠",
            Self::MissingLeft => "<",
            Self::MissingRight => ">",
        }
    }
}

/// One side's displayable value in a [`Diff`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiffValue {
    Scalar(Scalar),
    /// Sequence content that is not expanded.
    Placeholder,
}

impl fmt::Display for DiffValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => write!(f, "{s}"),
            Self::Placeholder => f.write_str(PLACEHOLDER),
        }
    }
}

impl Serialize for DiffValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Scalar(s) => s.serialize(serializer),
            Self::Placeholder => serializer.serialize_str(PLACEHOLDER),
        }
    }
}

/// Tree-drawing connector for records nested under a sequence item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Connector {
    #[serde(rename = "┌")]
    Open,
    #[serde(rename = "├")]
    Middle,
    #[serde(rename = "└")]
    Last,
}

impl Connector {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "┌",
            Self::Middle => "├",
            Self::Last => "└",
        }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reported difference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diff {
    pub diff_type: DiffType,
    pub tag: Tag,
    pub description: String,
    pub value_left: Option<DiffValue>,
    pub value_right: Option<DiffValue>,
    /// Set only on records nested inside a sequence item diff.
    pub prefix: Option<Connector>,
}

impl Diff {
    fn different(tag: Tag, description: String, left: DiffValue, right: DiffValue) -> Self {
        Self {
            diff_type: DiffType::Different,
            tag,
            description,
            value_left: Some(left),
            value_right: Some(right),
            prefix: None,
        }
    }

    fn missing_left(tag: Tag, description: String, right: DiffValue) -> Self {
        Self {
            diff_type: DiffType::MissingLeft,
            tag,
            description,
            value_left: None,
            value_right: Some(right),
            prefix: None,
        }
    }

    fn missing_right(tag: Tag, description: String, left: DiffValue) -> Self {
        Self {
            diff_type: DiffType::MissingRight,
            tag,
            description,
            value_left: Some(left),
            value_right: None,
            prefix: None,
        }
    }

    /// This record with sides swapped: values exchanged and
    /// MissingLeft/MissingRight flipped.
    ///
    /// `Different` records and sequence headers carry the left element's
    /// description, so this equals the record `diff(right, left)` reports
    /// only when both sides describe the tag the same way.
    pub fn mirrored(&self) -> Self {
        Self {
            diff_type: self.diff_type.mirrored(),
            tag: self.tag,
            description: self.description.clone(),
            value_left: self.value_right.clone(),
            value_right: self.value_left.clone(),
            prefix: self.prefix,
        }
    }
}

/// The result of comparing two datasets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DatasetDiff {
    pub diffs: Vec<Diff>,
}

impl DatasetDiff {
    pub fn is_empty(&self) -> bool {
        self.diffs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diffs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diff> {
        self.diffs.iter()
    }

    /// Records of type [`DiffType::Different`], sequence headers included.
    pub fn differences(&self) -> usize {
        self.count(DiffType::Different)
    }

    pub fn missing_left(&self) -> usize {
        self.count(DiffType::MissingLeft)
    }

    pub fn missing_right(&self) -> usize {
        self.count(DiffType::MissingRight)
    }

    fn count(&self, diff_type: DiffType) -> usize {
        self.diffs.iter().filter(|d| d.diff_type == diff_type).count()
    }
}

/// Compare two datasets.
///
/// Output is ordered by ascending tag, then depth-first within a sequence.
/// Fails with [`DiffError::TypeMismatch`] if a tag holds a sequence on one
/// side and a scalar on the other; no partial result is returned.
pub fn diff(left: &Tree, right: &Tree) -> DiffResult<Vec<Diff>> {
    let mut diffs = Vec::new();
    diff_level(left, right, &mut diffs)?;
    debug!(
        left_tags = left.len(),
        right_tags = right.len(),
        diffs = diffs.len(),
        "compared datasets"
    );
    Ok(diffs)
}

/// Like [`diff`], wrapped in a [`DatasetDiff`].
pub fn diff_datasets(left: &Tree, right: &Tree) -> DiffResult<DatasetDiff> {
    diff(left, right).map(|diffs| DatasetDiff { diffs })
}

enum Present<'a> {
    Scalar(&'a Scalar),
    Sequence(&'a [Tree]),
}

fn lookup(tree: &Tree, tag: Tag) -> Option<(&Element, Present<'_>)> {
    let element = tree.get(tag)?;
    match &element.value {
        Value::Absent => None,
        Value::Scalar(s) => Some((element, Present::Scalar(s))),
        Value::Sequence(items) => Some((element, Present::Sequence(items))),
    }
}

/// Description and display value of an element missing on the other side.
/// Sequences are not expanded; only their item count is shown.
fn one_sided(element: &Element, present: Present<'_>) -> (String, DiffValue) {
    match present {
        Present::Scalar(s) => (element.description.clone(), DiffValue::Scalar(s.clone())),
        Present::Sequence(items) => (
            format!("[{}] {}", items.len(), element.description),
            DiffValue::Placeholder,
        ),
    }
}

fn diff_level(left: &Tree, right: &Tree, out: &mut Vec<Diff>) -> DiffResult<()> {
    let tags: BTreeSet<Tag> = left.tags().chain(right.tags()).collect();

    for tag in tags {
        match (lookup(left, tag), lookup(right, tag)) {
            (None, None) => {}
            (None, Some((element, present))) => {
                let (description, value) = one_sided(element, present);
                out.push(Diff::missing_left(tag, description, value));
            }
            (Some((element, present)), None) => {
                let (description, value) = one_sided(element, present);
                out.push(Diff::missing_right(tag, description, value));
            }
            (Some((element, Present::Scalar(l))), Some((_, Present::Scalar(r)))) => {
                if l != r {
                    out.push(Diff::different(
                        tag,
                        element.description.clone(),
                        DiffValue::Scalar(l.clone()),
                        DiffValue::Scalar(r.clone()),
                    ));
                }
            }
            (Some((element, Present::Sequence(l))), Some((_, Present::Sequence(r)))) => {
                diff_items(element, l, r, out)?;
            }
            (Some((l, _)), Some((r, _))) => {
                return Err(DiffError::TypeMismatch {
                    tag,
                    left: l.value.kind(),
                    right: r.value.kind(),
                });
            }
        }
    }
    Ok(())
}

fn diff_items(element: &Element, left: &[Tree], right: &[Tree], out: &mut Vec<Diff>) -> DiffResult<()> {
    let tag = element.tag;
    for i in 0..left.len().max(right.len()) {
        match (left.get(i), right.get(i)) {
            (None, None) => {}
            (None, Some(_)) => out.push(Diff::missing_left(
                tag,
                format!("{} [{i}]", element.description),
                DiffValue::Placeholder,
            )),
            (Some(_), None) => out.push(Diff::missing_right(
                tag,
                format!("{} [{i}]", element.description),
                DiffValue::Placeholder,
            )),
            (Some(l), Some(r)) => {
                let mut nested = Vec::new();
                diff_level(l, r, &mut nested)?;
                if nested.is_empty() {
                    continue;
                }

                let last = nested.len() - 1;
                for (j, d) in nested.iter_mut().enumerate() {
                    d.prefix = Some(if j == last { Connector::Last } else { Connector::Middle });
                }

                let mut header = Diff::different(
                    tag,
                    format!("[{i}] {}", element.description),
                    DiffValue::Placeholder,
                    DiffValue::Placeholder,
                );
                header.prefix = Some(Connector::Open);
                out.push(header);
                out.extend(nested);
            }
        }
    }
    Ok(())
}
