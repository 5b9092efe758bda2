use std::fmt;

use crate::scalar::Scalar;
use crate::tag::Tag;
use crate::tree::Tree;

/// The value held by an element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// The tag is not present.
    Absent,
    Scalar(Scalar),
    /// Ordered items, each a full nested tree with its own tag space.
    Sequence(Vec<Tree>),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Absent => ValueKind::Absent,
            Self::Scalar(_) => ValueKind::Scalar,
            Self::Sequence(_) => ValueKind::Sequence,
        }
    }
}

/// Shape of a [`Value`], used in diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Absent,
    Scalar,
    Sequence,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Absent => "absent",
            Self::Scalar => "scalar",
            Self::Sequence => "sequence",
        })
    }
}

/// One attribute of a dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub description: String,
    pub value: Value,
}

impl Element {
    pub fn new(tag: impl Into<Tag>, description: impl Into<String>, value: Value) -> Self {
        Self {
            tag: tag.into(),
            description: description.into(),
            value,
        }
    }

    pub fn scalar(tag: impl Into<Tag>, description: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Self::new(tag, description, Value::Scalar(value.into()))
    }

    pub fn sequence(tag: impl Into<Tag>, description: impl Into<String>, items: Vec<Tree>) -> Self {
        Self::new(tag, description, Value::Sequence(items))
    }

    /// Number of items if the element holds a sequence.
    pub fn sequence_len(&self) -> Option<usize> {
        match &self.value {
            Value::Sequence(items) => Some(items.len()),
            _ => None,
        }
    }

    /// The `index`-th sequence item, if any.
    pub fn item(&self, index: usize) -> Option<&Tree> {
        match &self.value {
            Value::Sequence(items) => items.get(index),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_access() {
        let seq = Element::sequence((0x0008, 0x1115), "Referenced Series Sequence", vec![Tree::new(), Tree::new()]);
        assert_eq!(seq.sequence_len(), Some(2));
        assert!(seq.item(1).is_some());
        assert!(seq.item(2).is_none());
        assert_eq!(seq.value.kind(), ValueKind::Sequence);
    }

    #[test]
    fn scalar_has_no_items() {
        let e = Element::scalar((0x0010, 0x0010), "Patient's Name", "Doe^John");
        assert_eq!(e.sequence_len(), None);
        assert!(e.item(0).is_none());
        assert_eq!(e.value.kind().to_string(), "scalar");
    }
}
