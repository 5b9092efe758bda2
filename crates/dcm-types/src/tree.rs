use std::collections::BTreeMap;
use std::fmt;

use crate::element::{Element, Value};
use crate::error::TypeError;
use crate::tag::Tag;

static ABSENT: Value = Value::Absent;

/// A tag-keyed collection of elements, one dataset level.
///
/// Tags are unique within a tree; the constructors refuse duplicates, so a
/// `Tree` value can never violate that invariant. Iteration is always in
/// ascending tag order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tree {
    elements: BTreeMap<Tag, Element>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree, failing on the first repeated tag.
    pub fn from_elements(elements: impl IntoIterator<Item = Element>) -> Result<Self, TypeError> {
        let mut tree = Self::new();
        for element in elements {
            tree.insert(element)?;
        }
        Ok(tree)
    }

    /// Add an element. A tag already present is a [`TypeError::DuplicateTag`].
    pub fn insert(&mut self, element: Element) -> Result<(), TypeError> {
        if self.elements.contains_key(&element.tag) {
            return Err(TypeError::DuplicateTag(element.tag));
        }
        self.elements.insert(element.tag, element);
        Ok(())
    }

    /// Tags present at this level, ascending.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.elements.keys().copied()
    }

    pub fn get(&self, tag: Tag) -> Option<&Element> {
        self.elements.get(&tag)
    }

    /// The value under `tag`, or [`Value::Absent`] when the tag is missing.
    pub fn value(&self, tag: Tag) -> &Value {
        self.elements.get(&tag).map_or(&ABSENT, |e| &e.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn write_level(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        for element in self.iter() {
            match &element.value {
                Value::Absent => {}
                Value::Scalar(scalar) => {
                    writeln!(f, "{indent}{} {}: {scalar}", element.tag, element.description)?;
                }
                Value::Sequence(items) => {
                    writeln!(
                        f,
                        "{indent}{} {}: {} item(s)",
                        element.tag,
                        element.description,
                        items.len()
                    )?;
                    for (i, item) in items.iter().enumerate() {
                        writeln!(f, "{indent}  item [{i}]")?;
                        item.write_level(f, depth + 2)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Indented listing of the whole tree, one element per line.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_level(f, 0)
    }
}
