//! Dotted tag paths into nested sequences.
//!
//! A path is a list of segments separated by `.`; each segment is a tag,
//! optionally followed by `[i]` to select a sequence item:
//! `0008,1115[0].0008,1199[2].0008,1155`.

use std::fmt;
use std::str::FromStr;

use crate::element::Value;
use crate::error::TypeError;
use crate::tag::Tag;
use crate::tree::Tree;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathSegment {
    pub tag: Tag,
    pub index: Option<usize>,
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X},{:04X}", self.tag.group, self.tag.element)?;
        if let Some(i) = self.index {
            write!(f, "[{i}]")?;
        }
        Ok(())
    }
}

impl FromStr for PathSegment {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(open) = s.find('[') else {
            return Ok(Self { tag: s.parse()?, index: None });
        };
        let index = s[open + 1..]
            .strip_suffix(']')
            .and_then(|i| i.parse::<usize>().ok())
            .ok_or_else(|| TypeError::InvalidPath(s.to_string()))?;
        Ok(Self {
            tag: s[..open].parse()?,
            index: Some(index),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagPath {
    segments: Vec<PathSegment>,
}

impl TagPath {
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl FromStr for TagPath {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(TypeError::InvalidPath(s.to_string()));
        }
        let segments = s
            .split('.')
            .map(str::parse)
            .collect::<Result<Vec<PathSegment>, _>>()?;
        Ok(Self { segments })
    }
}

impl fmt::Display for TagPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// What a [`TagPath`] points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolved<'a> {
    Value(&'a Value),
    Item(&'a Tree),
}

impl fmt::Display for Resolved<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(Value::Absent) => f.write_str("NULL"),
            Self::Value(Value::Scalar(s)) => write!(f, "{s}"),
            Self::Value(Value::Sequence(items)) => write!(f, "{} item(s)", items.len()),
            Self::Item(tree) => write!(f, "{tree}"),
        }
    }
}

impl Tree {
    /// Walk `path` from this tree.
    pub fn resolve(&self, path: &TagPath) -> Result<Resolved<'_>, TypeError> {
        let mut current = self;
        let last = path.segments.len() - 1;

        for (pos, segment) in path.segments.iter().enumerate() {
            let element = current
                .get(segment.tag)
                .ok_or(TypeError::TagNotFound(segment.tag))?;

            let Some(index) = segment.index else {
                if pos == last {
                    return Ok(Resolved::Value(&element.value));
                }
                return Err(TypeError::InvalidPath(format!(
                    "{segment} must select a sequence item to descend"
                )));
            };

            let Value::Sequence(items) = &element.value else {
                return Err(TypeError::NotASequence(segment.tag));
            };
            let item = items.get(index).ok_or(TypeError::IndexOutOfRange {
                tag: segment.tag,
                index,
                len: items.len(),
            })?;
            if pos == last {
                return Ok(Resolved::Item(item));
            }
            current = item;
        }

        unreachable!("a parsed tag path has at least one segment")
    }
}
