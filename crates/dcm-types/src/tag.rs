use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::TypeError;

/// Attribute key within one dataset level.
///
/// Tags order by `(group, element)`; this ordering is the output order of a
/// diff. Displayed as `(GGGG, EEEE)` with upper-case hex digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    pub group: u16,
    pub element: u16,
}

impl Tag {
    pub const fn new(group: u16, element: u16) -> Self {
        Self { group, element }
    }
}

impl From<(u16, u16)> for Tag {
    fn from((group, element): (u16, u16)) -> Self {
        Self::new(group, element)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:04X}, {:04X})", self.group, self.element)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag{self}")
    }
}

impl FromStr for Tag {
    type Err = TypeError;

    /// Accepts `GGGG,EEEE`, `(GGGG,EEEE)`, `(GGGG, EEEE)` and `GGGGEEEE`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TypeError::InvalidTag(s.to_string());
        let trimmed = s.trim();
        if !trimmed.is_ascii() {
            return Err(invalid());
        }
        let inner = match (trimmed.strip_prefix('('), trimmed.strip_suffix(')')) {
            (Some(_), Some(_)) => &trimmed[1..trimmed.len() - 1],
            (None, None) => trimmed,
            _ => return Err(invalid()),
        };

        let (group, element) = match inner.split_once(',') {
            Some((g, e)) => (g.trim(), e.trim()),
            None if inner.len() == 8 => inner.split_at(4),
            None => return Err(invalid()),
        };
        if group.len() != 4 || element.len() != 4 {
            return Err(invalid());
        }

        let group = u16::from_str_radix(group, 16).map_err(|_| invalid())?;
        let element = u16::from_str_radix(element, 16).map_err(|_| invalid())?;
        Ok(Self::new(group, element))
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
