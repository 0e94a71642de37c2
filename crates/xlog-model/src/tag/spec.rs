use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ModelError, ModelResult, Tag};

/// One position of a tag string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSlot {
    /// A recognized tag; consumes one argument.
    Known(Tag),
    /// An unrecognized character; skipped without consuming an argument.
    Unknown(char),
}

impl TagSlot {
    #[inline]
    pub fn tag(&self) -> Option<Tag> {
        match self {
            TagSlot::Known(t) => Some(*t),
            TagSlot::Unknown(_) => None,
        }
    }
}

/// Ordered sequence of tag slots parsed from a tag string such as `"isd"`.
///
/// Parsing is lenient: characters outside `f|d|c|s|i|b` are kept as
/// [`TagSlot::Unknown`] so that callers of the tagged entry point see the same
/// partial-success count as with a well-formed string minus the bad positions.
/// Use [`TagSpec::strict`] to reject such strings up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
#[serde(into = "String")]
pub struct TagSpec {
    raw: String,
    slots: Vec<TagSlot>,
}

impl TagSpec {
    /// Parses a tag string, keeping unrecognized characters as skipped slots.
    ///
    /// # Examples
    /// ```
    /// use xlog_model::{Tag, TagSpec};
    ///
    /// let spec = TagSpec::parse("ix");
    /// assert_eq!(spec.len(), 2);
    /// assert_eq!(spec.recognized(), 1);
    /// assert_eq!(spec.tags().collect::<Vec<_>>(), vec![Tag::Int]);
    /// ```
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let slots = raw
            .chars()
            .map(|c| match Tag::from_char(c) {
                Some(t) => TagSlot::Known(t),
                None => TagSlot::Unknown(c),
            })
            .collect();
        Self { raw, slots }
    }

    /// Parses a tag string, failing on the first unrecognized character.
    pub fn strict(raw: impl Into<String>) -> ModelResult<Self> {
        let spec = Self::parse(raw);
        if let Some((pos, c)) = spec.unknown().next() {
            return Err(ModelError::UnknownTag { tag: c, pos });
        }
        Ok(spec)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[inline]
    pub fn slots(&self) -> &[TagSlot] {
        &self.slots
    }

    /// Number of positions, recognized or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of recognized tags; the upper bound of a tagged log call's result.
    pub fn recognized(&self) -> usize {
        self.tags().count()
    }

    /// Recognized tags in order.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.slots.iter().filter_map(TagSlot::tag)
    }

    /// Unrecognized characters with their slot position.
    pub fn unknown(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        self.slots.iter().enumerate().filter_map(|(pos, s)| match s {
            TagSlot::Unknown(c) => Some((pos, *c)),
            TagSlot::Known(_) => None,
        })
    }
}

impl FromStr for TagSpec {
    type Err = ModelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::strict(s)
    }
}

impl From<String> for TagSpec {
    fn from(s: String) -> Self {
        Self::parse(s)
    }
}

impl From<&str> for TagSpec {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<TagSpec> for String {
    fn from(spec: TagSpec) -> Self {
        spec.raw
    }
}

impl fmt::Display for TagSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
