mod bind;
pub use bind::{Binding, BoundArg};

mod spec;
pub use spec::{TagSlot, TagSpec};

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::{LogValue, ModelError};

/// Single-character type tag selecting the formatter for one argument.
/// - `f` / `d` — floating point (both accept `f32` and `f64` values).
/// - `c`       — a single character.
/// - `s`       — a string.
/// - `i`       — an integer.
/// - `b`       — a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Float,
    Double,
    Char,
    Str,
    Int,
    Bool,
}

impl Tag {
    /// All recognized tags in canonical order.
    pub const ALL: [Tag; 6] = [
        Tag::Float,
        Tag::Double,
        Tag::Char,
        Tag::Str,
        Tag::Int,
        Tag::Bool,
    ];

    /// Maps a tag character to its tag, `None` for anything outside `f|d|c|s|i|b`.
    ///
    /// Matching is case-sensitive.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'f' => Some(Tag::Float),
            'd' => Some(Tag::Double),
            'c' => Some(Tag::Char),
            's' => Some(Tag::Str),
            'i' => Some(Tag::Int),
            'b' => Some(Tag::Bool),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_char(&self) -> char {
        match self {
            Tag::Float => 'f',
            Tag::Double => 'd',
            Tag::Char => 'c',
            Tag::Str => 's',
            Tag::Int => 'i',
            Tag::Bool => 'b',
        }
    }

    /// Reports whether `value` can be logged under this tag.
    ///
    /// Floating point tags accept either float width, mirroring how variadic
    /// arguments promote `float` to `double`. Every other tag accepts only its own kind.
    pub fn accepts(&self, value: &LogValue<'_>) -> bool {
        match self {
            Tag::Float | Tag::Double => {
                matches!(value, LogValue::Float(_) | LogValue::Double(_))
            }
            Tag::Char => matches!(value, LogValue::Char(_)),
            Tag::Str => matches!(value, LogValue::Str(_)),
            Tag::Int => matches!(value, LogValue::Int(_)),
            Tag::Bool => matches!(value, LogValue::Bool(_)),
        }
    }
}

impl TryFrom<char> for Tag {
    type Error = ModelError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        Tag::from_char(c).ok_or(ModelError::UnknownTag { tag: c, pos: 0 })
    }
}

impl FromStr for Tag {
    type Err = ModelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Tag::try_from(c),
            (Some(_), Some(extra)) => Err(ModelError::UnknownTag { tag: extra, pos: 1 }),
            (None, _) => Err(ModelError::UnknownTag { tag: ' ', pos: 0 }),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_char(self.as_char())
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_roundtrips_through_its_char() {
        for tag in Tag::ALL {
            assert_eq!(Tag::from_char(tag.as_char()), Some(tag));
        }
    }

    #[test]
    fn rejects_unknown_and_uppercase_chars() {
        for c in ['x', 'F', 'I', ' ', '%', '0'] {
            assert_eq!(Tag::from_char(c), None, "{c:?} must not be a tag");
        }

        let err = Tag::try_from('x').unwrap_err();
        assert_eq!(err, ModelError::UnknownTag { tag: 'x', pos: 0 });
    }

    #[test]
    fn from_str_requires_exactly_one_char() {
        assert_eq!("i".parse::<Tag>().unwrap(), Tag::Int);
        assert!("".parse::<Tag>().is_err());
        assert!("ii".parse::<Tag>().is_err());
    }

    #[test]
    fn float_tags_accept_both_widths() {
        for tag in [Tag::Float, Tag::Double] {
            assert!(tag.accepts(&LogValue::Float(1.5)));
            assert!(tag.accepts(&LogValue::Double(1.5)));
            assert!(!tag.accepts(&LogValue::Int(1)));
        }
    }

    #[test]
    fn other_tags_accept_only_their_kind() {
        assert!(Tag::Int.accepts(&LogValue::Int(3)));
        assert!(!Tag::Int.accepts(&LogValue::Bool(true)));
        assert!(Tag::Str.accepts(&LogValue::from("x")));
        assert!(!Tag::Str.accepts(&LogValue::Char('x')));
        assert!(Tag::Char.accepts(&LogValue::Char('x')));
        assert!(Tag::Bool.accepts(&LogValue::Bool(false)));
    }

    #[test]
    fn serde_as_single_char_string() {
        let json = serde_json::to_string(&Tag::Bool).unwrap();
        assert_eq!(json, r#""b""#);

        let back: Tag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Tag::Bool);

        assert!(serde_json::from_str::<Tag>(r#""q""#).is_err());
    }
}
