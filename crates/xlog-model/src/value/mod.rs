mod float;
pub use float::format_general;

use std::{borrow::Cow, fmt};

use crate::Tag;

/// A single loggable argument.
///
/// One arm per tag kind, so a list of `LogValue`s carries its own type
/// information and cannot disagree with a separate tag string.
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue<'a> {
    Float(f32),
    Double(f64),
    Char(char),
    Str(Cow<'a, str>),
    Int(i64),
    Bool(bool),
}

impl LogValue<'_> {
    /// The tag this value is logged under when no tag string is given.
    pub fn tag(&self) -> Tag {
        match self {
            LogValue::Float(_) => Tag::Float,
            LogValue::Double(_) => Tag::Double,
            LogValue::Char(_) => Tag::Char,
            LogValue::Str(_) => Tag::Str,
            LogValue::Int(_) => Tag::Int,
            LogValue::Bool(_) => Tag::Bool,
        }
    }

    /// Detaches the value from any borrowed string.
    pub fn into_owned(self) -> LogValue<'static> {
        match self {
            LogValue::Float(v) => LogValue::Float(v),
            LogValue::Double(v) => LogValue::Double(v),
            LogValue::Char(v) => LogValue::Char(v),
            LogValue::Str(s) => LogValue::Str(Cow::Owned(s.into_owned())),
            LogValue::Int(v) => LogValue::Int(v),
            LogValue::Bool(v) => LogValue::Bool(v),
        }
    }
}

impl fmt::Display for LogValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Float(v) => f.write_str(&format_general(f64::from(*v))),
            LogValue::Double(v) => f.write_str(&format_general(*v)),
            LogValue::Char(c) => write!(f, "{c}"),
            LogValue::Str(s) => f.write_str(s),
            LogValue::Int(i) => write!(f, "{i}"),
            LogValue::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
        }
    }
}

impl From<f32> for LogValue<'_> {
    fn from(v: f32) -> Self {
        LogValue::Float(v)
    }
}

impl From<f64> for LogValue<'_> {
    fn from(v: f64) -> Self {
        LogValue::Double(v)
    }
}

impl From<char> for LogValue<'_> {
    fn from(v: char) -> Self {
        LogValue::Char(v)
    }
}

impl<'a> From<&'a str> for LogValue<'a> {
    fn from(v: &'a str) -> Self {
        LogValue::Str(Cow::Borrowed(v))
    }
}

impl<'a> From<&'a String> for LogValue<'a> {
    fn from(v: &'a String) -> Self {
        LogValue::Str(Cow::Borrowed(v.as_str()))
    }
}

impl From<String> for LogValue<'_> {
    fn from(v: String) -> Self {
        LogValue::Str(Cow::Owned(v))
    }
}

impl From<i32> for LogValue<'_> {
    fn from(v: i32) -> Self {
        LogValue::Int(i64::from(v))
    }
}

impl From<i64> for LogValue<'_> {
    fn from(v: i64) -> Self {
        LogValue::Int(v)
    }
}

impl From<u32> for LogValue<'_> {
    fn from(v: u32) -> Self {
        LogValue::Int(i64::from(v))
    }
}

impl From<bool> for LogValue<'_> {
    fn from(v: bool) -> Self {
        LogValue::Bool(v)
    }
}
