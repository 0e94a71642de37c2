use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::CoreError;

/// Standard stream the logger writes to.
/// - `Stdout` — standard output (default).
/// - `Stderr` — standard error.
///
/// Any other writer is injected directly with [`crate::Logger::set_sink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamTarget {
    Stdout,
    Stderr,
}

impl Default for StreamTarget {
    fn default() -> Self {
        Self::Stdout
    }
}

impl FromStr for StreamTarget {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        match norm.as_str() {
            "stdout" | "out" => Ok(Self::Stdout),
            "stderr" | "err" => Ok(Self::Stderr),
            _ => Err(CoreError::InvalidStream(s.to_string())),
        }
    }
}

impl fmt::Display for StreamTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StreamTarget::Stdout => "stdout",
            StreamTarget::Stderr => "stderr",
        };
        f.write_str(s)
    }
}

impl Serialize for StreamTarget {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for StreamTarget {
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
    fn default_is_stdout() {
        assert_eq!(StreamTarget::default(), StreamTarget::Stdout);
    }

    #[test]
    fn parses_names_and_aliases_case_insensitive() {
        assert_eq!("stdout".parse::<StreamTarget>().unwrap(), StreamTarget::Stdout);
        assert_eq!(" OUT ".parse::<StreamTarget>().unwrap(), StreamTarget::Stdout);
        assert_eq!("StdErr".parse::<StreamTarget>().unwrap(), StreamTarget::Stderr);
        assert_eq!("err".parse::<StreamTarget>().unwrap(), StreamTarget::Stderr);
    }

    #[test]
    fn rejects_unknown_targets() {
        for input in ["", "file", "/dev/null", "stdin", "std out"] {
            let parsed = StreamTarget::from_str(input);
            assert!(
                matches!(parsed, Err(CoreError::InvalidStream(_))),
                "expected error for stream target {input:?}, got {parsed:?}"
            );
        }
    }

    #[test]
    fn display_returns_canonical_names() {
        assert_eq!(StreamTarget::Stdout.to_string(), "stdout");
        assert_eq!(StreamTarget::Stderr.to_string(), "stderr");
    }

    #[test]
    fn serde_accepts_aliases_and_writes_canonical() {
        let parsed: StreamTarget = serde_json::from_str(r#""ERR""#).unwrap();
        assert_eq!(parsed, StreamTarget::Stderr);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#""stderr""#);

        assert!(serde_json::from_str::<StreamTarget>(r#""pipe""#).is_err());
    }
}
