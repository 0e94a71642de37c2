use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::diagnostics::ObserveError;

/// Rendering of diagnostic events.
/// - `Text` — one human-readable line per event.
/// - `Json` — one JSON object per event, for log collectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagnosticsFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for DiagnosticsFormat {
    type Err = ObserveError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ObserveError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for DiagnosticsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DiagnosticsFormat::Text => "text",
            DiagnosticsFormat::Json => "json",
        })
    }
}

impl Serialize for DiagnosticsFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DiagnosticsFormat {
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
    fn parses_case_insensitive() {
        assert_eq!("TEXT".parse::<DiagnosticsFormat>().unwrap(), DiagnosticsFormat::Text);
        assert_eq!("plain".parse::<DiagnosticsFormat>().unwrap(), DiagnosticsFormat::Text);
        assert_eq!(" Json ".parse::<DiagnosticsFormat>().unwrap(), DiagnosticsFormat::Json);
    }

    #[test]
    fn rejects_unknown_format() {
        for input in ["", "xml", "journald", "logfmt"] {
            assert!(
                DiagnosticsFormat::from_str(input).is_err(),
                "expected error for {input:?}"
            );
        }
    }

    #[test]
    fn serde_writes_canonical_names() {
        let json = serde_json::to_string(&DiagnosticsFormat::Json).unwrap();
        assert_eq!(json, r#""json""#);

        let parsed: DiagnosticsFormat = serde_json::from_str(r#""Plain""#).unwrap();
        assert_eq!(parsed, DiagnosticsFormat::Text);
    }
}
