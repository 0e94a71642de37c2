mod stream;
pub use stream::StreamTarget;

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CoreError, CoreResult};

/// Separator written between two logged values unless configured otherwise.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Logger decoration and output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Written once before the first value of every log call.
    pub prefix: String,
    /// Written once after the last value of every log call.
    pub postfix: String,
    /// Written between two logged values.
    pub separator: String,
    /// When `false` log calls write nothing and count nothing.
    pub output: bool,
    /// Whether each log call ends with a newline.
    pub endline: bool,
    /// Standard stream to write to.
    pub stream: StreamTarget,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            postfix: String::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
            output: true,
            endline: true,
            stream: StreamTarget::default(),
        }
    }
}

impl LogConfig {
    /// Parses a JSON document; missing fields take their defaults.
    ///
    /// # Examples
    /// ```
    /// use xlog_core::LogConfig;
    ///
    /// let cfg = LogConfig::from_json(r#"{"prefix": "[LOG] "}"#).unwrap();
    /// assert_eq!(cfg.prefix, "[LOG] ");
    /// assert_eq!(cfg.separator, " ");
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::InvalidConfig(e.to_string()))
    }

    /// Reads and parses a JSON config file.
    ///
    /// A file that cannot be read is [`CoreError::Io`]; one that does not parse
    /// is [`CoreError::InvalidConfig`].
    pub fn from_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = raw.len(), "logger config read");
        Self::from_json(&raw)
    }
}
