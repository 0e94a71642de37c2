use std::{convert::TryFrom, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::diagnostics::ObserveError;

/// Validated `EnvFilter` expression, e.g. `"warn"` or `"xlog_core=trace,info"`.
///
/// Validation happens on construction, so converting into a filter later cannot fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct DiagnosticsLevel(String);

impl DiagnosticsLevel {
    /// # Examples
    /// ```
    /// use xlog_observe::DiagnosticsLevel;
    ///
    /// let lvl = DiagnosticsLevel::new("xlog_core=debug").unwrap();
    /// assert_eq!(lvl.as_str(), "xlog_core=debug");
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, ObserveError> {
        Self::try_from(s.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the filter; falls back to `info` if the expression stopped parsing.
    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(self.as_str()).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

impl Default for DiagnosticsLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

impl FromStr for DiagnosticsLevel {
    type Err = ObserveError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for DiagnosticsLevel {
    type Error = ObserveError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match EnvFilter::try_new(&s) {
            Ok(_) => Ok(DiagnosticsLevel(s)),
            Err(e) => Err(ObserveError::InvalidLevel(format!("{s}: {e}"))),
        }
    }
}

impl From<DiagnosticsLevel> for String {
    fn from(l: DiagnosticsLevel) -> Self {
        l.0
    }
}
