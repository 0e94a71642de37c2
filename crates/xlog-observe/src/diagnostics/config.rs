use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::diagnostics::object::{DiagnosticsFormat, DiagnosticsLevel};

/// Settings of the diagnostics subscriber.
///
/// Diagnostics are the library's own `tracing` events (skipped tags, failed
/// sink writes, config changes). They go to standard error so they never mix
/// with logger output on standard output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Event rendering.
    pub format: DiagnosticsFormat,
    /// Filter expression (e.g. "warn", "xlog_core=trace,info").
    pub level: DiagnosticsLevel,
    /// Whether to print the event target (module path).
    pub with_targets: bool,
    /// Whether to use ANSI colors in text output.
    pub use_color: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            format: DiagnosticsFormat::default(),
            level: DiagnosticsLevel::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl DiagnosticsConfig {
    /// Color is used only when enabled and standard error is a terminal.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stderr().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = DiagnosticsConfig::default();

        assert_eq!(config.format, DiagnosticsFormat::Text);
        assert_eq!(config.level.as_str(), "info");
        assert!(config.with_targets);
        assert!(config.use_color);
    }

    #[test]
    fn color_can_be_switched_off() {
        let config = DiagnosticsConfig {
            use_color: false,
            ..Default::default()
        };
        assert!(!config.should_use_color());
    }

    #[test]
    fn partial_deserialization() {
        let json = r#"{"format": "json", "level": "xlog_core=debug"}"#;
        let config: DiagnosticsConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.format, DiagnosticsFormat::Json);
        assert_eq!(config.level.as_str(), "xlog_core=debug");
        assert!(config.with_targets);
    }

    #[test]
    fn invalid_level_fails_deserialization() {
        let json = r#"{"level": "xlog_core=chatty"}"#;
        assert!(serde_json::from_str::<DiagnosticsConfig>(json).is_err());
    }
}
