mod config;
mod error;
mod init;
mod object;

pub use config::DiagnosticsConfig;
pub use error::{ObserveError, ObserveResult};
pub use object::{DiagnosticsFormat, DiagnosticsLevel, UtcRfc3339};

/// Installs the global `tracing` subscriber for diagnostic events.
///
/// Only one subscriber can be installed per process; later calls return
/// [`ObserveError::AlreadyInitialized`].
///
/// # Examples
/// ```no_run
/// use xlog_observe::{DiagnosticsConfig, DiagnosticsLevel, init_diagnostics};
///
/// let cfg = DiagnosticsConfig {
///     level: DiagnosticsLevel::new("xlog_core=debug,warn").unwrap(),
///     ..Default::default()
/// };
/// init_diagnostics(&cfg).expect("diagnostics already installed");
/// ```
pub fn init_diagnostics(cfg: &DiagnosticsConfig) -> ObserveResult<()> {
    match cfg.format {
        DiagnosticsFormat::Text => init::diagnostics_text(cfg),
        DiagnosticsFormat::Json => init::diagnostics_json(cfg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Installing is process-global, so both outcomes are checked in one test.
    #[test]
    fn second_install_is_rejected() {
        let cfg = DiagnosticsConfig {
            use_color: false,
            ..Default::default()
        };

        assert!(init_diagnostics(&cfg).is_ok());
        tracing::debug!("diagnostics installed");

        let json = DiagnosticsConfig {
            format: DiagnosticsFormat::Json,
            ..cfg
        };
        assert!(matches!(
            init_diagnostics(&json),
            Err(ObserveError::AlreadyInitialized)
        ));
    }
}
