use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::diagnostics::{
    config::DiagnosticsConfig,
    error::{ObserveError, ObserveResult},
    object::UtcRfc3339,
};

/// Text subscriber writing to standard error.
pub fn diagnostics_text(cfg: &DiagnosticsConfig) -> ObserveResult<()> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(cfg.should_use_color())
        .with_target(cfg.with_targets)
        .with_timer(UtcRfc3339);

    let subscriber = tracing_subscriber::registry()
        .with(cfg.level.to_env_filter())
        .with(fmt_layer);
    install(subscriber)
}

/// JSON subscriber writing to standard error.
pub fn diagnostics_json(cfg: &DiagnosticsConfig) -> ObserveResult<()> {
    let fmt_layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(cfg.with_targets)
        .with_timer(UtcRfc3339);

    let subscriber = tracing_subscriber::registry()
        .with(cfg.level.to_env_filter())
        .with(fmt_layer);
    install(subscriber)
}

fn install<S>(subscriber: S) -> ObserveResult<()>
where
    S: Subscriber + Send + Sync + 'static,
{
    subscriber
        .try_init()
        .map_err(|_| ObserveError::AlreadyInitialized)
}
