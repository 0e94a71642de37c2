use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use tracing::debug;

use crate::Logger;

/// Process-wide logger, created on first access and kept until exit.
static GLOBAL: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Locks the process-wide logger.
///
/// The instance starts with default settings on standard output. The lock
/// serializes configuration changes and writes across threads; a poisoned lock
/// is recovered since the logger holds no invariant a panic could break.
///
/// # Examples
/// ```no_run
/// use xlog_core::global;
///
/// global().set_prefix("[app] ");
/// global().log_str("started");
/// ```
pub fn global() -> MutexGuard<'static, Logger> {
    GLOBAL
        .get_or_init(|| {
            debug!("process-wide logger created");
            Mutex::new(Logger::new())
        })
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Runs `f` with the process-wide logger locked once for the whole closure.
pub fn with_global<R>(f: impl FnOnce(&mut Logger) -> R) -> R {
    f(&mut *global())
}
