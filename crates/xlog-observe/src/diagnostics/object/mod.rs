pub mod format;
pub use format::DiagnosticsFormat;

pub mod level;
pub use level::DiagnosticsLevel;

pub mod rfc3339;
pub use rfc3339::UtcRfc3339;
