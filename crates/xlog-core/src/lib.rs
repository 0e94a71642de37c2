//! Decorated text logger with a type-tagged entry point.
//!
//! [`Logger`] writes values to one sink, framed by a configurable prefix,
//! separator, postfix and line end, and counts every value it writes.
//! Values are passed as [`LogValue`]s, either with their natural tags
//! ([`Logger::log_many`], [`log_values!`]) or under a tag string such as
//! `"isd"` ([`Logger::log_tagged`]).
mod config;
pub use config::{DEFAULT_SEPARATOR, LogConfig, StreamTarget};

mod error;
pub use error::{CoreError, CoreResult};

mod global;
pub use global::{global, with_global};

mod logger;
pub use logger::Logger;

mod macros;

mod sink;
pub use sink::{SharedBuffer, Sink, SinkKind};

pub use xlog_model::{LogValue, Matrix, Tag, TagSpec};

pub mod prelude {
    pub use crate::{LogConfig, LogValue, Logger, Matrix, StreamTarget, global, log_values};
}
