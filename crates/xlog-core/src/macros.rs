/// Logs a list of plain values through [`Logger::log_many`](crate::Logger::log_many).
///
/// Each value is converted with `LogValue::from`, so anything with a `From`
/// impl (integers, floats, chars, bools, strings) can be passed directly.
///
/// # Examples
/// ```
/// use xlog_core::{LogConfig, Logger, SharedBuffer, log_values};
///
/// let out = SharedBuffer::new();
/// let mut logger = Logger::with_sink(LogConfig::default(), out.clone());
///
/// assert_eq!(log_values!(logger, 1, 'x', "y", true), 4);
/// assert_eq!(out.contents(), "1 x y true\n");
/// ```
#[macro_export]
macro_rules! log_values {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.log_many(&[$($crate::LogValue::from($value)),*])
    };
}
