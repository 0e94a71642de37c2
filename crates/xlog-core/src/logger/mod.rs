//! Logger context: decoration settings, output sink and the success counter.
//!
//! A [`Logger`] is an explicit context object. Each instance owns its own
//! configuration and counter; the process-wide instance lives in [`crate::global`].
mod engine;
mod fixed;

use std::io;

use tracing::debug;

use crate::{
    LogConfig, StreamTarget,
    config::DEFAULT_SEPARATOR,
    sink::{Sink, SinkKind},
};

/// Text logger writing decorated values to a single sink.
#[derive(Debug, Default)]
pub struct Logger {
    config: LogConfig,
    sink: Sink,
    logs: u64,
}

impl Logger {
    /// Logger with default decoration writing to standard output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Logger writing to the standard stream named by `config.stream`.
    pub fn with_config(config: LogConfig) -> Self {
        let sink = Sink::from(config.stream);
        Self {
            config,
            sink,
            logs: 0,
        }
    }

    /// Logger writing to an injected writer.
    ///
    /// # Examples
    /// ```
    /// use xlog_core::{LogConfig, Logger, SharedBuffer};
    ///
    /// let out = SharedBuffer::new();
    /// let mut logger = Logger::with_sink(LogConfig::default(), out.clone());
    /// logger.log_str("ready");
    ///
    /// assert_eq!(out.contents(), "ready\n");
    /// ```
    pub fn with_sink<W>(config: LogConfig, writer: W) -> Self
    where
        W: io::Write + Send + 'static,
    {
        Self {
            config,
            sink: Sink::Custom(Box::new(writer)),
            logs: 0,
        }
    }

    // ---- setters -------------------------------------------------------

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.config.prefix = prefix.into();
    }

    pub fn set_postfix(&mut self, postfix: impl Into<String>) {
        self.config.postfix = postfix.into();
    }

    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.config.separator = separator.into();
    }

    pub fn set_output(&mut self, output: bool) {
        self.config.output = output;
    }

    pub fn set_endline(&mut self, endline: bool) {
        self.config.endline = endline;
    }

    /// Switches to a standard stream, dropping any injected writer.
    pub fn set_stream(&mut self, target: StreamTarget) {
        self.config.stream = target;
        self.sink = Sink::from(target);
    }

    /// Injects a writer; it replaces the current sink until the next `set_stream`.
    pub fn set_sink<W>(&mut self, writer: W)
    where
        W: io::Write + Send + 'static,
    {
        self.sink = Sink::Custom(Box::new(writer));
    }

    /// Replaces every configuration field at once. The counter is kept.
    ///
    /// An injected writer survives unless `config.stream` names a different stream.
    pub fn apply(&mut self, config: LogConfig) {
        if config.stream != self.config.stream {
            self.sink = Sink::from(config.stream);
        }
        debug!(
            stream = %config.stream,
            output = config.output,
            endline = config.endline,
            "logger config applied"
        );
        self.config = config;
    }

    // ---- clearers / resetters -------------------------------------------

    pub fn reset_nr_of_logs(&mut self) {
        self.logs = 0;
    }

    pub fn clear_prefix(&mut self) {
        self.config.prefix.clear();
    }

    pub fn clear_postfix(&mut self) {
        self.config.postfix.clear();
    }

    pub fn reset_separator(&mut self) {
        self.config.separator = DEFAULT_SEPARATOR.to_string();
    }

    // ---- getters --------------------------------------------------------

    /// Values written successfully since creation or the last reset.
    #[inline]
    pub fn nr_of_logs(&self) -> u64 {
        self.logs
    }

    #[inline]
    pub fn prefix(&self) -> &str {
        &self.config.prefix
    }

    #[inline]
    pub fn postfix(&self) -> &str {
        &self.config.postfix
    }

    #[inline]
    pub fn separator(&self) -> &str {
        &self.config.separator
    }

    #[inline]
    pub fn output(&self) -> bool {
        self.config.output
    }

    #[inline]
    pub fn endline(&self) -> bool {
        self.config.endline
    }

    #[inline]
    pub fn stream(&self) -> SinkKind {
        self.sink.kind()
    }

    #[inline]
    pub fn config(&self) -> &LogConfig {
        &self.config
    }
}
