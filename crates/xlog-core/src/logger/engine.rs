use std::{
    fmt,
    io::{self, Write},
};

use tracing::{debug, trace};
use xlog_model::{LogValue, TagSpec};

use crate::{Logger, sink::Sink};

impl Logger {
    /// Logs `args` as described by a tag string (`f|d` float, `c` char, `s` string,
    /// `i` integer, `b` bool) and returns how many values were written.
    ///
    /// Unrecognized tag characters are skipped without consuming an argument.
    /// An argument whose kind does not fit its tag is consumed and not written;
    /// tags left without an argument write nothing. None of these is an error:
    /// the only signal is a count below [`TagSpec::recognized`].
    ///
    /// # Examples
    /// ```
    /// use xlog_core::{LogConfig, LogValue, Logger, SharedBuffer};
    ///
    /// let out = SharedBuffer::new();
    /// let mut logger = Logger::with_sink(LogConfig::default(), out.clone());
    ///
    /// let n = logger.log_tagged("isd", &[42.into(), "hello".into(), 3.14.into()]);
    /// assert_eq!(n, 3);
    /// assert_eq!(out.contents(), "42 hello 3.14\n");
    /// ```
    pub fn log_tagged(&mut self, tags: &str, args: &[LogValue<'_>]) -> usize {
        self.log_spec(&TagSpec::parse(tags), args)
    }

    /// Same as [`Logger::log_tagged`] with a pre-parsed tag string.
    pub fn log_spec(&mut self, spec: &TagSpec, args: &[LogValue<'_>]) -> usize {
        if !self.config.output {
            trace!(tags = %spec, "output disabled, nothing logged");
            return 0;
        }

        let binding = spec.bind(args);
        for (pos, tag) in spec.unknown() {
            trace!(pos, %tag, "unrecognized tag skipped");
        }
        if !binding.is_exact() {
            debug!(
                tags = %spec,
                args = args.len(),
                skipped = binding.skipped(),
                mismatched = binding.mismatched(),
                missing = binding.missing(),
                unused = binding.unused(),
                "tag string does not match arguments"
            );
        }

        self.emit(binding.loggable())
    }

    /// Logs each value under its own tag and returns how many were written.
    ///
    /// See also the [`crate::log_values!`] macro, which builds the list from plain values.
    pub fn log_many(&mut self, values: &[LogValue<'_>]) -> usize {
        if !self.config.output {
            trace!(values = values.len(), "output disabled, nothing logged");
            return 0;
        }
        self.emit(values)
    }

    /// Writes one decorated record: prefix, values joined by the separator,
    /// postfix and newline. Returns the number of values written.
    ///
    /// The separator is written together with the value it precedes, so it only
    /// ever appears between two values. When a write fails part way, the bytes
    /// the sink already took stay on the stream and the next value resumes from
    /// there: a separator that went out in full is not written again.
    pub(crate) fn emit<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let mut logged = 0;
        // some value bytes are on the stream in this record
        let mut started = false;
        // separator bytes already written after the last value
        let mut sep_written = 0;

        if !self.config.prefix.is_empty() {
            write_piece(&mut self.sink, &self.config.prefix);
        }

        let mut piece = String::new();
        for value in values {
            piece.clear();
            if started {
                let sep = &self.config.separator;
                piece.push_str(sep.get(sep_written..).unwrap_or(sep));
            }
            let sep_len = piece.len();
            // formatting into a String cannot fail
            let _ = fmt::Write::write_fmt(&mut piece, format_args!("{value}"));

            match write_tracked(&mut self.sink, &piece) {
                Ok(()) => {
                    logged += 1;
                    self.logs += 1;
                    started = true;
                    sep_written = 0;
                }
                Err(n) if n > sep_len => {
                    started = true;
                    sep_written = 0;
                }
                Err(n) if started => sep_written += n,
                Err(_) => {}
            }
        }

        self.finish_record();
        logged
    }

    /// Writes the postfix and the line end, then flushes.
    pub(crate) fn finish_record(&mut self) {
        if !self.config.postfix.is_empty() {
            write_piece(&mut self.sink, &self.config.postfix);
        }
        if self.config.endline {
            write_piece(&mut self.sink, "\n");
        }
        self.flush();
    }

    pub(crate) fn flush(&mut self) {
        if let Err(e) = self.sink.flush() {
            debug!(error = %e, sink = ?self.sink.kind(), "failed to flush log sink");
        }
    }
}

/// Writes `text` in full; a failure is reported as a debug event and `false`.
pub(crate) fn write_piece(sink: &mut Sink, text: &str) -> bool {
    write_tracked(sink, text).is_ok()
}

/// Like [`write_piece`], but a failure carries the number of bytes the sink
/// accepted before it.
fn write_tracked(sink: &mut Sink, text: &str) -> Result<(), usize> {
    let mut buf = text.as_bytes();
    let mut written = 0;
    while !buf.is_empty() {
        match sink.write(buf) {
            Ok(0) => {
                debug!(written, sink = ?sink.kind(), "log sink accepted no bytes");
                return Err(written);
            }
            Ok(n) => {
                written += n;
                buf = &buf[n..];
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => {
                debug!(error = %e, written, sink = ?sink.kind(), "failed to write to log sink");
                return Err(written);
            }
        }
    }
    Ok(())
}
