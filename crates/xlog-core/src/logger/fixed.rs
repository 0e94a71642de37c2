use std::iter;

use tracing::trace;
use xlog_model::{LogValue, Matrix, format_general};

use crate::{Logger, logger::engine::write_piece};

impl Logger {
    /// Logs one string as a decorated record. `false` when nothing was written.
    pub fn log_str(&mut self, s: &str) -> bool {
        self.log_one(LogValue::from(s))
    }

    pub fn log_int(&mut self, i: i64) -> bool {
        self.log_one(LogValue::Int(i))
    }

    pub fn log_double(&mut self, d: f64) -> bool {
        self.log_one(LogValue::Double(d))
    }

    fn log_one(&mut self, value: LogValue<'_>) -> bool {
        if !self.config.output {
            return false;
        }
        self.emit(iter::once(value)) == 1
    }

    /// Logs a matrix, one decorated record per row with cells joined by the separator.
    ///
    /// Counts as a single log once every row is written; a matrix without rows
    /// writes nothing and is not counted. Returns `false` when output is
    /// disabled or any row failed to be written.
    ///
    /// # Examples
    /// ```
    /// use xlog_core::{LogConfig, Logger, Matrix, SharedBuffer};
    ///
    /// let out = SharedBuffer::new();
    /// let mut logger = Logger::with_sink(LogConfig::default(), out.clone());
    /// let m = Matrix::from_rows(vec![vec![1.0, 2.5], vec![-3.0, 0.0]]).unwrap();
    ///
    /// assert!(logger.log_matrix(&m));
    /// assert_eq!(out.contents(), "1 2.5\n-3 0\n");
    /// ```
    pub fn log_matrix(&mut self, matrix: &Matrix) -> bool {
        if !self.config.output {
            return false;
        }

        let mut ok = true;
        let mut line = String::new();
        for row in matrix.iter_rows() {
            line.clear();
            line.push_str(&self.config.prefix);
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    line.push_str(&self.config.separator);
                }
                line.push_str(&format_general(*cell));
            }
            line.push_str(&self.config.postfix);
            if self.config.endline {
                line.push('\n');
            }
            ok &= write_piece(&mut self.sink, &line);
        }
        self.flush();

        if ok && matrix.rows() > 0 {
            self.logs += 1;
        }
        trace!(rows = matrix.rows(), cols = matrix.cols(), ok, "matrix logged");
        ok
    }

    /// Writes `nr` newlines.
    pub fn new_line(&mut self, nr: usize) {
        if !self.config.output || nr == 0 {
            return;
        }
        write_piece(&mut self.sink, &"\n".repeat(nr));
        self.flush();
    }

    /// Writes `s` `times` times, joined by the separator when `use_separator` is set.
    ///
    /// No prefix or postfix is written and nothing is counted; the line end
    /// follows the `endline` setting.
    pub fn print_times(&mut self, times: usize, s: &str, use_separator: bool) {
        if !self.config.output || times == 0 {
            return;
        }

        let joiner = if use_separator {
            self.config.separator.as_str()
        } else {
            ""
        };
        let mut text = iter::repeat_n(s, times).collect::<Vec<_>>().join(joiner);
        if self.config.endline {
            text.push('\n');
        }
        write_piece(&mut self.sink, &text);
        self.flush();
    }
}
