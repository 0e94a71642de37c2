//! Output sinks for the logger.
//!
//! The logger writes to exactly one sink. The standard streams are addressed by
//! [`StreamTarget`]; any other `Write + Send` value is injected as a custom sink.
//! The logger never opens or closes the underlying stream.
mod buffer;
pub use buffer::SharedBuffer;

use std::{
    fmt,
    io::{self, Write},
};

use crate::StreamTarget;

/// Which kind of sink a logger currently writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Stdout,
    Stderr,
    Custom,
}

/// Writable destination of a logger.
pub enum Sink {
    Stdout,
    Stderr,
    Custom(Box<dyn io::Write + Send>),
}

impl Sink {
    /// Sink that discards everything.
    pub fn null() -> Self {
        Sink::Custom(Box::new(io::sink()))
    }

    #[inline]
    pub fn kind(&self) -> SinkKind {
        match self {
            Sink::Stdout => SinkKind::Stdout,
            Sink::Stderr => SinkKind::Stderr,
            Sink::Custom(_) => SinkKind::Custom,
        }
    }
}

impl Default for Sink {
    fn default() -> Self {
        Sink::Stdout
    }
}

impl From<StreamTarget> for Sink {
    fn from(target: StreamTarget) -> Self {
        match target {
            StreamTarget::Stdout => Sink::Stdout,
            StreamTarget::Stderr => Sink::Stderr,
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sink::{:?}", self.kind())
    }
}

impl io::Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Stdout => io::stdout().lock().write(buf),
            Sink::Stderr => io::stderr().lock().write(buf),
            Sink::Custom(w) => w.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Sink::Stdout => io::stdout().lock().write_all(buf),
            Sink::Stderr => io::stderr().lock().write_all(buf),
            Sink::Custom(w) => w.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Stdout => io::stdout().lock().flush(),
            Sink::Stderr => io::stderr().lock().flush(),
            Sink::Custom(w) => w.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn kind_follows_variant() {
        assert_eq!(Sink::default().kind(), SinkKind::Stdout);
        assert_eq!(Sink::from(StreamTarget::Stderr).kind(), SinkKind::Stderr);
        assert_eq!(Sink::null().kind(), SinkKind::Custom);
    }

    #[test]
    fn custom_sink_receives_bytes() {
        let buf = SharedBuffer::new();
        let mut sink = Sink::Custom(Box::new(buf.clone()));

        sink.write_all(b"abc").unwrap();
        sink.flush().unwrap();

        assert_eq!(buf.contents(), "abc");
    }

    #[test]
    fn null_sink_accepts_everything() {
        let mut sink = Sink::null();
        for _ in 0..100 {
            sink.write_all(b"discarded").unwrap();
        }
    }

    #[test]
    fn debug_names_the_kind() {
        assert_eq!(format!("{:?}", Sink::Stderr), "Sink::Stderr");
    }
}
