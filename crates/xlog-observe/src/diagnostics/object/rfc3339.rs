use std::fmt;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

/// RFC3339 UTC timestamp for diagnostic events.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcRfc3339;

impl UtcRfc3339 {
    pub(crate) fn now() -> String {
        OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| "<invalid-time>".to_string())
    }
}

impl FormatTime for UtcRfc3339 {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{} ", Self::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_utc_rfc3339() {
        let ts = UtcRfc3339::now();
        assert!(ts.ends_with('Z'), "expected UTC suffix in {ts}");
        assert_eq!(ts.find('T'), Some(10), "expected date/time split in {ts}");
    }

    #[test]
    fn writes_timestamp_and_space() {
        let mut out = String::new();
        UtcRfc3339.format_time(&mut Writer::new(&mut out)).unwrap();
        assert!(out.ends_with("Z "));
    }
}
