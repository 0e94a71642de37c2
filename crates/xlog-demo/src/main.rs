use std::env;

use anyhow::Context;
use tracing::info;

use xlog_core::{LogConfig, LogValue, Matrix, global, log_values, with_global};
use xlog_observe::{DiagnosticsConfig, DiagnosticsLevel, init_diagnostics};

fn main() -> anyhow::Result<()> {
    // 1) diagnostics
    let diag = DiagnosticsConfig {
        level: DiagnosticsLevel::new(
            env::var("XLOG_DIAGNOSTICS").unwrap_or_else(|_| "warn".to_string()),
        )?,
        ..Default::default()
    };
    init_diagnostics(&diag)?;

    // 2) logger config: optional JSON file as first argument
    let config = match env::args().nth(1) {
        Some(path) => {
            LogConfig::from_file(&path).with_context(|| format!("loading logger config {path}"))?
        }
        None => LogConfig::default(),
    };
    info!(?config, "logger config loaded");
    global().apply(config);

    // 3) tagged and typed records
    let n = global().log_tagged("isd", &[42.into(), "hello".into(), 3.14.into()]);
    info!(logged = n, "tagged record");

    let n = global().log_tagged("ix", &[7.into(), LogValue::from("never written")]);
    info!(logged = n, "tagged record with unknown tag");

    with_global(|l| {
        l.set_prefix("[LOG] ");
        l.set_postfix(" [END]");
        l.set_separator(", ");
        log_values!(l, 1, 2);
        l.clear_prefix();
        l.clear_postfix();
        l.reset_separator();
    });

    // 4) fixed-type helpers
    let m = Matrix::from_rows(vec![vec![1.0, 0.5], vec![-2.0, 1e7]])?;
    with_global(|l| {
        l.print_times(20, "=", false);
        l.log_matrix(&m);
        l.new_line(1);
        l.log_str("done");
    });

    info!(total = global().nr_of_logs(), "values logged");
    Ok(())
}
