//! Run summaries for the terminal.
//!
//! Formatting lives here so the pipeline stays free of presentation code.

use crate::app::pipeline::ChartRun;
use crate::io::export::WriteReport;

/// One-line summary of what a run read, kept and produced.
pub fn format_run_summary(run: &ChartRun) -> String {
    let s = &run.stats;
    let mut out = format!(
        "{}: {} rows read, {} used, {} skipped",
        run.dataset.kind().display_name(),
        s.rows_read,
        s.rows_used,
        s.rows_skipped
    );
    if run.unreadable > 0 {
        out.push_str(&format!(", {} unreadable", run.unreadable));
    }
    out
}

/// The size line printed to stderr after a run.
pub fn format_size(report: &WriteReport) -> String {
    if report.simulated {
        format!("{} bytes (simulated, not written)", report.bytes)
    } else {
        format!("{} bytes", report.bytes)
    }
}
