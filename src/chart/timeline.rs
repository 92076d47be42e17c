//! Timeline dataset: `label,start,end` rows.

use tracing::debug;

use crate::chart::dates::decompose;
use crate::domain::{BuildStats, ChartConfig, TimelineBar};
use crate::io::ingest::{RawRecord, is_header_like};

/// Build timeline bars in input order.
pub fn build_timeline(records: &[RawRecord], config: &ChartConfig) -> (Vec<TimelineBar>, BuildStats) {
    let mut bars = Vec::with_capacity(records.len());

    for record in records {
        match accept(record, config) {
            Ok(bar) => bars.push(bar),
            Err(reason) => debug!(line = record.line, "timeline row skipped: {reason}"),
        }
    }

    let stats = BuildStats {
        rows_read: records.len(),
        rows_used: bars.len(),
        rows_skipped: records.len() - bars.len(),
    };
    (bars, stats)
}

fn accept(record: &RawRecord, config: &ChartConfig) -> Result<TimelineBar, &'static str> {
    if is_header_like(record.field(1)) {
        return Err("header-like");
    }
    if record.fields.len() < 3 {
        return Err("missing end date");
    }

    let label = record.field(0);
    if label.is_empty() {
        return Err("empty label");
    }

    let start = decompose(record.field(1), config.date_order).ok_or("unrecognised start date")?;
    let end = decompose(record.field(2), config.date_order).ok_or("unrecognised end date")?;
    if end < start {
        return Err("end before start");
    }
    if config.strict_dates && !(start.is_calendar_valid() && end.is_calendar_valid()) {
        return Err("not a calendar date");
    }

    let (row, bar) = split_label(label, config.split.as_deref());
    Ok(TimelineBar { row, bar, start, end })
}

/// Split `label` at the first `sep` into row and bar labels.
///
/// Without a separator, or when the label doesn't contain it, the whole
/// label is the row label.
pub fn split_label(label: &str, sep: Option<&str>) -> (String, Option<String>) {
    let split = sep.filter(|s| !s.is_empty()).and_then(|s| label.split_once(s));
    match split {
        Some((row, bar)) => (row.trim().to_string(), Some(bar.trim().to_string())),
        None => (label.to_string(), None),
    }
}
