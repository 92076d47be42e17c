//! Calendar heatmap dataset: `date,value` rows.

use tracing::debug;

use crate::chart::dates::decompose;
use crate::domain::{BuildStats, CalendarPoint, ChartConfig, DateParts, Numeric};
use crate::io::ingest::{RawRecord, is_header_like};

/// Build calendar points in input order.
///
/// A row is kept when it has a decomposable date and a positive numeric
/// value, and passes the optional year range and strict-date checks.
pub fn build_calendar(records: &[RawRecord], config: &ChartConfig) -> (Vec<CalendarPoint>, BuildStats) {
    let mut points = Vec::with_capacity(records.len());

    for record in records {
        match accept(record, config) {
            Ok(point) => points.push(point),
            Err(reason) => debug!(line = record.line, "calendar row skipped: {reason}"),
        }
    }

    let stats = BuildStats {
        rows_read: records.len(),
        rows_used: points.len(),
        rows_skipped: records.len() - points.len(),
    };
    (points, stats)
}

fn accept(record: &RawRecord, config: &ChartConfig) -> Result<CalendarPoint, &'static str> {
    let date_field = record.field(0);
    if is_header_like(date_field) {
        return Err("header-like");
    }
    if record.fields.len() < 2 {
        return Err("missing value");
    }

    let date = decompose(date_field, config.date_order).ok_or("unrecognised date")?;
    let value = Numeric::coerce(record.field(1)).ok_or("non-numeric value")?;
    if !value.is_positive() {
        return Err("non-positive value");
    }

    check_range(date, config)?;
    Ok(CalendarPoint { date, value })
}

fn check_range(date: DateParts, config: &ChartConfig) -> Result<(), &'static str> {
    if config.min_year.is_some_and(|min| date.year < min) {
        return Err("before --min-year");
    }
    if config.max_year.is_some_and(|max| date.year > max) {
        return Err("after --max-year");
    }
    if config.strict_dates && !date.is_calendar_valid() {
        return Err("not a calendar date");
    }
    Ok(())
}

/// Number of distinct years covered, used to size the chart.
pub fn distinct_years(points: &[CalendarPoint]) -> usize {
    let mut years: Vec<i32> = points.iter().map(|p| p.date.year).collect();
    years.sort_unstable();
    years.dedup();
    years.len()
}
