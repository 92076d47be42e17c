//! Date decomposition.
//!
//! Dates are split into `(year, month, day)` by trying a fixed list of
//! patterns in order. The first pattern that matches wins, even when a later
//! one would also match.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{DateOrder, DateParts};

/// `YYYY-MM-DD`, always year-month-day.
static ISO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("valid regex"));

/// `YYYYMMDD`.
static COMPACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})(\d{2})(\d{2})$").expect("valid regex"));

/// `A/B/C` with `/`, `-` or `.` separators, ordered by `DateOrder`.
static SEPARATED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,4})[/.-](\d{1,2})[/.-](\d{1,4})$").expect("valid regex"));

/// Decompose a date field. Returns `None` when no pattern matches.
///
/// Only the leading token is considered, so `2020-03-01 12:30` and
/// `2020-03-01T12:30:00` both decompose to `(2020, 3, 1)`.
pub fn decompose(field: &str, order: DateOrder) -> Option<DateParts> {
    let token = leading_token(field);
    if token.is_empty() {
        return None;
    }

    if let Some(c) = ISO.captures(token) {
        return parts(&c[1], &c[2], &c[3]);
    }
    if let Some(c) = COMPACT.captures(token) {
        return parts(&c[1], &c[2], &c[3]);
    }
    if let Some(c) = SEPARATED.captures(token) {
        return match order {
            DateOrder::Dmy => parts(&c[3], &c[2], &c[1]),
            DateOrder::Mdy => parts(&c[3], &c[1], &c[2]),
            DateOrder::Ymd => parts(&c[1], &c[2], &c[3]),
        };
    }

    None
}

fn leading_token(field: &str) -> &str {
    let field = field.trim();
    let end = field
        .find(|c: char| c.is_whitespace() || c == 'T')
        .unwrap_or(field.len());
    &field[..end]
}

fn parts(year: &str, month: &str, day: &str) -> Option<DateParts> {
    // Short years would be read as 19xx by the browser's `Date`.
    if year.len() != 4 {
        return None;
    }
    Some(DateParts::new(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?))
}
