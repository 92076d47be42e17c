//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so the
//! renderer can embed them directly as a JSON literal:
//!
//! - `DateParts` serializes as `[year, month, day]`
//! - `Numeric` serializes as a bare JSON number
//! - missing parents serialize as `null`

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Serialize, Serializer};

/// Which chart the input is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Calendar,
    Timeline,
    Treemap,
}

impl ChartKind {
    pub fn display_name(self) -> &'static str {
        match self {
            ChartKind::Calendar => "calendar heatmap",
            ChartKind::Timeline => "timeline",
            ChartKind::Treemap => "tree map",
        }
    }
}

/// How the components of a separated date (`A/B/C`) are ordered.
///
/// ISO (`YYYY-MM-DD`) and compact (`YYYYMMDD`) dates are always read as
/// year-month-day regardless of this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DateOrder {
    /// Day, month, year (`01/03/2020` is 1 March 2020).
    #[default]
    Dmy,
    /// Month, day, year (`01/03/2020` is 3 January 2020).
    Mdy,
    /// Year, month, day.
    Ymd,
}

/// A date split into its components.
///
/// No calendar validation happens here: `31/02/2020` decomposes to
/// `(2020, 2, 31)` and is passed through unless strict dates are requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateParts {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Whether the components name a real calendar day.
    pub fn is_calendar_valid(&self) -> bool {
        chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_some()
    }
}

impl Serialize for DateParts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.year, self.month, self.day).serialize(serializer)
    }
}

/// A field coerced to a number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Numeric {
    Int(i64),
    Float(f64),
}

impl Numeric {
    /// Coerce a text field: integers first, then finite floats.
    pub fn coerce(s: &str) -> Option<Numeric> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        if let Ok(v) = s.parse::<i64>() {
            return Some(Numeric::Int(v));
        }
        let v = s.parse::<f64>().ok()?;
        if v.is_finite() { Some(Numeric::Float(v)) } else { None }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Numeric::Int(v) => v as f64,
            Numeric::Float(v) => v,
        }
    }

    pub fn is_positive(self) -> bool {
        match self {
            Numeric::Int(v) => v > 0,
            Numeric::Float(v) => v > 0.0,
        }
    }
}

/// One day on the calendar heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarPoint {
    pub date: DateParts,
    pub value: Numeric,
}

/// One bar on the timeline.
///
/// `bar` is only set when the label was split into a row label and a bar label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineBar {
    pub row: String,
    pub bar: Option<String>,
    pub start: DateParts,
    pub end: DateParts,
}

/// One node of the tree map. The root has no parent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    pub name: String,
    pub parent: Option<String>,
    pub size: Numeric,
    pub delta: Numeric,
}

/// The ordered tuples destined for the document, tagged by chart kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartDataset {
    Calendar(Vec<CalendarPoint>),
    Timeline(Vec<TimelineBar>),
    Treemap(Vec<TreeNode>),
}

impl ChartDataset {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartDataset::Calendar(_) => ChartKind::Calendar,
            ChartDataset::Timeline(_) => ChartKind::Timeline,
            ChartDataset::Treemap(_) => ChartKind::Treemap,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ChartDataset::Calendar(v) => v.len(),
            ChartDataset::Timeline(v) => v.len(),
            ChartDataset::Treemap(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Row accounting for a single build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub rows_read: usize,
    pub rows_used: usize,
    pub rows_skipped: usize,
}

/// Resolved settings for one run.
///
/// Built from CLI flags and the environment by `app::chart_config_from_args`.
/// Options that only apply to other chart kinds are ignored by the builders.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub input: PathBuf,
    pub title: Option<String>,
    pub simulate: bool,
    pub loader_url: String,

    pub date_order: DateOrder,
    pub strict_dates: bool,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,

    pub split: Option<String>,

    pub log_scale: bool,
}

impl ChartConfig {
    /// A config with every optional filter off.
    pub fn new(kind: ChartKind, input: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            input: input.into(),
            title: None,
            simulate: false,
            loader_url: crate::render::DEFAULT_LOADER_URL.to_string(),
            date_order: DateOrder::default(),
            strict_dates: false,
            min_year: None,
            max_year: None,
            split: None,
            log_scale: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_coercion_prefers_integers() {
        assert_eq!(Numeric::coerce("42"), Some(Numeric::Int(42)));
        assert_eq!(Numeric::coerce(" -3 "), Some(Numeric::Int(-3)));
        assert_eq!(Numeric::coerce("2.5"), Some(Numeric::Float(2.5)));
        assert_eq!(Numeric::coerce("abc"), None);
        assert_eq!(Numeric::coerce(""), None);
        assert_eq!(Numeric::coerce("inf"), None);
        assert_eq!(Numeric::coerce("NaN"), None);
    }

    #[test]
    fn date_parts_serialize_as_triples() {
        let json = serde_json::to_string(&DateParts::new(2020, 3, 1)).unwrap();
        assert_eq!(json, "[2020,3,1]");
    }

    #[test]
    fn invalid_calendar_dates_are_detected_not_rejected() {
        let d = DateParts::new(2020, 2, 31);
        assert!(!d.is_calendar_valid());
        assert!(DateParts::new(2020, 2, 29).is_calendar_valid());
    }

    #[test]
    fn tree_node_root_serializes_null_parent() {
        let root = TreeNode {
            name: "All".to_string(),
            parent: None,
            size: Numeric::Int(0),
            delta: Numeric::Float(1.5),
        };
        let json = serde_json::to_string(&root).unwrap();
        assert_eq!(json, r#"{"name":"All","parent":null,"size":0,"delta":1.5}"#);
    }
}
