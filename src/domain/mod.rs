//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - chart selection and input conventions (`ChartKind`, `DateOrder`)
//! - the per-chart tuples (`CalendarPoint`, `TimelineBar`, `TreeNode`)
//! - the resolved run configuration (`ChartConfig`)

pub mod types;

pub use types::*;
