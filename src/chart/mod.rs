//! Chart dataset builders.
//!
//! Each builder takes the raw records in file order and returns the tuples
//! it accepted, in the same order, plus row accounting.

pub mod calendar;
pub mod dates;
pub mod timeline;
pub mod treemap;

use crate::domain::{BuildStats, ChartConfig, ChartDataset, ChartKind};
use crate::io::ingest::RawRecord;

pub use calendar::build_calendar;
pub use timeline::build_timeline;
pub use treemap::build_treemap;

/// Build the dataset for `config.kind`.
pub fn build_dataset(records: &[RawRecord], config: &ChartConfig) -> (ChartDataset, BuildStats) {
    match config.kind {
        ChartKind::Calendar => {
            let (points, stats) = build_calendar(records, config);
            (ChartDataset::Calendar(points), stats)
        }
        ChartKind::Timeline => {
            let (bars, stats) = build_timeline(records, config);
            (ChartDataset::Timeline(bars), stats)
        }
        ChartKind::Treemap => {
            let (nodes, stats) = build_treemap(records, config);
            (ChartDataset::Treemap(nodes), stats)
        }
    }
}
