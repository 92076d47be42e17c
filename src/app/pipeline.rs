//! The chart pipeline: read -> build -> render -> write.
//!
//! Kept separate from `app::run` so it can be driven from tests with a plain
//! `ChartConfig`, without argv or logging setup.

use chrono::Local;
use tracing::{info, warn};

use crate::chart::build_dataset;
use crate::domain::{BuildStats, ChartConfig, ChartDataset};
use crate::error::AppError;
use crate::io::export::{WriteReport, write_document};
use crate::io::ingest::read_records;
use crate::render::{RenderOptions, render_document};

/// Everything a single run produced.
#[derive(Debug, Clone)]
pub struct ChartRun {
    pub dataset: ChartDataset,
    pub stats: BuildStats,
    /// Lines the CSV reader could not decode.
    pub unreadable: usize,
    pub output: WriteReport,
}

/// Execute the full pipeline for `config`.
pub fn run_chart(config: &ChartConfig) -> Result<ChartRun, AppError> {
    run_chart_with_stamp(config, Some(generation_stamp(config)))
}

/// Execute the pipeline with an explicit generation stamp (`None` for none).
pub fn run_chart_with_stamp(config: &ChartConfig, stamp: Option<String>) -> Result<ChartRun, AppError> {
    // 1) Read raw records.
    let input = read_records(&config.input)?;
    info!("read {} records from {}", input.records.len(), config.input.display());

    // 2) Build the dataset.
    let (dataset, stats) = build_dataset(&input.records, config);
    if dataset.is_empty() {
        warn!("no usable rows in {}; writing an empty {}", config.input.display(), config.kind.display_name());
    }

    // 3) Render.
    let options = RenderOptions {
        title: title_for(config),
        loader_url: config.loader_url.clone(),
        stamp,
    };
    let document = render_document(&dataset, &options)?;

    // 4) Write.
    let output = write_document(&config.input, &document, config.simulate)?;

    Ok(ChartRun {
        dataset,
        stats,
        unreadable: input.unreadable,
        output,
    })
}

/// The explicit `--title`, else the input file name.
pub fn title_for(config: &ChartConfig) -> String {
    if let Some(title) = &config.title {
        return title.clone();
    }
    config
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.input.display().to_string())
}

fn generation_stamp(config: &ChartConfig) -> String {
    format!(
        "generated by chartgen {} from {} at {}",
        env!("CARGO_PKG_VERSION"),
        config.input.display(),
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}
