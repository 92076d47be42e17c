//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - sets up logging
//! - resolves flags and environment into a `ChartConfig`
//! - runs the pipeline and reports the output path and size

use clap::Parser;
use tracing::info;

use crate::cli::{Cli, Command};
use crate::domain::{ChartConfig, ChartKind};
use crate::error::AppError;
use crate::render::DEFAULT_LOADER_URL;

pub mod pipeline;

/// Environment variable that overrides the charting library loader URL.
pub const LOADER_URL_ENV: &str = "CHARTGEN_LOADER_URL";

/// Entry point for the `chartgen` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let common = cli.command.common();
    crate::logging::init(common.verbose, common.debug);

    // An optional `.env` next to the working directory can set the loader URL.
    dotenvy::dotenv().ok();
    let loader_url = std::env::var(LOADER_URL_ENV).ok();

    let config = chart_config_from_args(&cli.command, loader_url);
    let run = pipeline::run_chart(&config)?;

    info!("{}", crate::report::format_run_summary(&run));

    println!("{}", run.output.path.display());
    eprintln!("{}", crate::report::format_size(&run.output));
    Ok(())
}

/// Turn parsed arguments into a plain config.
///
/// `loader_url` is the environment override; an empty value counts as unset.
pub fn chart_config_from_args(command: &Command, loader_url: Option<String>) -> ChartConfig {
    let common = command.common();
    let kind = match command {
        Command::Calendar(_) => ChartKind::Calendar,
        Command::Timeline(_) => ChartKind::Timeline,
        Command::Treemap(_) => ChartKind::Treemap,
    };

    let mut config = ChartConfig::new(kind, common.input.clone());
    config.title = common.title.clone();
    config.simulate = common.simulate;
    config.loader_url = loader_url
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOADER_URL.to_string());

    match command {
        Command::Calendar(args) => {
            config.date_order = args.datefmt;
            config.min_year = args.min_year;
            config.max_year = args.max_year;
            config.strict_dates = args.strict_dates;
        }
        Command::Timeline(args) => {
            config.date_order = args.datefmt;
            config.split = args.split.clone();
            config.strict_dates = args.strict_dates;
        }
        Command::Treemap(args) => {
            config.log_scale = args.log;
        }
    }

    config
}
