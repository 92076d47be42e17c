//! Command-line parsing for the chart generator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! dataset and rendering code: everything here is turned into a plain
//! `ChartConfig` before any work starts.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::DateOrder;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "chartgen", version, about = "Render CSV data as a standalone HTML chart")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// One subcommand per chart type.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Calendar heatmap from `date,value` rows.
    Calendar(CalendarArgs),
    /// Timeline from `label,start,end` rows.
    Timeline(TimelineArgs),
    /// Tree map from `name,parent,size,delta` rows; the first row is the root.
    Treemap(TreemapArgs),
}

impl Command {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Command::Calendar(args) => &args.common,
            Command::Timeline(args) => &args.common,
            Command::Treemap(args) => &args.common,
        }
    }
}

/// Options shared by every chart type.
#[derive(Debug, Args, Clone)]
pub struct CommonArgs {
    /// Input CSV file. The chart is written to `<INPUT>.html`.
    #[arg(short = 'i', long, value_name = "CSV")]
    pub input: PathBuf,

    /// Log every skipped row (debug level).
    #[arg(long)]
    pub debug: bool,

    /// Log progress and row counts (info level).
    #[arg(long)]
    pub verbose: bool,

    /// Do everything except writing the output file.
    #[arg(long)]
    pub simulate: bool,

    /// Page and chart title (defaults to the input file name).
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct CalendarArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Component order for `A/B/C` dates.
    #[arg(long, value_enum, default_value_t = DateOrder::Dmy)]
    pub datefmt: DateOrder,

    /// Drop rows dated before this year.
    #[arg(long, value_name = "YEAR")]
    pub min_year: Option<i32>,

    /// Drop rows dated after this year.
    #[arg(long, value_name = "YEAR")]
    pub max_year: Option<i32>,

    /// Drop rows whose date is not a real calendar day.
    #[arg(long)]
    pub strict_dates: bool,
}

#[derive(Debug, Args, Clone)]
pub struct TimelineArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Component order for `A/B/C` dates.
    #[arg(long, value_enum, default_value_t = DateOrder::Dmy)]
    pub datefmt: DateOrder,

    /// Split labels at the first SEP into a row label and a bar label.
    #[arg(long, value_name = "SEP")]
    pub split: Option<String>,

    /// Drop rows whose dates are not real calendar days.
    #[arg(long)]
    pub strict_dates: bool,
}

#[derive(Debug, Args, Clone)]
pub struct TreemapArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Scale node sizes as log10(size + 1).
    #[arg(long)]
    pub log: bool,
}
