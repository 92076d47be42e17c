//! `csv-charts` library crate.
//!
//! The binary (`chartgen`) is a thin wrapper around this library so that:
//!
//! - the pipeline is testable without spawning processes
//! - CSV ingest, dataset building and rendering stay separate modules

pub mod app;
pub mod chart;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod render;
pub mod report;
