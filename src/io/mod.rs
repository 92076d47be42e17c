//! Input/output helpers.
//!
//! - CSV ingest into positional records (`ingest`)
//! - document output next to the input (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
