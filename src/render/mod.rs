//! HTML document rendering.
//!
//! - fixed page and per-chart skeletons (`template`)
//! - dataset serialization and escaping (`html`)

pub mod html;
pub mod template;

pub use html::{RenderOptions, html_escape, render_document, script_json};

/// Google Charts loader used when `CHARTGEN_LOADER_URL` is not set.
pub const DEFAULT_LOADER_URL: &str = "https://www.gstatic.com/charts/loader.js";
