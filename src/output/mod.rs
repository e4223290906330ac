//! Output writers for reports, flamegraphs and line lists.
//!
//! This module handles writing data to disk in various formats:
//! - JSON validation reports
//! - SVG flamegraphs
//! - Plain-text line lists

pub mod json;
pub mod svg;
pub mod text;

// Re-export main functions
pub use json::{read_report, write_report};
pub use svg::write_svg;
pub use text::write_lines;
