//! Flamegraph generation using the inferno library.
//!
//! This module converts collapsed call-tree stacks into interactive SVG
//! flamegraphs and plain-text summaries.

pub mod generator;

// Re-export main types
pub use generator::{generate_flamegraph, generate_text_summary, FlamegraphConfig};
