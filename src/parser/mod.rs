//! Text parsers and schema definitions.
//!
//! This module handles:
//! - Decoding enter/exit trace lines
//! - Splitting stack dumps into a corpus
//! - Reading candidate call-edge lists
//! - Defining output schema

pub mod edges;
pub mod schema;
pub mod stack_blocks;
pub mod trace_line;

// Re-export main types
pub use edges::{parse_edges, Edge, EdgeSet};
pub use schema::{EdgeReport, ValidatedEdge};
pub use stack_blocks::{bare_signature, parse_stack_blocks, CallStack, StackCorpus};
pub use trace_line::{normalize_method, parse_trace_line, Direction, TraceLine};
