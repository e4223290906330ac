//! Aggregation of parsed traces into trees, collapsed stacks and contexts.
//!
//! This module transforms parsed input into:
//! - A call tree with pre-order search
//! - Collapsed stack format (for flamegraph generation)
//! - Stack contexts around a target method

pub mod call_tree;
pub mod contexts;
pub mod stack_builder;

// Re-export main types and functions
pub use call_tree::{parse_call_trace, CallNode, CallTree, CallTreeBuilder, NodeId};
pub use contexts::{extract_contexts, stack_context};
pub use stack_builder::{build_collapsed_stacks, build_subtree_stacks, CollapsedStack};
