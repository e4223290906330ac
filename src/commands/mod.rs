//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod contexts;
pub mod edges;
pub mod filter;
pub mod models;
pub mod tree;
pub mod utils;

// Re-export main command functions
pub use contexts::{execute_contexts, validate_context_args};
pub use edges::{
    execute_compare_edges, execute_validate_edges, validate_compare_args, validate_edge_args,
};
pub use filter::{execute_filter_events, validate_filter_args};
pub use models::{CompareEdgesArgs, ContextArgs, FilterEventsArgs, TreeArgs, ValidateEdgesArgs};
pub use tree::{execute_tree, validate_tree_args};
pub use utils::{display_schema, display_version, show_report};
