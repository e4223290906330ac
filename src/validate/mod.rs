//! Edge validation, edge-set comparison and event filtering.

pub mod edge_compare;
pub mod edge_validator;
pub mod method_filter;

pub use edge_compare::{compare_edge_sets, Coverage, EdgeComparison};
pub use edge_validator::{find_witness, validate_edges, EdgeValidation, ValidatorConfig};
pub use method_filter::{filter_event_lines, is_application_method};
