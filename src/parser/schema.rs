//! Output JSON schema definitions for edge validation reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use serde::{Deserialize, Serialize};

/// Top-level validation report written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Edge list that was validated
    pub edges_file: String,

    /// Stack dump used as the witness corpus
    pub stacks_file: String,

    /// Number of unique candidate edges
    pub total_edges: usize,

    /// Number of stacks in the corpus
    pub stack_count: usize,

    /// Edges with a witnessing stack
    pub validated: Vec<ValidatedEdge>,

    /// Number of edges without a witness
    pub rejected_count: usize,

    /// Timestamp when report was generated
    pub generated_at: String,
}

/// An edge together with the stack that substantiates it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedEdge {
    pub callee: String,
    pub caller: String,

    /// Index of the first witnessing stack in the corpus
    pub witness: usize,
}
