//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Absence (no matching node, no witness stack, empty corpus) is never an
//! error: those outcomes are `Option::None` or empty collections.

use thiserror::Error;

/// Errors that can occur while parsing trace, stack, edge or event text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed trace line {line_number} ({reason}): {line:?}")]
    MalformedTraceLine {
        line_number: usize,
        line: String,
        reason: &'static str,
    },

    #[error("depth mismatch on line {line_number}: expected depth {expected}, found {actual}: {line:?}")]
    DepthMismatch {
        line_number: usize,
        line: String,
        expected: usize,
        actual: usize,
    },

    #[error("exit without a matching enter on line {line_number}: {line:?}")]
    UnbalancedExit { line_number: usize, line: String },

    #[error("truncated trace: {open} call(s) still open at end of input, innermost {innermost:?}")]
    TruncatedTrace { open: usize, innermost: String },

    #[error("malformed edge on line {line_number}: expected 2 fields, found {fields}: {line:?}")]
    MalformedEdgeTuple {
        line_number: usize,
        line: String,
        fields: usize,
    },

    #[error("malformed event line {line_number}: no method field: {line:?}")]
    MalformedEventLine { line_number: usize, line: String },
}

/// Errors that can occur during flamegraph generation
#[derive(Error, Debug)]
pub enum FlamegraphError {
    #[error("Empty stack data")]
    EmptyStacks,

    #[error("Failed to render flamegraph: {0}")]
    RenderFailed(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
