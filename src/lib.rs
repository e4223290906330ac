//! Calltrace Studio
//!
//! Offline analysis of method-call traces and call-edge lists produced by
//! a points-to/call-graph analysis of a managed runtime:
//!
//! - rebuild a call tree from a depth-tagged enter/exit trace and search it
//! - split stack dumps into a corpus and extract contexts around a method
//! - validate candidate call edges against the corpus
//!
//! This crate provides the core implementation for the
//! `calltrace` CLI tool.
//!
//! ```
//! use calltrace_studio::aggregator::parse_call_trace;
//!
//! let tree = parse_call_trace(">[0]a.b.foo\n>[1]a.b.bar\n<[1]a.b.bar\n<[0]a.b.foo\n").unwrap();
//! let bar = tree.find("a.b.bar").unwrap();
//! assert!(tree.node(bar).children.is_empty());
//! ```

pub mod aggregator;
pub mod commands;
pub mod flamegraph;
pub mod output;
pub mod parser;
pub mod utils;
pub mod validate;
