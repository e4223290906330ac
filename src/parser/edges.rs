//! Candidate call-edge lists.
//!
//! One edge per line, two whitespace-separated fields: `<callee> <caller>`.
//! The validator relies on this order, so it is fixed here for the whole
//! crate.

use crate::utils::config::SYNTHETIC_MARKER;
use crate::utils::error::ParseError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

/// A claimed call relationship between two method signatures
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub callee: String,
    pub caller: String,
}

impl Edge {
    pub fn new(callee: impl Into<String>, caller: impl Into<String>) -> Self {
        Self {
            callee: callee.into(),
            caller: caller.into(),
        }
    }

    /// True if either endpoint names a static initializer
    pub fn is_synthetic(&self) -> bool {
        self.callee.contains(SYNTHETIC_MARKER) || self.caller.contains(SYNTHETIC_MARKER)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.callee, self.caller)
    }
}

/// Deduplicated, ordered set of edges
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeSet {
    edges: BTreeSet<Edge>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an edge, returning false if it was already present
    pub fn insert(&mut self, edge: Edge) -> bool {
        self.edges.insert(edge)
    }

    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Edge> {
        self.edges.iter()
    }
}

impl FromIterator<Edge> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a Edge;
    type IntoIter = btree_set::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl IntoIterator for EdgeSet {
    type Item = Edge;
    type IntoIter = btree_set::IntoIter<Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

/// Parse an edge list into a deduplicated set
///
/// **Public** - main entry point for edge ingestion
///
/// # Arguments
/// * `text` - Edge list, one `<callee> <caller>` pair per line
/// * `exclude_synthetic` - Drop lines mentioning a static initializer
///
/// # Errors
/// * `ParseError::MalformedEdgeTuple` - a line does not split into exactly 2 fields
pub fn parse_edges(text: &str, exclude_synthetic: bool) -> Result<EdgeSet, ParseError> {
    let mut edges = EdgeSet::new();
    let mut skipped = 0usize;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if exclude_synthetic && line.contains(SYNTHETIC_MARKER) {
            skipped += 1;
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [callee, caller] = fields.as_slice() else {
            return Err(ParseError::MalformedEdgeTuple {
                line_number: index + 1,
                line: line.to_string(),
                fields: fields.len(),
            });
        };

        edges.insert(Edge::new(*callee, *caller));
    }

    debug!(
        "Parsed {} unique edges ({} synthetic lines skipped)",
        edges.len(),
        skipped
    );
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapse() {
        let text = "a.B.m() c.D.n()\n".repeat(5);
        let edges = parse_edges(&text, false).unwrap();
        assert_eq!(edges.len(), 1);
        assert!(edges.contains(&Edge::new("a.B.m()", "c.D.n()")));
    }

    #[test]
    fn test_exclude_synthetic() {
        let text = "a.B.<clinit>() c.D.n()\na.B.m() c.D.n()\n";
        assert_eq!(parse_edges(text, false).unwrap().len(), 2);
        assert_eq!(parse_edges(text, true).unwrap().len(), 1);
    }

    #[test]
    fn test_wrong_arity_fails_fast() {
        let err = parse_edges("a b\n\nlonely\n", false).unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedEdgeTuple {
                line_number: 3,
                line: "lonely".to_string(),
                fields: 1,
            }
        );
        assert!(parse_edges("a b c\n", false).is_err());
    }

    #[test]
    fn test_display_round_trips_line_format() {
        let edge = Edge::new("x.Y.f()V", "x.Z.g()V");
        assert_eq!(edge.to_string(), "x.Y.f()V x.Z.g()V");
    }
}
