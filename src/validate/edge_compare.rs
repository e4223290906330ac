//! Set comparison between two edge lists.
//!
//! Typically one list comes from the static analysis and the other from a
//! dynamic run; the comparison reports overlap in both directions.
//! Static-initializer edges are never listed as missing.

use crate::parser::edges::{Edge, EdgeSet};
use log::debug;

/// How one edge set covers another
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coverage {
    /// Edges also present in the other set
    pub found: usize,

    /// Non-synthetic edges absent from the other set, in sorted order
    pub missing: Vec<Edge>,
}

impl Coverage {
    fn of(edges: &EdgeSet, other: &EdgeSet) -> Self {
        let mut coverage = Self::default();
        for edge in edges {
            if other.contains(edge) {
                coverage.found += 1;
            } else if !edge.is_synthetic() {
                coverage.missing.push(edge.clone());
            }
        }
        coverage
    }
}

/// Result of comparing two edge sets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeComparison {
    pub first_total: usize,
    pub second_total: usize,

    /// Edges of the first set checked against the second
    pub first_in_second: Coverage,

    /// Edges of the second set checked against the first
    pub second_in_first: Coverage,
}

impl EdgeComparison {
    /// Human-readable summary
    ///
    /// **Public** - for logging and the compare-edges command
    pub fn summary(&self) -> String {
        format!(
            "Edges of first: {}\nEdges of second: {}\n\
             Edges of first found in second: {}, NOT found in second: {}\n\
             Edges of second found in first: {}, NOT found in first: {}",
            self.first_total,
            self.second_total,
            self.first_in_second.found,
            self.first_in_second.missing.len(),
            self.second_in_first.found,
            self.second_in_first.missing.len(),
        )
    }
}

/// Compare two edge sets in both directions
pub fn compare_edge_sets(first: &EdgeSet, second: &EdgeSet) -> EdgeComparison {
    let comparison = EdgeComparison {
        first_total: first.len(),
        second_total: second.len(),
        first_in_second: Coverage::of(first, second),
        second_in_first: Coverage::of(second, first),
    };
    debug!(
        "Compared edge sets: {} shared, {} / {} missing",
        comparison.first_in_second.found,
        comparison.first_in_second.missing.len(),
        comparison.second_in_first.missing.len()
    );
    comparison
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(edges: &[(&str, &str)]) -> EdgeSet {
        edges.iter().map(|(a, b)| Edge::new(*a, *b)).collect()
    }

    #[test]
    fn test_compare_both_directions() {
        let first = set(&[("a", "b"), ("c", "d"), ("X.<clinit>", "e")]);
        let second = set(&[("a", "b"), ("f", "g")]);

        let cmp = compare_edge_sets(&first, &second);

        assert_eq!(cmp.first_total, 3);
        assert_eq!(cmp.second_total, 2);
        assert_eq!(cmp.first_in_second.found, 1);
        assert_eq!(cmp.first_in_second.missing, vec![Edge::new("c", "d")]);
        assert_eq!(cmp.second_in_first.found, 1);
        assert_eq!(cmp.second_in_first.missing, vec![Edge::new("f", "g")]);
    }

    #[test]
    fn test_summary_mentions_counts() {
        let cmp = compare_edge_sets(&set(&[("a", "b")]), &EdgeSet::new());
        let summary = cmp.summary();
        assert!(summary.contains("Edges of first: 1"));
        assert!(summary.contains("NOT found in second: 1"));
    }
}
