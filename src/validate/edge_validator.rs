//! Cross-validation of candidate call edges against captured stacks.
//!
//! An edge `<callee> <caller>` is witnessed by a stack when, after every
//! frame is reduced to its bare signature, the first occurrence of the
//! callee is at or before the first occurrence of the caller, and no frame
//! of that stack belongs to a library namespace.
//!
//! Stacks are scanned in corpus order and the first witness wins. Which
//! stack is reported may depend on that order; the set of validated edges
//! does not.

use crate::parser::edges::{Edge, EdgeSet};
use crate::parser::stack_blocks::{bare_signature, StackCorpus};
use crate::utils::config::default_library_prefixes;
use log::debug;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Validator settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Frames starting with any of these disqualify the whole stack
    pub library_prefixes: Vec<String>,

    /// Validate edges on the rayon pool
    pub parallel: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            library_prefixes: default_library_prefixes(),
            parallel: true,
        }
    }
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_library_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.library_prefixes = prefixes;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// True if `signature` lives in a library namespace
    pub fn is_library_frame(&self, signature: &str) -> bool {
        self.library_prefixes
            .iter()
            .any(|prefix| signature.starts_with(prefix.as_str()))
    }
}

/// Outcome of validating an edge set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeValidation {
    /// Substantiated edges mapped to the corpus index of their first witness
    pub validated: BTreeMap<Edge, usize>,

    /// Edges without any witness
    pub rejected: EdgeSet,
}

impl EdgeValidation {
    /// The substantiated edges as a set
    pub fn validated_set(&self) -> EdgeSet {
        self.validated.keys().cloned().collect()
    }

    pub fn witness(&self, edge: &Edge) -> Option<usize> {
        self.validated.get(edge).copied()
    }

    pub fn validated_count(&self) -> usize {
        self.validated.len()
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }
}

/// A stack reduced to bare signatures, ready for repeated lookups
#[derive(Debug)]
struct NormalizedStack<'a> {
    signatures: Vec<&'a str>,
    has_library_frame: bool,
}

impl NormalizedStack<'_> {
    fn position(&self, signature: &str) -> Option<usize> {
        self.signatures.iter().position(|s| *s == signature)
    }

    fn witnesses(&self, callee: &str, caller: &str) -> bool {
        match (self.position(callee), self.position(caller)) {
            (Some(i), Some(j)) => i <= j && !self.has_library_frame,
            _ => false,
        }
    }
}

fn normalize_corpus<'a>(corpus: &'a StackCorpus, config: &ValidatorConfig) -> Vec<NormalizedStack<'a>> {
    corpus
        .iter()
        .map(|stack| {
            let signatures: Vec<&str> = stack.frames().iter().map(|f| bare_signature(f)).collect();
            let has_library_frame = signatures.iter().any(|s| config.is_library_frame(s));
            NormalizedStack {
                signatures,
                has_library_frame,
            }
        })
        .collect()
}

fn first_witness(edge: &Edge, stacks: &[NormalizedStack<'_>]) -> Option<usize> {
    let callee = bare_signature(&edge.callee);
    let caller = bare_signature(&edge.caller);
    stacks.iter().position(|stack| stack.witnesses(callee, caller))
}

/// Find the first stack witnessing `edge`
///
/// **Public** - single-edge lookup
///
/// # Returns
/// Corpus index of the witness, or `None` if no stack substantiates the edge
pub fn find_witness(edge: &Edge, corpus: &StackCorpus, config: &ValidatorConfig) -> Option<usize> {
    first_witness(edge, &normalize_corpus(corpus, config))
}

/// Validate every edge of `edges` against `corpus`
///
/// **Public** - main entry point for edge validation
///
/// Edges are independent of each other; with `config.parallel` the outer
/// loop runs on the current rayon pool over a shared read-only corpus.
/// Empty inputs yield an empty validation, never an error.
pub fn validate_edges(edges: &EdgeSet, corpus: &StackCorpus, config: &ValidatorConfig) -> EdgeValidation {
    debug!(
        "Validating {} edges against {} stacks (parallel: {})",
        edges.len(),
        corpus.len(),
        config.parallel
    );

    let stacks = normalize_corpus(corpus, config);
    let library_stacks = stacks.iter().filter(|s| s.has_library_frame).count();
    debug!("{} stacks contain library frames", library_stacks);

    let edge_list: Vec<&Edge> = edges.iter().collect();
    let outcomes: Vec<(&Edge, Option<usize>)> = if config.parallel {
        edge_list
            .par_iter()
            .map(|&edge| (edge, first_witness(edge, &stacks)))
            .collect()
    } else {
        edge_list
            .iter()
            .map(|&edge| (edge, first_witness(edge, &stacks)))
            .collect()
    };

    let mut validation = EdgeValidation::default();
    for (edge, witness) in outcomes {
        match witness {
            Some(index) => {
                validation.validated.insert(edge.clone(), index);
            }
            None => {
                validation.rejected.insert(edge.clone());
            }
        }
    }

    debug!(
        "Validated {} edges, rejected {}",
        validation.validated_count(),
        validation.rejected_count()
    );
    validation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::stack_blocks::CallStack;

    fn corpus(stacks: &[&[&str]]) -> StackCorpus {
        StackCorpus::new(
            stacks
                .iter()
                .map(|s| CallStack::new(s.iter().map(|f| f.to_string()).collect()))
                .collect(),
        )
    }

    #[test]
    fn test_direction_matters() {
        let corpus = corpus(&[&["A", "B", "C"]]);
        let config = ValidatorConfig::default();

        assert_eq!(find_witness(&Edge::new("A", "C"), &corpus, &config), Some(0));
        assert_eq!(find_witness(&Edge::new("C", "A"), &corpus, &config), None);
    }

    #[test]
    fn test_same_frame_counts() {
        let corpus = corpus(&[&["A", "B"]]);
        assert_eq!(
            find_witness(&Edge::new("B", "B"), &corpus, &ValidatorConfig::default()),
            Some(0)
        );
    }

    #[test]
    fn test_library_frame_disqualifies_stack() {
        let corpus = corpus(&[&["A", "java.lang.Object.toString", "C"]]);
        let config = ValidatorConfig::default();
        assert_eq!(find_witness(&Edge::new("A", "C"), &corpus, &config), None);
    }

    #[test]
    fn test_library_stack_does_not_stop_the_scan() {
        let corpus = corpus(&[&["A", "jdk.internal.X.y", "C"], &["Z", "A", "C"]]);
        let config = ValidatorConfig::default();
        assert_eq!(find_witness(&Edge::new("A", "C"), &corpus, &config), Some(1));
    }

    #[test]
    fn test_call_site_decoration_is_stripped() {
        let corpus = corpus(&[&["a.X.f(X.java:3)", "a.Y.g(Y.java:9)"]]);
        let edge = Edge::new("a.X.f()V", "a.Y.g(I)V");
        assert_eq!(
            find_witness(&edge, &corpus, &ValidatorConfig::default()),
            Some(0)
        );
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let corpus = corpus(&[&["A", "B", "C"], &["C", "D"], &["sun.misc.U", "D", "E"]]);
        let edges: EdgeSet = [
            Edge::new("A", "C"),
            Edge::new("C", "A"),
            Edge::new("C", "D"),
            Edge::new("D", "E"),
            Edge::new("Q", "A"),
        ]
        .into_iter()
        .collect();

        let parallel = validate_edges(&edges, &corpus, &ValidatorConfig::default());
        let sequential = validate_edges(
            &edges,
            &corpus,
            &ValidatorConfig::default().with_parallel(false),
        );

        assert_eq!(parallel, sequential);
        assert_eq!(parallel.validated_count(), 2);
        assert_eq!(parallel.witness(&Edge::new("C", "D")), Some(1));
        assert_eq!(parallel.rejected_count(), 3);
    }

    #[test]
    fn test_empty_inputs() {
        let empty = validate_edges(&EdgeSet::new(), &StackCorpus::default(), &ValidatorConfig::default());
        assert_eq!(empty.validated_count(), 0);

        let edges: EdgeSet = [Edge::new("A", "B")].into_iter().collect();
        let none = validate_edges(&edges, &StackCorpus::default(), &ValidatorConfig::default());
        assert_eq!(none.rejected_count(), 1);
    }

    #[test]
    fn test_custom_prefixes() {
        let corpus = corpus(&[&["A", "kotlin.io.F", "C"]]);
        let config = ValidatorConfig::default().with_library_prefixes(vec!["kotlin.".to_string()]);
        assert_eq!(find_witness(&Edge::new("A", "C"), &corpus, &config), None);
    }
}
