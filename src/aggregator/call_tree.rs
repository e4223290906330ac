//! Call tree reconstruction from enter/exit traces.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]; the
//! parent link is an index, so upward traversal needs no shared ownership.
//!
//! The builder keeps an explicit stack of open activations and checks the
//! recorded depth of every line against it:
//! - enter at depth `d`: after the push, `d == stack.len() - 1`
//! - exit at depth `d`: after the pop, `d == stack.len()`
//!
//! Any violation aborts the parse.

use crate::parser::trace_line::{parse_trace_line, Direction, TraceLine};
use crate::utils::error::ParseError;
use log::{debug, warn};

/// Index of a node inside its [`CallTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One dynamic method activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallNode {
    pub method: String,
    pub parent: Option<NodeId>,
    /// Callees in temporal order of entry
    pub children: Vec<NodeId>,
    /// Distance from the root, equal to the depth recorded on the enter line
    pub depth: usize,
}

/// Reconstructed call tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallTree {
    nodes: Vec<CallNode>,
    roots: Vec<NodeId>,
}

impl CallTree {
    pub fn node(&self, id: NodeId) -> &CallNode {
        &self.nodes[id.0]
    }

    /// First top-level activation, if any
    pub fn root(&self) -> Option<NodeId> {
        self.roots.first().copied()
    }

    /// All top-level activations in temporal order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Deepest recorded depth, `None` for an empty tree
    pub fn max_depth(&self) -> Option<usize> {
        self.nodes.iter().map(|n| n.depth).max()
    }

    fn add_node(&mut self, method: String, parent: Option<NodeId>, depth: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(CallNode {
            method,
            parent,
            children: Vec::new(),
            depth,
        });
        match parent {
            Some(p) => self.nodes[p.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// Find the first node named `target`
    ///
    /// Pre-order depth-first over each root in turn: a node is checked
    /// before its children, children are visited in call order. Only the
    /// first match is returned; see [`CallTree::find_all`] for every match.
    pub fn find(&self, target: &str) -> Option<NodeId> {
        self.roots
            .iter()
            .find_map(|&root| self.find_from(root, target))
    }

    /// Pre-order search restricted to the subtree rooted at `start`
    pub fn find_from(&self, start: NodeId, target: &str) -> Option<NodeId> {
        self.preorder(start).find(|&id| self.node(id).method == target)
    }

    /// Every node named `target`, in pre-order
    pub fn find_all(&self, target: &str) -> Vec<NodeId> {
        self.roots
            .iter()
            .flat_map(|&root| self.preorder(root))
            .filter(|&id| self.node(id).method == target)
            .collect()
    }

    /// Iterate a subtree in pre-order without recursion
    pub fn preorder(&self, start: NodeId) -> Preorder<'_> {
        Preorder {
            tree: self,
            pending: vec![start],
        }
    }

    /// Walk from `id` up to its root, excluding `id` itself
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.node(id).parent, move |&p| self.node(p).parent)
    }

    /// Method names from the root down to `id`, inclusive
    pub fn path_to(&self, id: NodeId) -> Vec<&str> {
        let mut path: Vec<&str> = self
            .ancestors(id)
            .map(|a| self.node(a).method.as_str())
            .collect();
        path.reverse();
        path.push(self.node(id).method.as_str());
        path
    }

    /// Indented text rendering of a subtree
    ///
    /// Indentation is relative to `start`. `max_depth` limits how many
    /// levels below `start` are printed.
    pub fn render_subtree(&self, start: NodeId, max_depth: Option<usize>) -> String {
        let base = self.node(start).depth;
        let mut out = String::new();
        for id in self.preorder(start) {
            let node = self.node(id);
            let level = node.depth - base;
            if max_depth.is_some_and(|max| level > max) {
                continue;
            }
            out.push_str(&"  ".repeat(level));
            out.push_str(&node.method);
            out.push('\n');
        }
        out
    }
}

/// Pre-order iterator over a subtree
pub struct Preorder<'a> {
    tree: &'a CallTree,
    pending: Vec<NodeId>,
}

impl Iterator for Preorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.pending.pop()?;
        self.pending
            .extend(self.tree.node(id).children.iter().rev().copied());
        Some(id)
    }
}

/// Incremental tree builder driven by decoded trace lines
#[derive(Debug, Default)]
pub struct CallTreeBuilder {
    tree: CallTree,
    stack: Vec<NodeId>,
}

impl CallTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one decoded line
    ///
    /// # Errors
    /// * `ParseError::DepthMismatch` - recorded depth disagrees with the stack
    /// * `ParseError::UnbalancedExit` - exit with no open activation
    pub fn push(&mut self, line_number: usize, raw: &str, line: TraceLine) -> Result<(), ParseError> {
        match line.direction {
            Direction::Enter => {
                let parent = self.stack.last().copied();
                let depth = self.stack.len();
                let id = self.tree.add_node(line.method, parent, depth);
                self.stack.push(id);
                self.check_depth(line_number, raw, self.stack.len() - 1, line.depth)
            }
            Direction::Exit => {
                let Some(closed) = self.stack.pop() else {
                    return Err(ParseError::UnbalancedExit {
                        line_number,
                        line: raw.to_string(),
                    });
                };
                let open_method = &self.tree.node(closed).method;
                if *open_method != line.method {
                    warn!(
                        "Line {}: exit of {} closes open call {}",
                        line_number, line.method, open_method
                    );
                }
                self.check_depth(line_number, raw, self.stack.len(), line.depth)
            }
        }
    }

    fn check_depth(
        &self,
        line_number: usize,
        raw: &str,
        expected: usize,
        actual: usize,
    ) -> Result<(), ParseError> {
        if expected == actual {
            Ok(())
        } else {
            Err(ParseError::DepthMismatch {
                line_number,
                line: raw.to_string(),
                expected,
                actual,
            })
        }
    }

    /// Finish the build
    ///
    /// # Errors
    /// * `ParseError::TruncatedTrace` - activations left open at end of input
    pub fn finish(self) -> Result<CallTree, ParseError> {
        if let Some(&innermost) = self.stack.last() {
            return Err(ParseError::TruncatedTrace {
                open: self.stack.len(),
                innermost: self.tree.node(innermost).method.clone(),
            });
        }
        Ok(self.tree)
    }
}

/// Parse a full trace into a call tree
///
/// **Public** - main entry point for tree reconstruction
///
/// Blank lines are ignored. Empty input yields an empty tree.
///
/// # Errors
/// The first `MalformedTraceLine`, `DepthMismatch`, `UnbalancedExit` or
/// `TruncatedTrace` encountered.
pub fn parse_call_trace(text: &str) -> Result<CallTree, ParseError> {
    let mut builder = CallTreeBuilder::new();

    for (index, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        let line_number = index + 1;
        let line = parse_trace_line(raw, line_number)?;
        builder.push(line_number, raw.trim_end(), line)?;
    }

    let tree = builder.finish()?;
    debug!(
        "Built call tree: {} nodes, {} top-level calls",
        tree.len(),
        tree.roots().len()
    );
    Ok(tree)
}
