//! Build collapsed stack format from a reconstructed call tree.
//!
//! Collapsed stacks are the input format for flamegraph generation.
//! Format: "parent;child;grandchild weight"
//!
//! Example: "Harness.main;Search.run;TermBuffer.set 3"
//! This means: the path main -> run -> set was entered 3 times.

use super::call_tree::{CallTree, NodeId};
use log::debug;
use std::collections::HashMap;

/// A single collapsed stack entry
///
/// **Public** - used by flamegraph generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapsedStack {
    /// Stack trace as semicolon-separated string
    pub stack: String,

    /// Weight (number of activations ending at this path)
    pub weight: u64,
}

impl CollapsedStack {
    pub fn new(stack: String, weight: u64) -> Self {
        Self { stack, weight }
    }

    /// Format as the standard collapsed stack line
    ///
    /// **Public** - used when passing to inferno
    pub fn to_line(&self) -> String {
        format!("{} {}", self.stack, self.weight)
    }

    /// Innermost frame of the path
    pub fn leaf(&self) -> &str {
        self.stack.rsplit(';').next().unwrap_or(&self.stack)
    }
}

/// Build collapsed stacks from a call tree
///
/// **Public** - main entry point for stack building
///
/// # Algorithm
/// 1. Walk every root in pre-order, carrying the path from the root
/// 2. Each activation adds weight 1 to its own path
/// 3. Aggregate by unique path (sum weights)
/// 4. Sort by weight (descending), then path
pub fn build_collapsed_stacks(tree: &CallTree) -> Vec<CollapsedStack> {
    debug!("Building collapsed stacks from {} call nodes", tree.len());
    collapse(tree, tree.roots())
}

/// Collapsed stacks of the subtree rooted at `start`
///
/// Paths begin at `start`, not at the tree root.
pub fn build_subtree_stacks(tree: &CallTree, start: NodeId) -> Vec<CollapsedStack> {
    collapse(tree, &[start])
}

fn collapse(tree: &CallTree, starts: &[NodeId]) -> Vec<CollapsedStack> {
    let mut stack_map: HashMap<String, u64> = HashMap::new();
    let mut pending: Vec<(NodeId, String)> = starts
        .iter()
        .rev()
        .map(|&start| (start, frame_label(&tree.node(start).method)))
        .collect();

    while let Some((id, path)) = pending.pop() {
        for &child in tree.node(id).children.iter().rev() {
            let child_path = format!("{};{}", path, frame_label(&tree.node(child).method));
            pending.push((child, child_path));
        }
        *stack_map.entry(path).or_insert(0) += 1;
    }

    let mut stacks: Vec<CollapsedStack> = stack_map
        .into_iter()
        .map(|(stack, weight)| CollapsedStack::new(stack, weight))
        .collect();

    stacks.sort_by(|a, b| b.weight.cmp(&a.weight).then_with(|| a.stack.cmp(&b.stack)));

    debug!("Built {} unique collapsed stacks", stacks.len());

    stacks
}

/// Make a method name safe to use as a single collapsed-stack frame
fn frame_label(method: &str) -> String {
    method.replace(';', ",").replace(' ', "_")
}
