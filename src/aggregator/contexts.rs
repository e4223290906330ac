//! Call-stack context around a target method.
//!
//! For every captured stack that mentions the target, the frames are read
//! from the end of the block backwards and collected up to and including
//! the first frame that mentions it.

use crate::parser::stack_blocks::{CallStack, StackCorpus};
use crate::utils::config::CONTEXT_SEPARATOR;
use log::debug;
use std::collections::BTreeSet;

/// Extract the deduplicated contexts of `target` across a corpus
///
/// **Public** - main entry point for context extraction
///
/// Matching is by substring. Each context joins its frames with
/// [`CONTEXT_SEPARATOR`], starting from the last frame of the block.
pub fn extract_contexts(corpus: &StackCorpus, target: &str) -> BTreeSet<String> {
    let contexts: BTreeSet<String> = corpus
        .iter()
        .filter_map(|stack| stack_context(stack, target))
        .collect();

    debug!(
        "Found {} distinct contexts for {} in {} stacks",
        contexts.len(),
        target,
        corpus.len()
    );
    contexts
}

/// Context of `target` within one stack, `None` if the stack never mentions it
pub fn stack_context(stack: &CallStack, target: &str) -> Option<String> {
    let frames = stack.frames();
    let hit = frames.iter().rposition(|f| f.contains(target))?;

    let context: Vec<&str> = frames[hit..].iter().rev().map(String::as_str).collect();
    Some(context.join(CONTEXT_SEPARATOR))
}
