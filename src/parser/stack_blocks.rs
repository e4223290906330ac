//! Parser for blank-line-delimited stack dumps.
//!
//! Each block of non-blank lines is one captured call stack, one frame per
//! line, kept in file order (treated as root-first). Frames may carry a
//! `(...)` call-site suffix which is stripped only at comparison time.

use log::debug;

/// One captured call stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallStack {
    frames: Vec<String>,
}

impl CallStack {
    pub fn new(frames: Vec<String>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Ordered, immutable collection of captured stacks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackCorpus {
    stacks: Vec<CallStack>,
}

impl StackCorpus {
    pub fn new(stacks: Vec<CallStack>) -> Self {
        Self { stacks }
    }

    pub fn stacks(&self) -> &[CallStack] {
        &self.stacks
    }

    pub fn get(&self, index: usize) -> Option<&CallStack> {
        self.stacks.get(index)
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CallStack> {
        self.stacks.iter()
    }

    /// Total number of frames across all stacks
    pub fn frame_count(&self) -> usize {
        self.stacks.iter().map(CallStack::len).sum()
    }
}

impl<'a> IntoIterator for &'a StackCorpus {
    type Item = &'a CallStack;
    type IntoIter = std::slice::Iter<'a, CallStack>;

    fn into_iter(self) -> Self::IntoIter {
        self.stacks.iter()
    }
}

/// Split a stack dump into a corpus of call stacks
///
/// **Public** - main entry point for stack parsing
///
/// Runs of blank lines separate blocks and never produce empty stacks.
/// A final block with no trailing blank line is still kept.
pub fn parse_stack_blocks(text: &str) -> StackCorpus {
    let (mut stacks, pending) = text.lines().fold(
        (Vec::new(), Vec::new()),
        |(mut stacks, mut current): (Vec<CallStack>, Vec<String>), line| {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    stacks.push(CallStack::new(std::mem::take(&mut current)));
                }
            } else {
                current.push(line.trim_end().to_string());
            }
            (stacks, current)
        },
    );

    if !pending.is_empty() {
        stacks.push(CallStack::new(pending));
    }

    let corpus = StackCorpus::new(stacks);
    debug!(
        "Parsed {} stacks ({} frames)",
        corpus.len(),
        corpus.frame_count()
    );
    corpus
}

/// Strip call-site decoration from a frame
///
/// Returns the frame up to its first `(`, trimmed. Frames without a `(`
/// are returned whole.
pub fn bare_signature(frame: &str) -> &str {
    match frame.find('(') {
        Some(paren) => frame[..paren].trim(),
        None => frame.trim(),
    }
}
