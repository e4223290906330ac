//! SVG flamegraph generation for call trees.
//!
//! Collapsed stacks from the call tree are handed to inferno; the width of
//! each frame is the number of activations below it.

use crate::aggregator::stack_builder::CollapsedStack;
use crate::utils::config::{DEFAULT_FLAMEGRAPH_TITLE, DEFAULT_FLAMEGRAPH_WIDTH};
use crate::utils::error::FlamegraphError;
use inferno::flamegraph::{self, Options};
use log::info;

/// Flamegraph configuration
#[derive(Debug, Clone)]
pub struct FlamegraphConfig {
    pub title: String,
    pub width: usize,
}

impl Default for FlamegraphConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_FLAMEGRAPH_TITLE.to_string(),
            width: DEFAULT_FLAMEGRAPH_WIDTH,
        }
    }
}

impl FlamegraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

/// Generate SVG flamegraph from collapsed stacks
///
/// **Public** - main entry point for flamegraph rendering
///
/// # Errors
/// * `FlamegraphError::EmptyStacks` - nothing to render
/// * `FlamegraphError::RenderFailed` - inferno failed to render the SVG
pub fn generate_flamegraph(
    stacks: &[CollapsedStack],
    config: Option<&FlamegraphConfig>,
) -> Result<String, FlamegraphError> {
    if stacks.is_empty() {
        return Err(FlamegraphError::EmptyStacks);
    }

    let config = config.cloned().unwrap_or_default();
    info!("Generating flamegraph with {} stacks", stacks.len());

    let mut options = Options::default();
    options.title = config.title;
    options.count_name = "calls".to_string();
    options.image_width = Some(config.width);

    let lines: Vec<String> = stacks.iter().map(CollapsedStack::to_line).collect();
    let mut svg = Vec::new();
    flamegraph::from_lines(&mut options, lines.iter().map(String::as_str), &mut svg)
        .map_err(|e| FlamegraphError::RenderFailed(e.to_string()))?;

    let svg = String::from_utf8_lossy(&svg).into_owned();
    info!("Flamegraph generated successfully ({} bytes)", svg.len());
    Ok(svg)
}

/// Text summary of the most frequent call paths
pub fn generate_text_summary(stacks: &[CollapsedStack], max_lines: usize) -> String {
    let total: u64 = stacks.iter().map(|s| s.weight).sum::<u64>().max(1);
    let mut lines = Vec::new();

    lines.push(format!("  {:<60} {:>10} {:>7}", "Call Path (Most Frequent First)", "CALLS", "%"));
    lines.push(format!("  {}", "-".repeat(79)));

    for stack in stacks.iter().take(max_lines) {
        let percentage = (stack.weight as f64 / total as f64) * 100.0;

        // Keep the innermost frames when the path is too long
        let display_stack = if stack.stack.chars().count() > 60 {
            let tail: String = stack
                .stack
                .chars()
                .rev()
                .take(57)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("...{}", tail)
        } else {
            stack.stack.clone()
        };

        lines.push(format!(
            "  {:<60} {:>10} {:>6.1}%",
            display_stack, stack.weight, percentage
        ));
    }

    if stacks.len() > max_lines {
        lines.push(String::new());
        lines.push(format!(
            "   (Showing top {} of {} unique paths)",
            max_lines,
            stacks.len()
        ));
    }

    lines.join("\n")
}
