//! Tree command implementation.
//!
//! The tree command:
//! 1. Reads the enter/exit trace
//! 2. Rebuilds the call tree
//! 3. Selects the requested subtree, or every top-level call
//! 4. Prints it, optionally with a flamegraph and path summary

use super::models::TreeArgs;
use super::utils::{read_input, require_path};
use crate::aggregator::{
    build_collapsed_stacks, build_subtree_stacks, parse_call_trace, CallTree, NodeId,
};
use crate::flamegraph::{generate_flamegraph, generate_text_summary};
use crate::output::write_svg;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the tree command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Trace read or parse failures (malformed line, depth mismatch, truncation)
/// * Flamegraph or SVG write failures
pub fn execute_tree(args: TreeArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Step 1/3: Rebuilding call tree from {}", args.trace_file.display());
    let text = read_input(&args.trace_file)?;
    let tree = parse_call_trace(&text)
        .with_context(|| format!("Failed to parse trace {}", args.trace_file.display()))?;

    debug!(
        "Call tree: {} nodes, max depth {:?}",
        tree.len(),
        tree.max_depth()
    );

    info!("Step 2/3: Selecting subtree...");
    let selected = select_nodes(&tree, args.find.as_deref());
    if selected.is_empty() {
        match &args.find {
            Some(method) => println!("No call to {} found in trace", method),
            None => println!("Trace contains no calls"),
        }
        return Ok(());
    }

    if args.find.is_some() {
        println!("Path: {}", tree.path_to(selected[0]).join(" -> "));
    }
    print!("{}", render_selection(&tree, &selected, args.max_depth));

    info!("Step 3/3: Writing outputs...");
    let stacks = if args.find.is_some() {
        build_subtree_stacks(&tree, selected[0])
    } else {
        build_collapsed_stacks(&tree)
    };

    if let Some(svg_path) = &args.output_svg {
        let svg = generate_flamegraph(&stacks, args.flamegraph_config.as_ref())
            .context("Failed to generate flamegraph")?;
        write_svg(&svg, svg_path).context("Failed to write flamegraph SVG")?;
        info!("✓ Flamegraph written to: {}", svg_path.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("CALL TREE SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Calls in trace: {}", tree.len());
        println!("Top-level:      {}", tree.roots().len());
        println!("Selected Roots: {}", selected.len());
        println!("Unique Paths:   {}", stacks.len());
        println!("\n{}", generate_text_summary(&stacks, 10));
        println!("{}", "=".repeat(80));
    }

    info!(
        "Tree completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Roots of the requested output: the first match in pre-order, or every
/// top-level call when no method is given
fn select_nodes(tree: &CallTree, find: Option<&str>) -> Vec<NodeId> {
    match find {
        Some(method) => tree.find(method).into_iter().collect(),
        None => tree.roots().to_vec(),
    }
}

fn render_selection(tree: &CallTree, selected: &[NodeId], max_depth: Option<usize>) -> String {
    selected
        .iter()
        .map(|&id| tree.render_subtree(id, max_depth))
        .collect()
}

/// Validate tree arguments
///
/// **Public** - can be called before execute_tree for early validation
pub fn validate_tree_args(args: &TreeArgs) -> Result<()> {
    require_path(&args.trace_file, "Trace")?;

    if args.find.as_deref().is_some_and(|m| m.trim().is_empty()) {
        anyhow::bail!("Method to find cannot be empty");
    }

    if let Some(config) = &args.flamegraph_config {
        if config.width == 0 {
            anyhow::bail!("Flamegraph width must be greater than 0");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_select_nodes() {
        let tree = parse_call_trace(">[0]a\n>[1]b\n<[1]b\n<[0]a\n").unwrap();
        assert_eq!(select_nodes(&tree, None), tree.roots().to_vec());
        assert_eq!(tree.node(select_nodes(&tree, Some("b"))[0]).method, "b");
        assert!(select_nodes(&tree, Some("c")).is_empty());
    }

    #[test]
    fn test_every_top_level_call_rendered() {
        let tree = parse_call_trace(
            ">[0]a.Warmup.run\n<[0]a.Warmup.run\n>[0]a.Main.main\n>[1]a.Work.go\n<[1]a.Work.go\n<[0]a.Main.main\n",
        )
        .unwrap();
        let selected = select_nodes(&tree, None);

        assert_eq!(selected.len(), 2);
        assert_eq!(
            render_selection(&tree, &selected, None),
            "a.Warmup.run\na.Main.main\n  a.Work.go\n"
        );
    }

    #[test]
    fn test_validate_tree_args() {
        let args = TreeArgs {
            trace_file: PathBuf::from("trace.log"),
            ..Default::default()
        };
        assert!(validate_tree_args(&args).is_ok());

        let empty = TreeArgs::default();
        assert!(validate_tree_args(&empty).is_err());

        let blank_find = TreeArgs {
            trace_file: PathBuf::from("trace.log"),
            find: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(validate_tree_args(&blank_find).is_err());
    }
}
