//! Contexts command implementation.

use super::models::ContextArgs;
use super::utils::{read_input, require_path};
use crate::aggregator::extract_contexts;
use crate::parser::parse_stack_blocks;
use anyhow::Result;
use log::info;

/// Execute the contexts command
///
/// Prints every distinct context of the target, separated by blank lines,
/// followed by the count.
pub fn execute_contexts(args: ContextArgs) -> Result<()> {
    info!("Reading stacks from {}", args.stacks_file.display());
    let text = read_input(&args.stacks_file)?;
    let corpus = parse_stack_blocks(&text);

    info!("Extracting contexts of {} from {} stacks", args.target, corpus.len());
    let contexts = extract_contexts(&corpus, &args.target);

    for context in &contexts {
        println!("{}\n", context);
    }
    println!("Contexts: {}", contexts.len());

    Ok(())
}

/// Validate contexts arguments
pub fn validate_context_args(args: &ContextArgs) -> Result<()> {
    require_path(&args.stacks_file, "Stacks")?;
    if args.target.trim().is_empty() {
        anyhow::bail!("Target method cannot be empty");
    }
    Ok(())
}
