//! Filter-events command implementation.

use super::models::FilterEventsArgs;
use super::utils::{read_input, require_path};
use crate::output::write_lines;
use crate::validate::filter_event_lines;
use anyhow::{Context, Result};
use log::info;

/// Execute the filter-events command
pub fn execute_filter_events(args: FilterEventsArgs) -> Result<()> {
    let text = read_input(&args.input_file)?;
    let filtered = filter_event_lines(&text, &args.library_prefixes)
        .with_context(|| format!("Failed to filter {}", args.input_file.display()))?;

    let kept = write_lines(filtered.lines(), &args.output_file)
        .context("Failed to write filtered events")?;

    info!(
        "✓ Kept {} of {} lines, written to: {}",
        kept,
        text.lines().count(),
        args.output_file.display()
    );
    Ok(())
}

/// Validate filter-events arguments
pub fn validate_filter_args(args: &FilterEventsArgs) -> Result<()> {
    require_path(&args.input_file, "Input")?;
    require_path(&args.output_file, "Output")?;
    if args.input_file == args.output_file {
        anyhow::bail!("Input and output must be different files");
    }
    Ok(())
}
