//! Edge validation and comparison commands.
//!
//! The validate-edges command:
//! 1. Reads and deduplicates the candidate edges
//! 2. Parses the stack dump into a corpus
//! 3. Validates every edge against the corpus
//! 4. Prints the validated edges and writes the optional JSON report

use super::models::{CompareEdgesArgs, ValidateEdgesArgs};
use super::utils::{read_input, require_path};
use crate::output::write_report;
use crate::parser::schema::{EdgeReport, ValidatedEdge};
use crate::parser::{parse_edges, parse_stack_blocks};
use crate::utils::config::{MAX_JOBS, REPORT_SCHEMA_VERSION};
use crate::validate::{compare_edge_sets, validate_edges, EdgeValidation, ValidatorConfig};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the validate-edges command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input read failures
/// * `MalformedEdgeTuple` in the edge list
/// * Thread pool or report write failures
pub fn execute_validate_edges(args: ValidateEdgesArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Step 1/4: Reading edges from {}", args.edges_file.display());
    let edges = parse_edges(&read_input(&args.edges_file)?, args.exclude_synthetic)
        .with_context(|| format!("Failed to parse edges {}", args.edges_file.display()))?;

    info!("Step 2/4: Reading stacks from {}", args.stacks_file.display());
    let corpus = parse_stack_blocks(&read_input(&args.stacks_file)?);

    info!(
        "Step 3/4: Validating {} edges against {} stacks...",
        edges.len(),
        corpus.len()
    );
    let config = ValidatorConfig::new()
        .with_library_prefixes(args.library_prefixes.clone())
        .with_parallel(!args.sequential);

    let validation = match args.jobs {
        Some(jobs) if config.parallel => {
            debug!("Using a local pool of {} workers", jobs);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build()
                .context("Failed to build validation thread pool")?;
            pool.install(|| validate_edges(&edges, &corpus, &config))
        }
        _ => validate_edges(&edges, &corpus, &config),
    };

    info!("Step 4/4: Writing results...");
    for edge in validation.validated.keys() {
        println!("{}", edge);
    }
    println!("New Edges {}", validation.validated_count());

    if let Some(path) = &args.output_json {
        let report = build_report(&args, edges.len(), corpus.len(), &validation);
        write_report(&report, path).context("Failed to write edge report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    info!(
        "Validation completed in {:.2}s ({} validated, {} rejected)",
        start_time.elapsed().as_secs_f64(),
        validation.validated_count(),
        validation.rejected_count()
    );
    Ok(())
}

/// Assemble the JSON report for a finished validation
pub fn build_report(
    args: &ValidateEdgesArgs,
    total_edges: usize,
    stack_count: usize,
    validation: &EdgeValidation,
) -> EdgeReport {
    use chrono::Utc;

    EdgeReport {
        version: REPORT_SCHEMA_VERSION.to_string(),
        edges_file: args.edges_file.display().to_string(),
        stacks_file: args.stacks_file.display().to_string(),
        total_edges,
        stack_count,
        validated: validation
            .validated
            .iter()
            .map(|(edge, &witness)| ValidatedEdge {
                callee: edge.callee.clone(),
                caller: edge.caller.clone(),
                witness,
            })
            .collect(),
        rejected_count: validation.rejected_count(),
        generated_at: Utc::now().to_rfc3339(),
    }
}

/// Validate validate-edges arguments
///
/// **Public** - can be called before execute_validate_edges for early validation
pub fn validate_edge_args(args: &ValidateEdgesArgs) -> Result<()> {
    require_path(&args.edges_file, "Edges")?;
    require_path(&args.stacks_file, "Stacks")?;

    if args.library_prefixes.iter().any(|p| p.trim().is_empty()) {
        anyhow::bail!("Library prefixes cannot be empty");
    }

    if let Some(jobs) = args.jobs {
        if jobs == 0 {
            anyhow::bail!("jobs must be greater than 0");
        }
        if jobs > MAX_JOBS {
            anyhow::bail!("jobs is too large (max {})", MAX_JOBS);
        }
    }

    Ok(())
}

/// Execute the compare-edges command
pub fn execute_compare_edges(args: CompareEdgesArgs) -> Result<()> {
    let first = parse_edges(&read_input(&args.first_file)?, false)
        .with_context(|| format!("Failed to parse edges {}", args.first_file.display()))?;
    let second = parse_edges(&read_input(&args.second_file)?, false)
        .with_context(|| format!("Failed to parse edges {}", args.second_file.display()))?;

    let comparison = compare_edge_sets(&first, &second);

    if args.show_missing {
        for edge in &comparison.second_in_first.missing {
            println!("{}", edge);
        }
    }
    println!("{}", comparison.summary());

    Ok(())
}

/// Validate compare-edges arguments
pub fn validate_compare_args(args: &CompareEdgesArgs) -> Result<()> {
    require_path(&args.first_file, "First edges")?;
    require_path(&args.second_file, "Second edges")?;
    Ok(())
}
