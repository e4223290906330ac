use crate::output::read_report;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Read a whole input file into memory
pub fn read_input(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Reject an empty path argument
pub fn require_path(path: &Path, what: &str) -> Result<()> {
    if path.as_os_str().is_empty() {
        anyhow::bail!("{} path cannot be empty", what);
    }
    Ok(())
}

/// Print the summary of a saved validation report
pub fn show_report(file_path: PathBuf) -> Result<()> {
    println!("Reading report: {}", file_path.display());

    let report = read_report(&file_path)
        .with_context(|| format!("Failed to load report {}", file_path.display()))?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Edges file: {}", report.edges_file);
    println!("  Stacks file: {}", report.stacks_file);
    println!("  Candidate Edges: {}", report.total_edges);
    println!("  Stacks: {}", report.stack_count);
    println!("  Validated: {}", report.validated.len());
    println!("  Rejected: {}", report.rejected_count);
    println!("  Generated: {}", report.generated_at);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Calltrace Studio Edge Report Schema");
    println!("Current Version: {}", REPORT_SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  edges_file: string       - Candidate edge list");
        println!("  stacks_file: string      - Stack dump used as witnesses");
        println!("  total_edges: number      - Unique candidate edges");
        println!("  stack_count: number      - Stacks in the corpus");
        println!("  validated: array         - Edges with a witness");
        println!("    callee: string         - Callee signature");
        println!("    caller: string         - Caller signature");
        println!("    witness: number        - Index of the first witnessing stack");
        println!("  rejected_count: number   - Edges without a witness");
        println!("  generated_at: string     - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Calltrace Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Call-tree reconstruction and call-edge validation for points-to analysis traces.");
}
