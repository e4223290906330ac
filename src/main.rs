//! Calltrace Studio CLI
//!
//! Rebuilds call trees from enter/exit traces and validates call edges
//! against captured stacks.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use calltrace_studio::commands::{
    display_schema, display_version, execute_compare_edges, execute_contexts,
    execute_filter_events, execute_tree, execute_validate_edges, show_report,
    validate_compare_args, validate_context_args, validate_edge_args, validate_filter_args,
    validate_tree_args, CompareEdgesArgs, ContextArgs, FilterEventsArgs, TreeArgs,
    ValidateEdgesArgs,
};
use calltrace_studio::flamegraph::FlamegraphConfig;
use calltrace_studio::utils::config::{
    default_library_prefixes, DEFAULT_FLAMEGRAPH_TITLE, LIBRARY_PREFIXES_ENV,
};

/// Calltrace Studio - call tree and call edge analysis for points-to traces
#[derive(Parser, Debug)]
#[command(name = "calltrace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Rebuild and print the call tree of an enter/exit trace
    Tree {
        /// Trace file
        #[arg(short, long)]
        trace: PathBuf,

        /// Show the subtree of the first call to this method
        #[arg(long)]
        find: Option<String>,

        /// Levels below the selected call to print
        #[arg(long)]
        max_depth: Option<usize>,

        /// Output path for SVG flamegraph (optional)
        #[arg(short, long)]
        flamegraph: Option<PathBuf>,

        /// Flamegraph title
        #[arg(long)]
        title: Option<String>,

        /// Flamegraph width in pixels
        #[arg(long, default_value = "1200")]
        width: usize,

        /// Print most frequent call paths
        #[arg(long)]
        summary: bool,
    },

    /// Print the stack contexts around a target method
    Contexts {
        /// Stack dump (blank-line-separated stacks)
        #[arg(short, long)]
        stacks: PathBuf,

        /// Substring identifying the target method
        #[arg(long)]
        target: String,
    },

    /// Keep only call edges witnessed by a captured stack
    ValidateEdges {
        /// Edge list, one "<callee> <caller>" per line
        #[arg(short, long)]
        edges: PathBuf,

        /// Stack dump (blank-line-separated stacks)
        #[arg(short, long)]
        stacks: PathBuf,

        /// Drop static-initializer edges
        #[arg(long)]
        exclude_synthetic: bool,

        /// Library namespace prefix; stacks containing such frames never witness an edge
        #[arg(
            long = "library-prefix",
            env = LIBRARY_PREFIXES_ENV,
            value_delimiter = ',',
            default_values_t = default_library_prefixes()
        )]
        library_prefixes: Vec<String>,

        /// Worker threads for validation
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Validate on the current thread only
        #[arg(long)]
        sequential: bool,

        /// Output path for JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare two edge lists
    CompareEdges {
        /// First edge list
        first: PathBuf,

        /// Second edge list
        second: PathBuf,

        /// Print edges of the second list missing from the first
        #[arg(long)]
        show_missing: bool,
    },

    /// Drop library and unknown frames from a heap-event dump
    FilterEvents {
        /// Event dump to filter
        #[arg(short, long)]
        input: PathBuf,

        /// Filtered output file
        #[arg(short, long)]
        output: PathBuf,

        /// Library namespace prefix to drop
        #[arg(
            long = "library-prefix",
            env = LIBRARY_PREFIXES_ENV,
            value_delimiter = ',',
            default_values_t = default_library_prefixes()
        )]
        library_prefixes: Vec<String>,
    },

    /// Summarize a saved JSON report
    Report {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display report schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Tree {
            trace,
            find,
            max_depth,
            flamegraph,
            title,
            width,
            summary,
        } => {
            let fg_config = flamegraph.as_ref().map(|_| {
                FlamegraphConfig::new()
                    .with_title(title.unwrap_or_else(|| DEFAULT_FLAMEGRAPH_TITLE.to_string()))
                    .with_width(width)
            });

            let args = TreeArgs {
                trace_file: trace,
                find,
                max_depth,
                output_svg: flamegraph,
                flamegraph_config: fg_config,
                print_summary: summary,
            };

            validate_tree_args(&args)?;
            execute_tree(args)?;
        }

        Commands::Contexts { stacks, target } => {
            let args = ContextArgs {
                stacks_file: stacks,
                target,
            };

            validate_context_args(&args)?;
            execute_contexts(args)?;
        }

        Commands::ValidateEdges {
            edges,
            stacks,
            exclude_synthetic,
            library_prefixes,
            jobs,
            sequential,
            output,
        } => {
            let args = ValidateEdgesArgs {
                edges_file: edges,
                stacks_file: stacks,
                exclude_synthetic,
                library_prefixes,
                jobs,
                sequential,
                output_json: output,
            };

            validate_edge_args(&args)?;
            execute_validate_edges(args)?;
        }

        Commands::CompareEdges {
            first,
            second,
            show_missing,
        } => {
            let args = CompareEdgesArgs {
                first_file: first,
                second_file: second,
                show_missing,
            };

            validate_compare_args(&args)?;
            execute_compare_edges(args)?;
        }

        Commands::FilterEvents {
            input,
            output,
            library_prefixes,
        } => {
            let args = FilterEventsArgs {
                input_file: input,
                output_file: output,
                library_prefixes,
            };

            validate_filter_args(&args)?;
            execute_filter_events(args)?;
        }

        Commands::Report { file } => {
            show_report(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
