use crate::flamegraph::FlamegraphConfig;
use crate::utils::config::default_library_prefixes;
use std::path::PathBuf;

/// Arguments for the tree command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct TreeArgs {
    /// Enter/exit trace to reconstruct
    pub trace_file: PathBuf,

    /// Method whose subtree should be shown (whole tree if None)
    pub find: Option<String>,

    /// Levels below the selected node to print
    pub max_depth: Option<usize>,

    /// Output path for SVG flamegraph (optional)
    pub output_svg: Option<PathBuf>,

    /// Flamegraph configuration
    pub flamegraph_config: Option<FlamegraphConfig>,

    /// Print most frequent call paths
    pub print_summary: bool,
}

/// Arguments for the contexts command
#[derive(Debug, Clone, Default)]
pub struct ContextArgs {
    pub stacks_file: PathBuf,

    /// Substring identifying the target method
    pub target: String,
}

/// Arguments for the validate-edges command
#[derive(Debug, Clone)]
pub struct ValidateEdgesArgs {
    pub edges_file: PathBuf,
    pub stacks_file: PathBuf,

    /// Drop static-initializer edges before validating
    pub exclude_synthetic: bool,

    /// Namespaces whose frames disqualify a stack
    pub library_prefixes: Vec<String>,

    /// Worker threads (rayon default if None)
    pub jobs: Option<usize>,

    /// Disable parallel validation
    pub sequential: bool,

    /// Output path for JSON report (optional)
    pub output_json: Option<PathBuf>,
}

impl Default for ValidateEdgesArgs {
    fn default() -> Self {
        Self {
            edges_file: PathBuf::new(),
            stacks_file: PathBuf::new(),
            exclude_synthetic: false,
            library_prefixes: default_library_prefixes(),
            jobs: None,
            sequential: false,
            output_json: None,
        }
    }
}

/// Arguments for the compare-edges command
#[derive(Debug, Clone, Default)]
pub struct CompareEdgesArgs {
    pub first_file: PathBuf,
    pub second_file: PathBuf,

    /// Print edges of the second list missing from the first
    pub show_missing: bool,
}

/// Arguments for the filter-events command
#[derive(Debug, Clone)]
pub struct FilterEventsArgs {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub library_prefixes: Vec<String>,
}

impl Default for FilterEventsArgs {
    fn default() -> Self {
        Self {
            input_file: PathBuf::new(),
            output_file: PathBuf::new(),
            library_prefixes: default_library_prefixes(),
        }
    }
}
