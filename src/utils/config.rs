//! Configuration and constants for the CLI.

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

// Namespaces whose frames disqualify a stack from witnessing an edge
pub const DEFAULT_LIBRARY_PREFIXES: &[&str] = &["java.", "jdk.", "sun."];

/// Substring identifying static-initializer edges
pub const SYNTHETIC_MARKER: &str = "clinit";

/// Method placeholder emitted by the heap-event dumper for unknown frames
pub const NULL_METHOD: &str = "NULL";

/// Separator between frames of an extracted stack context
pub const CONTEXT_SEPARATOR: &str = "\n";

/// Upper bound for `--jobs`
pub const MAX_JOBS: usize = 1024;

pub const DEFAULT_FLAMEGRAPH_WIDTH: usize = 1200;
pub const DEFAULT_FLAMEGRAPH_TITLE: &str = "Call Tree";

/// Environment variable that may carry comma-separated library prefixes
pub const LIBRARY_PREFIXES_ENV: &str = "CALLTRACE_LIBRARY_PREFIXES";

/// Owned copy of [`DEFAULT_LIBRARY_PREFIXES`]
pub fn default_library_prefixes() -> Vec<String> {
    DEFAULT_LIBRARY_PREFIXES
        .iter()
        .map(|p| p.to_string())
        .collect()
}
