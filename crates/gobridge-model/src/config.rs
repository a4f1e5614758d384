use serde::{Deserialize, Serialize};

/// Sidecar holding the export-symbol timestamp
pub const DEFAULT_TIMESTAMP_FILE: &str = ".timestamp";

/// Generated Go glue written next to the package on previous runs
pub const FFI_EXPORT_FILE: &str = "ffi.export.go";

/// Configuration for loading a Go package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// File names never loaded (matched against the bare file name)
    pub ignore_files: Vec<String>,

    /// Skip `_test.go` files
    pub skip_tests: bool,

    /// Maximum file size to parse (in bytes)
    /// Larger files fail the load
    pub max_file_size: usize,

    /// Parse the package's files in parallel
    pub parallel: bool,

    /// Number of parallel workers (None = rayon default)
    pub parallel_workers: Option<usize>,

    /// Name of the timestamp sidecar in the package directory
    pub timestamp_file: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            ignore_files: Vec::new(),
            skip_tests: true,
            max_file_size: 10 * 1024 * 1024, // 10 MB
            parallel: false,
            parallel_workers: None,
            timestamp_file: DEFAULT_TIMESTAMP_FILE.to_string(),
        }
    }
}

impl BridgeConfig {
    /// Config for regenerating FFI bindings: ignores previously generated glue
    pub fn ffi() -> Self {
        Self {
            ignore_files: vec![FFI_EXPORT_FILE.to_string()],
            ..Default::default()
        }
    }

    /// Enable parallel parsing
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_parallel_workers(mut self, workers: usize) -> Self {
        self.parallel_workers = Some(workers);
        self
    }

    /// Set maximum file size
    pub fn with_max_file_size(mut self, size: usize) -> Self {
        self.max_file_size = size;
        self
    }

    pub fn with_ignored_file(mut self, name: impl Into<String>) -> Self {
        self.ignore_files.push(name.into());
        self
    }

    pub fn with_timestamp_file(mut self, name: impl Into<String>) -> Self {
        self.timestamp_file = name.into();
        self
    }

    /// Whether a file with this bare name is excluded from loading
    pub fn is_ignored(&self, file_name: &str) -> bool {
        (self.skip_tests && file_name.ends_with("_test.go"))
            || self.ignore_files.iter().any(|ignored| ignored == file_name)
    }
}
