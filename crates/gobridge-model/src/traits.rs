use crate::{config::BridgeConfig, errors::BridgeError, ir::SourceDecls, metrics::ParserMetrics};
use std::path::{Path, PathBuf};

/// Contract for loaders that turn Go source into [`SourceDecls`]
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to support parallel parsing.
///
/// # Example
/// ```rust,ignore
/// use gobridge_model::{BridgeConfig, DeclParser};
///
/// struct MyLoader {
///     config: BridgeConfig,
/// }
///
/// impl DeclParser for MyLoader {
///     fn language(&self) -> &str {
///         "go"
///     }
///
///     fn file_extensions(&self) -> &[&str] {
///         &[".go"]
///     }
///
///     // ... implement other required methods
/// }
/// ```
pub trait DeclParser: Send + Sync {
    /// Returns the language identifier
    fn language(&self) -> &str;

    /// Returns supported file extensions (e.g., [".go"])
    fn file_extensions(&self) -> &[&str];

    /// Parse a single file
    ///
    /// **Note on Metrics**: This method updates parser metrics
    /// (files_attempted, files_succeeded, etc.).
    ///
    /// # Errors
    /// Returns `BridgeError` if:
    /// - File cannot be read
    /// - File exceeds the configured size limit
    /// - Source code has syntax errors
    fn parse_file(&self, path: &Path) -> Result<SourceDecls, BridgeError>;

    /// Parse a source string
    ///
    /// **Note on Metrics**: This method does NOT update parser metrics.
    /// Only `parse_file()` does, so that files are not counted twice.
    fn parse_source(&self, source: &str, file_path: &Path) -> Result<SourceDecls, BridgeError>;

    /// Parse files in order and merge their declarations
    fn parse_files(&self, paths: &[PathBuf]) -> Result<SourceDecls, BridgeError> {
        let mut merged = SourceDecls::new(paths.first().cloned().unwrap_or_default());
        for path in paths {
            merged.merge(self.parse_file(path)?);
        }
        Ok(merged)
    }

    /// Discover the files of one Go package
    ///
    /// Go packages are single directories, so this does not recurse.
    /// Files excluded by the config are left out. The result is sorted.
    fn discover_files(&self, dir: &Path) -> Result<Vec<PathBuf>, BridgeError> {
        use std::fs;

        let mut files = Vec::new();

        for entry in fs::read_dir(dir).map_err(|e| BridgeError::Io(dir.to_path_buf(), e))? {
            let entry = entry.map_err(|e| BridgeError::Io(dir.to_path_buf(), e))?;
            let path = entry.path();

            if !path.is_file() || !self.can_parse(&path) {
                continue;
            }

            let ignored = path
                .file_name()
                .map(|name| self.config().is_ignored(&name.to_string_lossy()))
                .unwrap_or(true);
            if !ignored {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Check if this parser can handle the given file
    ///
    /// Default implementation checks file extension.
    fn can_parse(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension() {
            let ext_str = format!(".{}", ext.to_string_lossy());
            self.file_extensions().contains(&ext_str.as_str())
        } else {
            false
        }
    }

    /// Get parser configuration
    fn config(&self) -> &BridgeConfig;

    /// Get accumulated metrics
    fn metrics(&self) -> ParserMetrics;

    /// Reset metrics
    fn reset_metrics(&mut self);
}
