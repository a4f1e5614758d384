//! Implementation of the DeclParser trait for Go

use gobridge_model::{
    build_package, BridgeConfig, BridgeError, DeclParser, Package, ParserMetrics, ProjectNaming,
    SourceDecls,
};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::extractor;
use crate::pkg_path::parse_pkg_path;

/// Go source loader implementing the DeclParser trait
pub struct GoSourceParser {
    config: BridgeConfig,
    metrics: Mutex<ParserMetrics>,
}

impl GoSourceParser {
    pub fn new() -> Self {
        Self::with_config(BridgeConfig::default())
    }

    pub fn with_config(config: BridgeConfig) -> Self {
        Self {
            config,
            metrics: Mutex::new(ParserMetrics::default()),
        }
    }

    fn lock_metrics(&self) -> MutexGuard<'_, ParserMetrics> {
        self.metrics.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update_metrics(&self, result: Option<&SourceDecls>, duration: Duration) {
        self.lock_metrics().record_file(result, duration);
    }

    fn parse_files_sequential(&self, paths: &[PathBuf]) -> Result<Vec<SourceDecls>, BridgeError> {
        paths.iter().map(|path| self.parse_file(path)).collect()
    }

    /// Parse files in parallel using rayon
    fn parse_files_parallel(&self, paths: &[PathBuf]) -> Result<Vec<SourceDecls>, BridgeError> {
        use rayon::prelude::*;

        // Configure thread pool if parallel_workers is specified
        let pool = if let Some(num_threads) = self.config.parallel_workers {
            rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()
                .map_err(|e| BridgeError::ThreadPool(e.to_string()))?
        } else {
            rayon::ThreadPoolBuilder::new()
                .build()
                .map_err(|e| BridgeError::ThreadPool(e.to_string()))?
        };

        // indexed collect keeps path order
        pool.install(|| paths.par_iter().map(|path| self.parse_file(path)).collect())
    }

    /// Load the Go package at `path` (a package directory or one Go file)
    /// and translate it into the bridge model.
    ///
    /// The project naming is derived from the module in the nearest `go.mod`.
    pub fn parse_package(&self, path: &Path, timestamp: Option<i64>) -> Result<Package, BridgeError> {
        info!("Loading Go package at {}", path.display());

        let files = if path.is_dir() {
            self.discover_files(path)?
        } else if path.is_file() {
            vec![path.to_path_buf()]
        } else {
            return Err(BridgeError::NoPackage(path.to_path_buf()));
        };

        if files.is_empty() {
            return Err(BridgeError::NoPackage(path.to_path_buf()));
        }

        let (module, pkg_path) = parse_pkg_path(path)?;
        let decls = self.parse_files(&files)?;
        debug!(
            "Package {} ({}): {} files, {} declarations",
            pkg_path,
            decls.package_name.as_deref().unwrap_or("?"),
            files.len(),
            decls.entity_count()
        );

        let mut naming = ProjectNaming::new(&module);
        naming.timestamp = timestamp;

        build_package(naming, module, pkg_path, &decls)
    }
}

impl Default for GoSourceParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclParser for GoSourceParser {
    fn language(&self) -> &str {
        "go"
    }

    fn file_extensions(&self) -> &[&str] {
        &[".go"]
    }

    fn parse_file(&self, path: &Path) -> Result<SourceDecls, BridgeError> {
        let start = Instant::now();
        let metadata = fs::metadata(path).map_err(|e| BridgeError::Io(path.to_path_buf(), e))?;

        if metadata.len() as usize > self.config.max_file_size {
            self.update_metrics(None, start.elapsed());
            return Err(BridgeError::FileTooLarge(
                path.to_path_buf(),
                metadata.len() as usize,
            ));
        }

        let source = fs::read_to_string(path).map_err(|e| BridgeError::Io(path.to_path_buf(), e))?;
        let result = self.parse_source(&source, path);

        debug!("Parsed {} in {:?}", path.display(), start.elapsed());
        self.update_metrics(result.as_ref().ok(), start.elapsed());

        result
    }

    fn parse_source(&self, source: &str, file_path: &Path) -> Result<SourceDecls, BridgeError> {
        extractor::extract(source, file_path)
    }

    fn parse_files(&self, paths: &[PathBuf]) -> Result<SourceDecls, BridgeError> {
        let per_file = if self.config.parallel && paths.len() > 1 {
            self.parse_files_parallel(paths)?
        } else {
            self.parse_files_sequential(paths)?
        };

        let mut merged = SourceDecls::new(paths.first().cloned().unwrap_or_default());
        for decls in per_file {
            merged.merge(decls);
        }
        Ok(merged)
    }

    fn config(&self) -> &BridgeConfig {
        &self.config
    }

    fn metrics(&self) -> ParserMetrics {
        self.lock_metrics().clone()
    }

    fn reset_metrics(&mut self) {
        *self.lock_metrics() = ParserMetrics::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_language() {
        let parser = GoSourceParser::new();
        assert_eq!(parser.language(), "go");
    }

    #[test]
    fn test_file_extensions() {
        let parser = GoSourceParser::new();
        assert_eq!(parser.file_extensions(), &[".go"]);
    }

    #[test]
    fn test_can_parse() {
        let parser = GoSourceParser::new();
        assert!(parser.can_parse(Path::new("main.go")));
        assert!(!parser.can_parse(Path::new("main.rs")));
    }

    #[test]
    fn test_file_too_large() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big.go");
        fs::write(&path, "package big\n// padding padding padding\n").unwrap();

        let parser = GoSourceParser::with_config(BridgeConfig::default().with_max_file_size(8));
        assert!(matches!(
            parser.parse_file(&path),
            Err(BridgeError::FileTooLarge(_, _))
        ));
        assert_eq!(parser.metrics().files_failed, 1);
    }

    #[test]
    fn test_metrics_track_declarations() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("api.go");
        fs::write(
            &path,
            "package api\n\ntype A struct { X int }\n\nfunc F() {}\nfunc G() {}\n",
        )
        .unwrap();

        let mut parser = GoSourceParser::new();
        parser.parse_file(&path).unwrap();

        let metrics = parser.metrics();
        assert_eq!(metrics.files_succeeded, 1);
        assert_eq!(metrics.total_type_specs, 1);
        assert_eq!(metrics.total_func_decls, 2);
        assert_eq!(metrics.success_rate(), 1.0);

        parser.reset_metrics();
        assert_eq!(parser.metrics().files_attempted, 0);
    }

    #[test]
    fn test_missing_package_path() {
        let parser = GoSourceParser::new();
        assert!(matches!(
            parser.parse_package(Path::new("/no/such/package"), None),
            Err(BridgeError::NoPackage(_))
        ));
    }
}
