//! # gobridge-go
//!
//! Go source loader for gobridge: parses a Go package with tree-sitter and
//! translates its exported surface into the bridge model.
//!
//! ## Features
//!
//! - Parse Go source files and whole package directories
//! - Resolve the package import path from the enclosing `go.mod`
//! - Keep exported symbol names stable through the `.timestamp` sidecar
//! - Write the renderer-facing model as JSON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gobridge_go::{BridgeConfig, GoSourceParser};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let parser = GoSourceParser::with_config(BridgeConfig::ffi());
//!
//! let package = parser.parse_package(Path::new("src/api"), None)?;
//! println!("Parsed {} functions", package.funcs.len());
//! # Ok(())
//! # }
//! ```

mod extractor;
mod parser_impl;
pub mod pkg_path;
pub mod timestamp;
mod visitor;

use gobridge_model::{BridgeModel, BridgeResult, Package};
use log::info;
use std::fs;
use std::path::Path;

// Re-export model types for convenience
pub use gobridge_model::{
    BridgeConfig, BridgeError, DeclParser, ParserMetrics, ProjectNaming, SourceDecls,
};

// Export the Go loader implementation
pub use parser_impl::GoSourceParser;

/// Parse the package at `path`, collect its wrapper types and write the
/// bridge model as pretty JSON to `out`.
///
/// The export timestamp is read from (or created in) the package directory.
pub fn generate_model(path: &Path, out: &Path, config: BridgeConfig) -> BridgeResult<Package> {
    let package_dir = if path.is_dir() {
        path
    } else {
        path.parent().unwrap_or(Path::new("."))
    };
    let timestamp = timestamp::load_or_persist(package_dir, &config.timestamp_file)?;

    let parser = GoSourceParser::with_config(config);
    let package = parser.parse_package(path, Some(timestamp))?;

    let json = BridgeModel::new(&package).to_json_pretty()?;
    fs::write(out, json).map_err(|e| BridgeError::Io(out.to_path_buf(), e))?;

    info!(
        "Wrote bridge model for {} to {} ({})",
        package.pkg_path,
        out.display(),
        parser.metrics()
    );

    Ok(package)
}
