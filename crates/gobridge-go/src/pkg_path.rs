//! Import path resolution from the enclosing `go.mod`

use gobridge_model::{BridgeError, BridgeResult};
use log::debug;
use std::fs;
use std::path::{Component, Path};

/// Resolve the module name and the package import path of `path`.
///
/// `path` may be a Go file or a package directory. The nearest `go.mod` at or
/// above it supplies the module; the package path is the module joined with
/// the directory's location relative to the module root.
pub fn parse_pkg_path(path: &Path) -> BridgeResult<(String, String)> {
    let path = path
        .canonicalize()
        .map_err(|e| BridgeError::Io(path.to_path_buf(), e))?;
    let dir = if path.is_dir() {
        path.as_path()
    } else {
        path.parent().unwrap_or(path.as_path())
    };

    for root in dir.ancestors() {
        let go_mod = root.join("go.mod");
        if !go_mod.is_file() {
            continue;
        }

        let content = fs::read_to_string(&go_mod).map_err(|e| BridgeError::Io(go_mod.clone(), e))?;
        let module = module_name(&content).ok_or_else(|| BridgeError::ModuleDeclMissing(go_mod.clone()))?;

        let pkg_path = match dir.strip_prefix(root) {
            Ok(rel) if rel.as_os_str().is_empty() => module.clone(),
            Ok(rel) => {
                let segments: Vec<_> = rel
                    .components()
                    .filter_map(|c| match c {
                        Component::Normal(s) => Some(s.to_string_lossy()),
                        _ => None,
                    })
                    .collect();
                format!("{module}/{}", segments.join("/"))
            }
            Err(_) => module.clone(),
        };

        debug!("Resolved {} to package {pkg_path} (module {module})", dir.display());
        return Ok((module, pkg_path));
    }

    Err(BridgeError::GoModNotFound(dir.to_path_buf()))
}

/// The argument of the first `module` directive
fn module_name(go_mod: &str) -> Option<String> {
    go_mod.lines().find_map(|line| {
        line.trim()
            .strip_prefix("module ")
            .map(|rest| rest.trim().trim_matches('"').to_string())
            .filter(|name| !name.is_empty())
    })
}
