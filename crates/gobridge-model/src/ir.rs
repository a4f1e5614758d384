use crate::ast::{FuncDecl, TypeSpec};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Declarations extracted from Go source
///
/// This is the bridge between a loader's syntax tree and the
/// [`SourceModelBuilder`](crate::builder::SourceModelBuilder). Loaders fill one
/// per file, then merge the files of a package before building.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDecls {
    /// Source file path (the first file for merged declarations)
    pub file_path: PathBuf,

    /// Name from the `package` clause
    pub package_name: Option<String>,

    /// Type declarations in source order
    pub type_specs: Vec<TypeSpec>,

    /// Function and method declarations in source order
    pub func_decls: Vec<FuncDecl>,
}

impl SourceDecls {
    /// Create an empty declaration list
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            ..Default::default()
        }
    }

    /// Total number of declarations
    pub fn entity_count(&self) -> usize {
        self.type_specs.len() + self.func_decls.len()
    }

    pub fn set_package_name(&mut self, name: impl Into<String>) {
        self.package_name = Some(name.into());
    }

    pub fn add_type_spec(&mut self, spec: TypeSpec) {
        self.type_specs.push(spec);
    }

    pub fn add_func_decl(&mut self, decl: FuncDecl) {
        self.func_decls.push(decl);
    }

    /// Append another file's declarations, keeping the first package name seen
    pub fn merge(&mut self, other: SourceDecls) {
        if self.package_name.is_none() {
            self.package_name = other.package_name;
        }
        self.type_specs.extend(other.type_specs);
        self.func_decls.extend(other.func_decls);
    }
}
