use crate::project::ProjectNaming;
use crate::types::{FuncType, StructType};
use serde::Serialize;

/// The translated public surface of one Go package
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Package {
    pub naming: ProjectNaming,

    /// Module path from go.mod
    pub module: String,

    /// Import path of the package
    pub pkg_path: String,

    pub structs: Vec<StructType>,
    pub funcs: Vec<FuncType>,
}

impl Package {
    pub fn new(naming: ProjectNaming, module: impl Into<String>, pkg_path: impl Into<String>) -> Self {
        Self {
            naming,
            module: module.into(),
            pkg_path: pkg_path.into(),
            structs: Vec::new(),
            funcs: Vec::new(),
        }
    }

    pub fn with_structs(mut self, structs: Vec<StructType>) -> Self {
        self.structs = structs;
        self
    }

    pub fn with_funcs(mut self, funcs: Vec<FuncType>) -> Self {
        self.funcs = funcs;
        self
    }

    pub fn find_struct(&self, name: &str) -> Option<&StructType> {
        self.structs.iter().find(|s| s.name() == name)
    }

    pub fn find_func(&self, name: &str) -> Option<&FuncType> {
        self.funcs.iter().find(|f| f.name == name)
    }

    pub fn entity_count(&self) -> usize {
        self.structs.len() + self.funcs.len()
    }
}
