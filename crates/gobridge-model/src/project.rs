use crate::naming::{to_camel, to_snake};
use crate::types::{FuncType, TypeRepr};
use serde::{Deserialize, Serialize};

/// Package prefix of the generated Flutter plugin
pub const PLUGIN_PACKAGE_PREFIX: &str = "com.flutter_gopher.";

/// Names derived from the project name, shared by every generated target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectNaming {
    /// snake_case project name (`my_api`)
    pub project_name: String,

    /// Plugin package (`com.flutter_gopher.my_api`)
    pub package_name: String,

    /// Native plugin class (`MyApiPlugin`)
    pub plugin_class_name: String,

    /// Library class (`MyApi`)
    pub lib_class_name: String,

    /// Library import name (`myapi`)
    pub lib_name: String,

    /// Disambiguates exported symbols across regenerations.
    /// Loaded from the `.timestamp` sidecar by the caller.
    pub timestamp: Option<i64>,
}

impl ProjectNaming {
    pub fn new(project_name: &str) -> Self {
        let snake = to_snake(project_name);
        let camel = to_camel(project_name);

        Self {
            package_name: format!("{PLUGIN_PACKAGE_PREFIX}{snake}"),
            project_name: snake,
            plugin_class_name: format!("{camel}Plugin"),
            lib_name: camel.to_lowercase(),
            lib_class_name: camel,
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Exported C symbol for a function, suffixed with the timestamp when one is set
    pub fn export_symbol(&self, func: &FuncType) -> String {
        match self.timestamp {
            Some(ts) => format!("{}_{ts}", func.c_type()),
            None => func.c_type(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naming_from_snake_case() {
        let naming = ProjectNaming::new("my_api");
        assert_eq!(naming.project_name, "my_api");
        assert_eq!(naming.package_name, "com.flutter_gopher.my_api");
        assert_eq!(naming.plugin_class_name, "MyApiPlugin");
        assert_eq!(naming.lib_class_name, "MyApi");
        assert_eq!(naming.lib_name, "myapi");
        assert_eq!(naming.timestamp, None);
    }

    #[test]
    fn test_naming_from_other_spellings() {
        let naming = ProjectNaming::new("MyApi");
        assert_eq!(naming.project_name, "my_api");
        assert_eq!(naming.lib_class_name, "MyApi");

        let naming = ProjectNaming::new("my-api");
        assert_eq!(naming.project_name, "my_api");
        assert_eq!(naming.lib_name, "myapi");
    }

    #[test]
    fn test_naming_is_pure() {
        assert_eq!(ProjectNaming::new("demo_app"), ProjectNaming::new("demo_app"));
    }

    #[test]
    fn test_export_symbol() {
        let func = FuncType::new("GetUser", Vec::new(), Vec::new());
        let naming = ProjectNaming::new("my_api");
        assert_eq!(naming.export_symbol(&func), "fg_get_user");

        let naming = naming.with_timestamp(1700000000000);
        assert_eq!(naming.export_symbol(&func), "fg_get_user_1700000000000");
    }
}
