use super::TypeRepr;
use crate::naming::{c_struct_name, dart_c_name, to_camel};
use serde::Serialize;
use std::fmt;

/// Reference to a user-defined struct by its declared name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IdentType {
    pub name: String,
}

impl IdentType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for IdentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl TypeRepr for IdentType {
    fn c_type(&self) -> String {
        format!("struct {}", c_struct_name(&self.name))
    }

    fn go_type(&self) -> String {
        self.name.clone()
    }

    fn go_c_type(&self) -> String {
        format!("C.{}", c_struct_name(&self.name))
    }

    fn dart_type(&self) -> String {
        to_camel(&self.name)
    }

    fn dart_c_type(&self) -> String {
        dart_c_name(&self.name)
    }

    fn dart_default(&self) -> String {
        format!("{}()", self.dart_type())
    }

    fn kotlin_type(&self) -> String {
        to_camel(&self.name)
    }

    fn kotlin_c_type(&self) -> String {
        "ByteArray".to_string()
    }

    fn kotlin_default(&self) -> String {
        format!("{}()", self.kotlin_type())
    }

    fn map_name(&self) -> String {
        to_camel(&self.name)
    }

    fn need_map(&self) -> bool {
        true
    }
}
