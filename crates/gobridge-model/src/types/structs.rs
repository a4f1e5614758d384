use super::{GoType, IdentType, TypeRepr};
use crate::naming::{to_lower_camel, to_snake, C_SYMBOL_PREFIX};
use serde::Serialize;
use std::fmt;

/// One struct field or one function parameter/result slot
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Field {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: GoType,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: GoType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// C member name
    pub fn c_name(&self) -> String {
        to_snake(&self.name)
    }

    pub fn go_name(&self) -> &str {
        &self.name
    }

    pub fn dart_name(&self) -> String {
        to_lower_camel(&self.name)
    }

    pub fn kotlin_name(&self) -> String {
        to_lower_camel(&self.name)
    }

    /// Name used when the field is spelled as a call argument
    pub fn param_name(&self) -> String {
        to_lower_camel(&self.name)
    }

    pub fn inner_most(&self) -> &GoType {
        self.ty.inner_most()
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self.ty, GoType::Pointer(_))
    }

    pub fn is_slice(&self) -> bool {
        matches!(self.ty, GoType::Slice(_))
    }

    pub fn is_chan(&self) -> bool {
        matches!(self.ty, GoType::Chan(_))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ty, f)
    }
}

impl TypeRepr for Field {
    fn c_type(&self) -> String {
        self.ty.c_type()
    }

    fn go_type(&self) -> String {
        self.ty.go_type()
    }

    fn go_c_type(&self) -> String {
        self.ty.go_c_type()
    }

    fn dart_type(&self) -> String {
        self.ty.dart_type()
    }

    fn dart_c_type(&self) -> String {
        self.ty.dart_c_type()
    }

    fn dart_default(&self) -> String {
        self.ty.dart_default()
    }

    fn kotlin_type(&self) -> String {
        self.ty.kotlin_type()
    }

    fn kotlin_c_type(&self) -> String {
        self.ty.kotlin_c_type()
    }

    fn kotlin_default(&self) -> String {
        self.ty.kotlin_default()
    }

    fn map_name(&self) -> String {
        self.ty.map_name()
    }

    fn need_map(&self) -> bool {
        self.ty.need_map()
    }
}

/// A translated named struct
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StructType {
    #[serde(rename = "type")]
    pub ty: IdentType,
    pub fields: Vec<Field>,
}

impl StructType {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            ty: IdentType::new(name),
            fields,
        }
    }

    pub fn name(&self) -> &str {
        &self.ty.name
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl fmt::Display for StructType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ty, f)
    }
}

impl TypeRepr for StructType {
    /// Typedef name of the C struct (`fg_user_info`)
    fn c_type(&self) -> String {
        format!("{C_SYMBOL_PREFIX}{}", to_snake(&self.ty.go_type()))
    }

    fn go_type(&self) -> String {
        self.ty.go_type()
    }

    fn go_c_type(&self) -> String {
        self.ty.go_c_type()
    }

    fn dart_type(&self) -> String {
        self.ty.dart_type()
    }

    fn dart_c_type(&self) -> String {
        self.ty.dart_c_type()
    }

    fn dart_default(&self) -> String {
        self.ty.dart_default()
    }

    fn kotlin_type(&self) -> String {
        self.ty.kotlin_type()
    }

    fn kotlin_c_type(&self) -> String {
        self.ty.kotlin_c_type()
    }

    fn kotlin_default(&self) -> String {
        self.ty.kotlin_default()
    }

    fn map_name(&self) -> String {
        self.ty.map_name()
    }

    fn need_map(&self) -> bool {
        true
    }
}
