//! Registry of Go primitive types and their precomputed target representations.

use serde::{Deserialize, Serialize};

/// The Go primitive types the bridge understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasicKind {
    Bool,
    String,
    Error,
    Int8,
    Int16,
    Int32,
    Int64,
    Byte,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Int,
    Uint,
    Uintptr,
}

impl BasicKind {
    /// Every registered kind, in registry order
    pub const ALL: [BasicKind; 17] = [
        BasicKind::Bool,
        BasicKind::String,
        BasicKind::Error,
        BasicKind::Int8,
        BasicKind::Int16,
        BasicKind::Int32,
        BasicKind::Int64,
        BasicKind::Byte,
        BasicKind::Uint8,
        BasicKind::Uint16,
        BasicKind::Uint32,
        BasicKind::Uint64,
        BasicKind::Float32,
        BasicKind::Float64,
        BasicKind::Int,
        BasicKind::Uint,
        BasicKind::Uintptr,
    ];

    /// Look up a Go type name. Anything not listed here is a user type reference.
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "bool" => BasicKind::Bool,
            "string" => BasicKind::String,
            "error" => BasicKind::Error,
            "int8" => BasicKind::Int8,
            "int16" => BasicKind::Int16,
            "int32" => BasicKind::Int32,
            "int64" => BasicKind::Int64,
            "byte" => BasicKind::Byte,
            "uint8" => BasicKind::Uint8,
            "uint16" => BasicKind::Uint16,
            "uint32" => BasicKind::Uint32,
            "uint64" => BasicKind::Uint64,
            "float32" => BasicKind::Float32,
            "float64" => BasicKind::Float64,
            "int" => BasicKind::Int,
            "uint" => BasicKind::Uint,
            "uintptr" => BasicKind::Uintptr,
            _ => return None,
        };
        Some(kind)
    }

    pub fn descriptor(self) -> &'static BasicType {
        &BASIC_TYPES[self as usize]
    }

    /// The Go spelling (`int32`, `byte`, ...)
    pub fn name(self) -> &'static str {
        self.descriptor().go_type
    }
}

/// Precomputed representations of one primitive in every target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicType {
    pub kind: BasicKind,

    pub c_type: &'static str,

    pub go_type: &'static str,
    pub go_c_type: &'static str,

    pub dart_type: &'static str,
    pub dart_c_type: &'static str,
    pub dart_default: &'static str,

    pub kotlin_type: &'static str,
    pub kotlin_c_type: &'static str,
    pub kotlin_default: &'static str,
    /// JNI class path of the boxed Kotlin type
    pub kotlin_package_path: &'static str,
    /// Unboxing accessor on the boxed Kotlin type
    pub kotlin_get_value: &'static str,

    /// Requires a marshal/unmarshal step instead of a by-value copy
    pub need_map: bool,
}

macro_rules! basic {
    (
        $kind:ident, $c:expr, $go:expr, $go_c:expr, $dart:expr, $dart_c:expr, $dart_default:expr,
        $kt:expr, $kt_c:expr, $kt_default:expr, $kt_path:expr, $kt_get:expr, $need_map:expr
    ) => {
        BasicType {
            kind: BasicKind::$kind,
            c_type: $c,
            go_type: $go,
            go_c_type: $go_c,
            dart_type: $dart,
            dart_c_type: $dart_c,
            dart_default: $dart_default,
            kotlin_type: $kt,
            kotlin_c_type: $kt_c,
            kotlin_default: $kt_default,
            kotlin_package_path: $kt_path,
            kotlin_get_value: $kt_get,
            need_map: $need_map,
        }
    };
}

// Indexed by `BasicKind as usize`.
static BASIC_TYPES: [BasicType; 17] = [
    basic!(Bool, "bool", "bool", "C.bool", "bool", "ffi.Bool", "false",
        "Boolean", "Boolean", "false", "java/lang/Boolean", "booleanValue", false),
    basic!(String, "void*", "string", "unsafe.Pointer", "String", "ffi.Pointer<ffi.Void>", "''",
        "String", "String", "\"\"", "java/lang/String", "getBytes", true),
    basic!(Error, "void*", "error", "unsafe.Pointer", "Error", "ffi.Pointer<ffi.Void>", "null",
        "Error", "String", "null", "java/lang/String", "getBytes", true),
    basic!(Int8, "int8_t", "int8", "C.int8_t", "int", "ffi.Int8", "0",
        "Int", "Int", "0", "java/lang/Integer", "intValue", false),
    basic!(Int16, "int16_t", "int16", "C.int16_t", "int", "ffi.Int16", "0",
        "Int", "Int", "0", "java/lang/Integer", "intValue", false),
    basic!(Int32, "int32_t", "int32", "C.int32_t", "int", "ffi.Int32", "0",
        "Int", "Int", "0", "java/lang/Integer", "intValue", false),
    basic!(Int64, "int64_t", "int64", "C.int64_t", "int", "ffi.Int64", "0",
        "Long", "Long", "0", "java/lang/Long", "longValue", false),
    basic!(Byte, "uint8_t", "byte", "C.uint8_t", "int", "ffi.Uint8", "0",
        "Byte", "Byte", "0", "java/lang/Byte", "byteValue", false),
    basic!(Uint8, "uint8_t", "uint8", "C.uint8_t", "int", "ffi.Uint8", "0",
        "Int", "Int", "0", "java/lang/Integer", "intValue", false),
    basic!(Uint16, "uint16_t", "uint16", "C.uint16_t", "int", "ffi.Uint16", "0",
        "Int", "Int", "0", "java/lang/Integer", "intValue", false),
    basic!(Uint32, "uint32_t", "uint32", "C.uint32_t", "int", "ffi.Uint32", "0",
        "Int", "Int", "0", "java/lang/Integer", "intValue", false),
    basic!(Uint64, "uint64_t", "uint64", "C.uint64_t", "int", "ffi.Uint64", "0",
        "Long", "Long", "0", "java/lang/Long", "longValue", false),
    basic!(Float32, "float", "float32", "C.float", "double", "ffi.Float", "0",
        "Float", "Float", "0.0", "java/lang/Float", "floatValue", false),
    basic!(Float64, "double", "float64", "C.double", "double", "ffi.Double", "0",
        "Double", "Double", "0.0", "java/lang/Double", "doubleValue", false),
    basic!(Int, "int", "int", "C.int", "int", "ffi.Int", "0",
        "Int", "Int", "0", "java/lang/Integer", "intValue", false),
    basic!(Uint, "unsigned int", "uint", "C.uint", "int", "ffi.UnsignedInt", "0",
        "Int", "Int", "0", "java/lang/Integer", "intValue", false),
    basic!(Uintptr, "uintptr_t", "uintptr", "C.uintptr_t", "int", "ffi.UintPtr", "0",
        "Long", "Long", "0", "java/lang/Long", "longValue", false),
];

/// Iterate the whole registry
pub fn basic_types() -> impl Iterator<Item = &'static BasicType> {
    BASIC_TYPES.iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_indexed_by_kind() {
        for kind in BasicKind::ALL {
            assert_eq!(kind.descriptor().kind, kind);
            assert_eq!(BasicKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(basic_types().count(), BasicKind::ALL.len());
    }

    #[test]
    fn test_unknown_names_are_not_basic() {
        assert_eq!(BasicKind::from_name("User"), None);
        assert_eq!(BasicKind::from_name("any"), None);
        assert_eq!(BasicKind::from_name("rune"), None);
        assert_eq!(BasicKind::from_name("Int32"), None);
    }

    #[test]
    fn test_byte_and_uint8_share_wire_representation() {
        let byte = BasicKind::Byte.descriptor();
        let uint8 = BasicKind::Uint8.descriptor();

        assert_ne!(byte.go_type, uint8.go_type);
        assert_eq!(byte.c_type, uint8.c_type);
        assert_eq!(byte.go_c_type, uint8.go_c_type);
        assert_eq!(byte.dart_c_type, uint8.dart_c_type);
        assert_eq!(byte.c_type, "uint8_t");
    }

    #[test]
    fn test_need_map_only_for_string_and_error() {
        for kind in BasicKind::ALL {
            let expected = matches!(kind, BasicKind::String | BasicKind::Error);
            assert_eq!(kind.descriptor().need_map, expected, "{kind:?}");
        }
    }
}
