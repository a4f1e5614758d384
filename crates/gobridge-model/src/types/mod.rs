//! The Go type model.
//!
//! [`GoType`] is a closed sum over every shape the bridge can translate. Each
//! shape knows how to spell itself in every target through [`TypeRepr`]; all
//! derivations are pure functions of the type structure.

pub mod basic;
mod composite;
mod func;
mod ident;
mod structs;

use serde::Serialize;
use std::fmt;

pub use basic::{basic_types, BasicKind, BasicType};
pub use composite::{ChanType, PointerType, SliceType};
pub use func::FuncType;
pub use ident::IdentType;
pub use structs::{Field, StructType};

/// Target-language spellings of a type
pub trait TypeRepr: fmt::Display {
    /// Type in the generated C header
    fn c_type(&self) -> String;

    /// Type as written in Go source
    fn go_type(&self) -> String;

    /// Type as seen by cgo on the Go side of the boundary
    fn go_c_type(&self) -> String;

    fn dart_type(&self) -> String;

    /// `dart:ffi` native type
    fn dart_c_type(&self) -> String;

    fn dart_default(&self) -> String;

    fn kotlin_type(&self) -> String;

    /// Type used for the JNI transfer
    fn kotlin_c_type(&self) -> String;

    fn kotlin_default(&self) -> String;

    /// Deduplication key of the generated wrapper for this type
    fn map_name(&self) -> String;

    /// Whether the far side needs a conversion function instead of a raw copy
    fn need_map(&self) -> bool;
}

/// Every Go type shape the generator understands
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "type", rename_all = "snake_case")]
pub enum GoType {
    Basic(BasicKind),
    Ident(IdentType),
    Pointer(PointerType),
    Slice(SliceType),
    Chan(ChanType),
    Struct(StructType),
    Func(FuncType),
}

macro_rules! dispatch {
    ($self:ident, $t:ident => $e:expr) => {
        match $self {
            GoType::Basic($t) => $e,
            GoType::Ident($t) => $e,
            GoType::Pointer($t) => $e,
            GoType::Slice($t) => $e,
            GoType::Chan($t) => $e,
            GoType::Struct($t) => $e,
            GoType::Func($t) => $e,
        }
    };
}

impl GoType {
    pub fn basic(kind: BasicKind) -> Self {
        GoType::Basic(kind)
    }

    pub fn ident(name: impl Into<String>) -> Self {
        GoType::Ident(IdentType::new(name))
    }

    pub fn slice(inner: GoType) -> Self {
        GoType::Slice(SliceType::new(inner))
    }

    pub fn chan(inner: GoType) -> Self {
        GoType::Chan(ChanType::new(inner))
    }

    /// Short variant name, used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            GoType::Basic(_) => "basic",
            GoType::Ident(_) => "ident",
            GoType::Pointer(_) => "pointer",
            GoType::Slice(_) => "slice",
            GoType::Chan(_) => "chan",
            GoType::Struct(_) => "struct",
            GoType::Func(_) => "func",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, GoType::Basic(BasicKind::Error))
    }

    /// Element type for pointer, slice and channel wrappers
    pub fn inner(&self) -> Option<&GoType> {
        match self {
            GoType::Pointer(p) => Some(p.inner()),
            GoType::Slice(s) => Some(s.inner()),
            GoType::Chan(c) => Some(c.inner()),
            GoType::Basic(_) | GoType::Ident(_) | GoType::Struct(_) | GoType::Func(_) => None,
        }
    }

    /// Strip every pointer, slice and channel layer
    pub fn inner_most(&self) -> &GoType {
        let mut current = self;
        while let Some(inner) = current.inner() {
            current = inner;
        }
        current
    }
}

impl fmt::Display for GoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, t => fmt::Display::fmt(t, f))
    }
}

impl TypeRepr for GoType {
    fn c_type(&self) -> String {
        dispatch!(self, t => t.c_type())
    }

    fn go_type(&self) -> String {
        dispatch!(self, t => t.go_type())
    }

    fn go_c_type(&self) -> String {
        dispatch!(self, t => t.go_c_type())
    }

    fn dart_type(&self) -> String {
        dispatch!(self, t => t.dart_type())
    }

    fn dart_c_type(&self) -> String {
        dispatch!(self, t => t.dart_c_type())
    }

    fn dart_default(&self) -> String {
        dispatch!(self, t => t.dart_default())
    }

    fn kotlin_type(&self) -> String {
        dispatch!(self, t => t.kotlin_type())
    }

    fn kotlin_c_type(&self) -> String {
        dispatch!(self, t => t.kotlin_c_type())
    }

    fn kotlin_default(&self) -> String {
        dispatch!(self, t => t.kotlin_default())
    }

    fn map_name(&self) -> String {
        dispatch!(self, t => t.map_name())
    }

    fn need_map(&self) -> bool {
        dispatch!(self, t => t.need_map())
    }
}

impl fmt::Display for BasicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TypeRepr for BasicKind {
    fn c_type(&self) -> String {
        self.descriptor().c_type.to_string()
    }

    fn go_type(&self) -> String {
        self.descriptor().go_type.to_string()
    }

    fn go_c_type(&self) -> String {
        self.descriptor().go_c_type.to_string()
    }

    fn dart_type(&self) -> String {
        self.descriptor().dart_type.to_string()
    }

    fn dart_c_type(&self) -> String {
        self.descriptor().dart_c_type.to_string()
    }

    fn dart_default(&self) -> String {
        self.descriptor().dart_default.to_string()
    }

    fn kotlin_type(&self) -> String {
        self.descriptor().kotlin_type.to_string()
    }

    fn kotlin_c_type(&self) -> String {
        self.descriptor().kotlin_c_type.to_string()
    }

    fn kotlin_default(&self) -> String {
        self.descriptor().kotlin_default.to_string()
    }

    fn map_name(&self) -> String {
        crate::naming::to_camel(self.name())
    }

    fn need_map(&self) -> bool {
        self.descriptor().need_map
    }
}
