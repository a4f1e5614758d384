//! Pointer, slice and channel wrappers.
//!
//! None of these has a native representation on the far side of the FFI
//! boundary, so each distinct shape gets a generated wrapper keyed by
//! [`TypeRepr::map_name`].

use super::{GoType, TypeRepr};
use crate::errors::{BridgeError, BridgeResult};
use serde::Serialize;
use std::fmt;

/// Key of a wrapper element, spelled outermost-last so that every nesting of
/// pointers, slices and channels reads back one way only: `[]*[]T` is
/// `TListNullableList` and `[][]*T` is `TNullableListList`.
fn element_key(ty: &GoType) -> String {
    match ty {
        GoType::Pointer(p) => format!("{}Nullable", element_key(p.inner())),
        GoType::Slice(s) => format!("{}List", element_key(s.inner())),
        GoType::Chan(c) => format!("{}Chan", element_key(c.inner())),
        other => other.map_name(),
    }
}

/// `*T`, exposed as a nullable value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PointerType {
    inner: Box<GoType>,
}

impl PointerType {
    /// Fails for `**T`: a pointer is never wrapped in another pointer.
    pub fn new(inner: GoType) -> BridgeResult<Self> {
        if let GoType::Pointer(p) = &inner {
            return Err(BridgeError::DoublePointer {
                inner: p.to_string(),
            });
        }
        Ok(Self {
            inner: Box::new(inner),
        })
    }

    pub fn inner(&self) -> &GoType {
        &self.inner
    }
}

impl fmt::Display for PointerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*{}", self.inner)
    }
}

impl TypeRepr for PointerType {
    fn c_type(&self) -> String {
        format!("{}*", self.inner.c_type())
    }

    fn go_type(&self) -> String {
        format!("*{}", self.inner.go_type())
    }

    fn go_c_type(&self) -> String {
        format!("*{}", self.inner.go_c_type())
    }

    fn dart_type(&self) -> String {
        format!("{}?", self.inner.dart_type())
    }

    fn dart_c_type(&self) -> String {
        format!("ffi.Pointer<{}>", self.inner.dart_c_type())
    }

    fn dart_default(&self) -> String {
        "null".to_string()
    }

    fn kotlin_type(&self) -> String {
        format!("{}?", self.inner.kotlin_type())
    }

    fn kotlin_c_type(&self) -> String {
        "ByteArray".to_string()
    }

    fn kotlin_default(&self) -> String {
        "null".to_string()
    }

    fn map_name(&self) -> String {
        format!("Nullable{}", element_key(&self.inner))
    }

    fn need_map(&self) -> bool {
        true
    }
}

/// `[]T`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SliceType {
    inner: Box<GoType>,
}

impl SliceType {
    pub fn new(inner: GoType) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }

    pub fn inner(&self) -> &GoType {
        &self.inner
    }

    pub fn is_inner_ptr(&self) -> bool {
        matches!(*self.inner, GoType::Pointer(_))
    }
}

impl fmt::Display for SliceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[]{}", self.inner)
    }
}

impl TypeRepr for SliceType {
    fn c_type(&self) -> String {
        "fg_array".to_string()
    }

    fn go_type(&self) -> String {
        format!("[]{}", self.inner.go_type())
    }

    fn go_c_type(&self) -> String {
        "C.fg_array".to_string()
    }

    fn dart_type(&self) -> String {
        format!("List<{}>", self.inner.dart_type())
    }

    fn dart_c_type(&self) -> String {
        "_fgArray".to_string()
    }

    fn dart_default(&self) -> String {
        "[]".to_string()
    }

    fn kotlin_type(&self) -> String {
        format!("List<{}>", self.inner.kotlin_type())
    }

    fn kotlin_c_type(&self) -> String {
        "ByteArray".to_string()
    }

    fn kotlin_default(&self) -> String {
        "listOf()".to_string()
    }

    fn map_name(&self) -> String {
        format!("{}List", element_key(&self.inner))
    }

    fn need_map(&self) -> bool {
        true
    }
}

/// `chan T`, exposed to the foreign side as an asynchronous iterator handle
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ChanType {
    inner: Box<GoType>,
}

impl ChanType {
    pub fn new(inner: GoType) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }

    pub fn inner(&self) -> &GoType {
        &self.inner
    }

    pub fn is_inner_ptr(&self) -> bool {
        matches!(*self.inner, GoType::Pointer(_))
    }
}

impl fmt::Display for ChanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chan {}", self.inner)
    }
}

impl TypeRepr for ChanType {
    fn c_type(&self) -> String {
        "fg_chan".to_string()
    }

    fn go_type(&self) -> String {
        format!("chan {}", self.inner.go_type())
    }

    fn go_c_type(&self) -> String {
        "C.fg_chan".to_string()
    }

    fn dart_type(&self) -> String {
        format!("FgChan<{}>", self.inner.dart_type())
    }

    fn dart_c_type(&self) -> String {
        "_fgChan".to_string()
    }

    fn dart_default(&self) -> String {
        format!("FgChan<{}>()", self.inner.dart_type())
    }

    fn kotlin_type(&self) -> String {
        format!("FgChan<{}>", self.inner.kotlin_type())
    }

    // channel handles travel as opaque ids
    fn kotlin_c_type(&self) -> String {
        "Long".to_string()
    }

    fn kotlin_default(&self) -> String {
        format!("FgChan<{}>()", self.inner.kotlin_type())
    }

    fn map_name(&self) -> String {
        format!("{}Chan", element_key(&self.inner))
    }

    fn need_map(&self) -> bool {
        true
    }
}
