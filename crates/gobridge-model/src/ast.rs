//! Declarations handed over by a Go source loader.
//!
//! This is the subset of Go's syntax tree the bridge needs: exported type
//! specs and top-level function declarations with their type expressions.
//! Loaders lower whatever parser they use into these shapes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction qualifier of a channel type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChanDir {
    /// `chan T`
    Both,
    /// `chan<- T`
    Send,
    /// `<-chan T`
    Recv,
}

/// A Go type expression
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "expr", rename_all = "snake_case")]
pub enum TypeExpr {
    /// `int32`, `User`, `any`
    Ident { name: String },

    /// `pkg.Type`
    Qualified { package: String, name: String },

    /// `*T`
    Pointer { elem: Box<TypeExpr> },

    /// `[]T` when `len` is `None`, `[N]T` otherwise
    Array {
        len: Option<String>,
        elem: Box<TypeExpr>,
    },

    /// `struct { ... }`
    Struct { fields: Vec<FieldDecl> },

    /// `func(...) ...`
    Func { sig: FuncSig },

    /// `chan T`, `chan<- T`, `<-chan T`
    Chan { dir: ChanDir, elem: Box<TypeExpr> },

    /// Anything else (`map[K]V`, `interface{...}`, `...T`, `List[T]`)
    Unsupported { kind: String, text: String },
}

impl TypeExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        TypeExpr::Ident { name: name.into() }
    }

    pub fn pointer(elem: TypeExpr) -> Self {
        TypeExpr::Pointer {
            elem: Box::new(elem),
        }
    }

    pub fn slice(elem: TypeExpr) -> Self {
        TypeExpr::Array {
            len: None,
            elem: Box::new(elem),
        }
    }

    pub fn array(len: impl Into<String>, elem: TypeExpr) -> Self {
        TypeExpr::Array {
            len: Some(len.into()),
            elem: Box::new(elem),
        }
    }

    pub fn chan(dir: ChanDir, elem: TypeExpr) -> Self {
        TypeExpr::Chan {
            dir,
            elem: Box::new(elem),
        }
    }

    pub fn kind_name(&self) -> &str {
        match self {
            TypeExpr::Ident { .. } => "identifier",
            TypeExpr::Qualified { .. } => "qualified type",
            TypeExpr::Pointer { .. } => "pointer",
            TypeExpr::Array { len: None, .. } => "slice",
            TypeExpr::Array { .. } => "array",
            TypeExpr::Struct { .. } => "struct",
            TypeExpr::Func { .. } => "func",
            TypeExpr::Chan { .. } => "chan",
            TypeExpr::Unsupported { kind, .. } => kind,
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Ident { name } => f.write_str(name),
            TypeExpr::Qualified { package, name } => write!(f, "{package}.{name}"),
            TypeExpr::Pointer { elem } => write!(f, "*{elem}"),
            TypeExpr::Array { len, elem } => {
                write!(f, "[{}]{elem}", len.as_deref().unwrap_or(""))
            }
            TypeExpr::Struct { fields } => {
                f.write_str("struct{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{field}")?;
                }
                f.write_str("}")
            }
            TypeExpr::Func { sig } => write!(f, "func{sig}"),
            TypeExpr::Chan { dir, elem } => match dir {
                ChanDir::Both => write!(f, "chan {elem}"),
                ChanDir::Send => write!(f, "chan<- {elem}"),
                ChanDir::Recv => write!(f, "<-chan {elem}"),
            },
            TypeExpr::Unsupported { text, .. } => f.write_str(text),
        }
    }
}

/// A field list entry: `A, B int`, or an embedded/unnamed `T` when `names` is empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDecl {
    pub names: Vec<String>,

    #[serde(rename = "type")]
    pub ty: TypeExpr,
}

impl FieldDecl {
    pub fn named(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            names: vec![name.into()],
            ty,
        }
    }

    pub fn unnamed(ty: TypeExpr) -> Self {
        Self {
            names: Vec::new(),
            ty,
        }
    }

    pub fn with_names(names: Vec<String>, ty: TypeExpr) -> Self {
        Self { names, ty }
    }
}

impl fmt::Display for FieldDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.names.is_empty() {
            write!(f, "{}", self.ty)
        } else {
            write!(f, "{} {}", self.names.join(", "), self.ty)
        }
    }
}

/// Parameters and results of a function, plus any type parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FuncSig {
    pub type_params: Vec<String>,
    pub params: Vec<FieldDecl>,
    pub results: Vec<FieldDecl>,
}

impl FuncSig {
    pub fn new(params: Vec<FieldDecl>, results: Vec<FieldDecl>) -> Self {
        Self {
            type_params: Vec::new(),
            params,
            results,
        }
    }

    pub fn with_type_params(mut self, type_params: Vec<String>) -> Self {
        self.type_params = type_params;
        self
    }
}

impl fmt::Display for FuncSig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |list: &[FieldDecl]| {
            list.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };

        if !self.type_params.is_empty() {
            write!(f, "[{}]", self.type_params.join(", "))?;
        }
        write!(f, "({})", join(&self.params))?;
        match self.results.as_slice() {
            [] => Ok(()),
            [single] if single.names.is_empty() => write!(f, " {}", single.ty),
            results => write!(f, " ({})", join(results)),
        }
    }
}

/// `type Name[...] <expr>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeSpec {
    pub name: String,
    pub type_params: Vec<String>,

    #[serde(rename = "type")]
    pub ty: TypeExpr,
}

impl TypeSpec {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            type_params: Vec::new(),
            ty,
        }
    }

    pub fn with_type_params(mut self, type_params: Vec<String>) -> Self {
        self.type_params = type_params;
        self
    }
}

/// A top-level `func` declaration, with or without a receiver
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FuncDecl {
    pub name: String,

    /// Methods have a receiver and are never bridged
    pub has_receiver: bool,

    /// The function type, normally [`TypeExpr::Func`]
    #[serde(rename = "type")]
    pub ty: TypeExpr,
}

impl FuncDecl {
    pub fn new(name: impl Into<String>, sig: FuncSig) -> Self {
        Self {
            name: name.into(),
            has_receiver: false,
            ty: TypeExpr::Func { sig },
        }
    }

    pub fn method(mut self) -> Self {
        self.has_receiver = true;
        self
    }

    pub fn sig(&self) -> Option<&FuncSig> {
        match &self.ty {
            TypeExpr::Func { sig } => Some(sig),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_expr_display() {
        let ty = TypeExpr::slice(TypeExpr::pointer(TypeExpr::ident("User")));
        assert_eq!(ty.to_string(), "[]*User");
        assert_eq!(TypeExpr::array("4", TypeExpr::ident("int")).to_string(), "[4]int");
        assert_eq!(
            TypeExpr::chan(ChanDir::Send, TypeExpr::ident("int")).to_string(),
            "chan<- int"
        );
        assert_eq!(
            TypeExpr::chan(ChanDir::Recv, TypeExpr::ident("int")).to_string(),
            "<-chan int"
        );
    }

    #[test]
    fn test_func_sig_display() {
        let sig = FuncSig::new(
            vec![FieldDecl::with_names(
                vec!["a".to_string(), "b".to_string()],
                TypeExpr::ident("int"),
            )],
            vec![
                FieldDecl::unnamed(TypeExpr::ident("int")),
                FieldDecl::unnamed(TypeExpr::ident("error")),
            ],
        );
        assert_eq!(sig.to_string(), "(a, b int) (int, error)");

        let single = FuncSig::new(Vec::new(), vec![FieldDecl::unnamed(TypeExpr::ident("bool"))]);
        assert_eq!(single.to_string(), "() bool");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TypeExpr::slice(TypeExpr::ident("int")).kind_name(), "slice");
        assert_eq!(TypeExpr::array("2", TypeExpr::ident("int")).kind_name(), "array");
        let map = TypeExpr::Unsupported {
            kind: "map_type".to_string(),
            text: "map[string]int".to_string(),
        };
        assert_eq!(map.kind_name(), "map_type");
        assert_eq!(map.to_string(), "map[string]int");
    }
}
