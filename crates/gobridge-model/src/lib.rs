//! gobridge model
//!
//! The language-independent core of the gobridge binding generators. It turns
//! the exported surface of a Go package into a typed model from which C, cgo,
//! Dart FFI and Kotlin JNI glue can be rendered.
//!
//! - **Type model**: [`GoType`] and the per-target spellings of [`TypeRepr`]
//! - **Registry**: the fixed table of Go primitives ([`BasicKind`], [`BasicType`])
//! - **Builder**: [`SourceModelBuilder`] translates declarations into a [`Package`]
//! - **Closure**: [`TypeClosure`] lists every pointer, slice and channel wrapper needed
//! - **Naming**: identifier spelling rules and [`ProjectNaming`]
//! - **Loading contract**: [`DeclParser`], [`SourceDecls`], [`BridgeConfig`], [`ParserMetrics`]
//!
//! # Example
//!
//! ```rust
//! use gobridge_model::ast::{FieldDecl, FuncDecl, FuncSig, TypeExpr};
//! use gobridge_model::{build_package, BridgeModel, ProjectNaming, SourceDecls};
//!
//! let mut decls = SourceDecls::default();
//! decls.add_func_decl(FuncDecl::new(
//!     "Sum",
//!     FuncSig::new(
//!         vec![FieldDecl::named("values", TypeExpr::slice(TypeExpr::ident("int64")))],
//!         vec![FieldDecl::unnamed(TypeExpr::ident("int64"))],
//!     ),
//! ));
//!
//! let package = build_package(ProjectNaming::new("calc"), "example.com/calc", "example.com/calc", &decls)?;
//! let model = BridgeModel::new(&package);
//! assert_eq!(model.closure.slices.len(), 1);
//! # Ok::<(), gobridge_model::BridgeError>(())
//! ```

pub mod ast;
pub mod builder;
pub mod closure;
pub mod config;
pub mod errors;
pub mod ir;
pub mod metrics;
pub mod model;
pub mod naming;
pub mod package;
pub mod project;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use builder::{build_package, parse_type_expr, SourceModelBuilder};
pub use closure::TypeClosure;
pub use config::BridgeConfig;
pub use errors::{BridgeError, BridgeResult};
pub use ir::SourceDecls;
pub use metrics::ParserMetrics;
pub use model::BridgeModel;
pub use package::Package;
pub use project::ProjectNaming;
pub use traits::DeclParser;
pub use types::{
    BasicKind, BasicType, ChanType, Field, FuncType, GoType, IdentType, PointerType, SliceType,
    StructType, TypeRepr,
};
