//! Translation of Go declarations into the bridge model.
//!
//! [`SourceModelBuilder`] accepts exported type specs and top-level function
//! declarations and produces the [`Package`] consumed by the generators.
//! Any construct that cannot cross the FFI boundary aborts the build.

use crate::ast::{ChanDir, FieldDecl, FuncDecl, FuncSig, TypeExpr, TypeSpec};
use crate::errors::{BridgeError, BridgeResult};
use crate::ir::SourceDecls;
use crate::naming::is_exported;
use crate::package::Package;
use crate::project::ProjectNaming;
use crate::types::{BasicKind, ChanType, Field, FuncType, GoType, PointerType, StructType};
use log::{debug, info, trace};

/// Accumulates translated structs and functions in declaration order
#[derive(Debug, Default)]
pub struct SourceModelBuilder {
    structs: Vec<StructType>,
    funcs: Vec<FuncType>,
}

impl SourceModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one `type Name ...` declaration.
    ///
    /// Unexported names are skipped. Every exported type must be a plain
    /// struct.
    pub fn add_type_spec(&mut self, spec: &TypeSpec) -> BridgeResult<()> {
        if !is_exported(&spec.name) {
            trace!("Skipping unexported type {}", spec.name);
            return Ok(());
        }

        debug!("Parsing type: {}", spec.name);

        if !spec.type_params.is_empty() {
            return Err(BridgeError::GenericType {
                name: spec.name.clone(),
            });
        }

        match parse_type_expr(&spec.name, &spec.ty)? {
            GoType::Struct(st) => {
                self.structs.push(st);
                Ok(())
            }
            other => Err(BridgeError::ExpectedStruct {
                name: spec.name.clone(),
                found: other.kind_name().to_string(),
            }),
        }
    }

    /// Translate one top-level function declaration.
    ///
    /// Methods and unexported functions are skipped.
    pub fn add_func_decl(&mut self, decl: &FuncDecl) -> BridgeResult<()> {
        if decl.has_receiver {
            trace!("Skipping method {}", decl.name);
            return Ok(());
        }
        if !is_exported(&decl.name) {
            trace!("Skipping unexported function {}", decl.name);
            return Ok(());
        }

        debug!("Parsing function: {}", decl.name);

        match parse_type_expr(&decl.name, &decl.ty)? {
            GoType::Func(mut func) => {
                process_function_results(&mut func);
                self.funcs.push(func);
                Ok(())
            }
            other => Err(BridgeError::ExpectedFunc {
                name: decl.name.clone(),
                found: other.kind_name().to_string(),
            }),
        }
    }

    /// Translate all type specs first, then all functions
    pub fn add_decls(&mut self, decls: &SourceDecls) -> BridgeResult<()> {
        for spec in &decls.type_specs {
            self.add_type_spec(spec)?;
        }
        for decl in &decls.func_decls {
            self.add_func_decl(decl)?;
        }
        Ok(())
    }

    pub fn struct_count(&self) -> usize {
        self.structs.len()
    }

    pub fn func_count(&self) -> usize {
        self.funcs.len()
    }

    pub fn finish(
        self,
        naming: ProjectNaming,
        module: impl Into<String>,
        pkg_path: impl Into<String>,
    ) -> Package {
        Package::new(naming, module, pkg_path)
            .with_structs(self.structs)
            .with_funcs(self.funcs)
    }
}

/// Build a [`Package`] from the declarations of one Go package
pub fn build_package(
    naming: ProjectNaming,
    module: impl Into<String>,
    pkg_path: impl Into<String>,
    decls: &SourceDecls,
) -> BridgeResult<Package> {
    let module = module.into();
    let pkg_path = pkg_path.into();
    info!(
        "Building bridge model for {} ({} types, {} functions declared)",
        pkg_path,
        decls.type_specs.len(),
        decls.func_decls.len()
    );

    let mut builder = SourceModelBuilder::new();
    builder.add_decls(decls)?;

    info!(
        "Bridge model for {}: {} structs, {} functions",
        pkg_path,
        builder.struct_count(),
        builder.func_count()
    );
    Ok(builder.finish(naming, module, pkg_path))
}

/// Translate a type expression.
///
/// `name` is the declared name when `expr` is the right-hand side of a
/// declaration; struct and func literals take it as their own name.
pub fn parse_type_expr(name: &str, expr: &TypeExpr) -> BridgeResult<GoType> {
    translate(expr, Some(name).filter(|n| !n.is_empty()), name)
}

/// `declared` is set only at the top of a declaration; `context` names the
/// enclosing declaration for diagnostics.
fn translate(expr: &TypeExpr, declared: Option<&str>, context: &str) -> BridgeResult<GoType> {
    match expr {
        TypeExpr::Ident { name } => {
            if let Some(kind) = BasicKind::from_name(name) {
                return Ok(GoType::Basic(kind));
            }
            if name == "any" {
                return Err(BridgeError::AnyType {
                    context: context.to_string(),
                });
            }
            Ok(GoType::ident(name.as_str()))
        }

        TypeExpr::Qualified { package, name } => Err(BridgeError::ImportedType {
            package: package.clone(),
            name: name.clone(),
        }),

        TypeExpr::Pointer { elem } => {
            let inner = translate(elem, None, context)?;
            Ok(GoType::Pointer(PointerType::new(inner)?))
        }

        TypeExpr::Array { len: Some(len), elem } => Err(BridgeError::FixedArray {
            len: len.clone(),
            elem: elem.to_string(),
        }),

        TypeExpr::Array { len: None, elem } => Ok(GoType::slice(translate(elem, None, context)?)),

        TypeExpr::Struct { fields } => {
            let Some(name) = declared else {
                return Err(BridgeError::NestedLiteral {
                    kind: "struct".to_string(),
                    context: context.to_string(),
                });
            };

            let fields = parse_fields(fields, true, name)?;
            if fields.is_empty() {
                return Err(BridgeError::EmptyStruct {
                    name: name.to_string(),
                });
            }
            Ok(GoType::Struct(StructType::new(name, fields)))
        }

        TypeExpr::Func { sig } => {
            let Some(name) = declared else {
                return Err(BridgeError::NestedLiteral {
                    kind: "func".to_string(),
                    context: context.to_string(),
                });
            };
            Ok(GoType::Func(translate_func(name, sig)?))
        }

        TypeExpr::Chan { dir, elem } => {
            if *dir != ChanDir::Both {
                return Err(BridgeError::DirectionalChannel {
                    channel: expr.to_string(),
                });
            }
            Ok(GoType::Chan(ChanType::new(translate(elem, None, context)?)))
        }

        TypeExpr::Unsupported { kind, text } => Err(BridgeError::UnsupportedType {
            expr: text.clone(),
            kind: kind.clone(),
        }),
    }
}

fn translate_func(name: &str, sig: &FuncSig) -> BridgeResult<FuncType> {
    if !sig.type_params.is_empty() {
        return Err(BridgeError::GenericFunc {
            name: name.to_string(),
            params: sig.type_params.join(", "),
        });
    }

    let params = parse_fields(&sig.params, false, name)?;
    let results = parse_fields(&sig.results, false, name)?;
    Ok(FuncType::new(name, params, results))
}

/// Expand a Go field list into one [`Field`] per declared name.
///
/// Struct fields drop embedded and unexported entries. Parameter and result
/// lists keep unnamed entries with an empty name.
pub fn parse_fields(list: &[FieldDecl], is_struct: bool, context: &str) -> BridgeResult<Vec<Field>> {
    let mut fields = Vec::new();

    for decl in list {
        let names: Vec<&str> = if decl.names.is_empty() {
            if is_struct {
                trace!("Skipping embedded field {} in {}", decl.ty, context);
                continue;
            }
            vec![""]
        } else {
            decl.names
                .iter()
                .map(String::as_str)
                .filter(|name| !is_struct || is_exported(name))
                .collect()
        };

        if names.is_empty() {
            continue;
        }

        let ty = translate(&decl.ty, None, context)?;
        fields.extend(names.into_iter().map(|name| Field::new(name, ty.clone())));
    }

    Ok(fields)
}

/// Name anonymous results and strip a trailing `err error`.
///
/// A final unnamed `error` result is called `err`. A final `error` result
/// named `err` is removed from `results` and reported through `has_err`;
/// under any other name it stays an ordinary result. Remaining unnamed
/// results become `res<i>`.
pub fn process_function_results(func: &mut FuncType) {
    let fields = &mut func.results.fields;
    let count = fields.len();
    let mut has_err = false;
    let mut anonymous = false;

    for (idx, field) in fields.iter_mut().enumerate() {
        if idx + 1 == count && field.ty.is_error() {
            if field.name.is_empty() {
                field.name = "err".to_string();
            }
            if field.name == "err" {
                has_err = true;
            }
        }

        if field.name.is_empty() {
            field.name = format!("res{idx}");
            anonymous = true;
        }
    }

    if has_err {
        fields.pop();
    }

    func.result_count = fields.len();
    func.has_results = func.result_count > 0;
    func.has_params = !func.params.fields.is_empty();
    func.has_err = has_err;
    func.is_anonymous_results = anonymous;
}
