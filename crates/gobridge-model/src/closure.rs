//! Collection of the wrapper types a package needs.
//!
//! Every pointer, slice and channel shape that appears anywhere in a struct
//! field or function signature needs one generated wrapper, including the
//! shapes nested inside other wrappers.

use crate::package::Package;
use crate::types::{BasicKind, ChanType, Field, GoType, PointerType, SliceType, TypeRepr};
use log::{debug, trace};
use serde::Serialize;
use std::collections::BTreeMap;

/// Distinct wrapper and primitive types reachable from a package, each list
/// ordered by map name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TypeClosure<'a> {
    pub slices: Vec<&'a SliceType>,
    pub pointers: Vec<&'a PointerType>,
    pub chans: Vec<&'a ChanType>,
    pub basics: Vec<BasicKind>,
}

#[derive(Default)]
struct Collector<'a> {
    slices: BTreeMap<String, &'a SliceType>,
    pointers: BTreeMap<String, &'a PointerType>,
    chans: BTreeMap<String, &'a ChanType>,
    basics: BTreeMap<String, BasicKind>,
}

impl<'a> Collector<'a> {
    fn visit_fields(&mut self, fields: &'a [Field]) {
        for field in fields {
            self.visit(&field.ty);
        }
    }

    fn visit(&mut self, ty: &'a GoType) {
        match ty {
            GoType::Slice(slice) => {
                self.slices.entry(slice.map_name()).or_insert_with_key(|key| {
                    trace!("Recording slice wrapper {key}");
                    slice
                });
                self.visit(slice.inner());
            }
            GoType::Pointer(ptr) => {
                self.pointers.entry(ptr.map_name()).or_insert_with_key(|key| {
                    trace!("Recording pointer wrapper {key}");
                    ptr
                });
                self.visit(ptr.inner());
            }
            GoType::Chan(chan) => {
                self.chans.entry(chan.map_name()).or_insert_with_key(|key| {
                    trace!("Recording channel wrapper {key}");
                    chan
                });
                self.visit(chan.inner());
            }
            GoType::Basic(kind) => {
                self.basics.entry(kind.map_name()).or_insert(*kind);
            }
            GoType::Ident(_) | GoType::Struct(_) | GoType::Func(_) => {}
        }
    }
}

impl<'a> TypeClosure<'a> {
    /// Walk every struct field, parameter and result of `package`
    pub fn collect(package: &'a Package) -> Self {
        let mut collector = Collector::default();

        for st in &package.structs {
            collector.visit_fields(&st.fields);
        }
        for func in &package.funcs {
            collector.visit_fields(&func.params.fields);
            collector.visit_fields(&func.results.fields);
        }

        let closure = Self {
            slices: collector.slices.into_values().collect(),
            pointers: collector.pointers.into_values().collect(),
            chans: collector.chans.into_values().collect(),
            basics: collector.basics.into_values().collect(),
        };

        debug!(
            "Type closure of {}: {} slices, {} pointers, {} channels, {} basic types",
            package.pkg_path,
            closure.slices.len(),
            closure.pointers.len(),
            closure.chans.len(),
            closure.basics.len()
        );
        closure
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty() && self.pointers.is_empty() && self.chans.is_empty()
    }
}
