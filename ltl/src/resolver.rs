//! The transient resolver state machine from spec §3.2/§4.4. The
//! `Pending`/`Active`/`Resolved` marker per identifier is the cycle
//! detector (spec §9 — "do not use stack recursion alone"); `Active`
//! re-entry and a missing binding are handled identically, both collapsing
//! to an `UnsupportedType(Alias(id))` sentinel plus an `UnresolvableIdent`
//! error (spec §4.4 case 3).

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::trace;

use crate::error::LiftError;
use crate::ident::Ident;
use crate::raw::RawType;
use crate::sym_type::{FunDecl, MemType, RetType, StructInfo, SymType};
use layout::DataLayout;

#[derive(Clone, Debug)]
enum IdentStatus {
    Pending(RawType),
    Active,
    Resolved(SymType),
}

/// Lives only for the duration of one `mkContext` call or one query-mode
/// lift (spec §5 — "resolver state is thread-local and scoped to one
/// `mkContext` call").
pub(crate) struct Resolver<'dl> {
    data_layout: &'dl DataLayout,
    bindings: IndexMap<Ident, IdentStatus>,
    errors: HashSet<LiftError>,
}

impl<'dl> Resolver<'dl> {
    /// A fresh resolver for `mkContext`, with no bindings declared yet.
    pub(crate) fn new(data_layout: &'dl DataLayout) -> Resolver<'dl> {
        Resolver { data_layout, bindings: IndexMap::new(), errors: HashSet::new() }
    }

    /// A resolver seeded from an already-resolved alias map, for query-mode
    /// lifting (`liftType`, `as_mem_type`, `as_ret_type`). Every known alias
    /// starts `Resolved`, so re-resolving it never re-triggers cycle
    /// detection and never mutates the source `LLVMContext`.
    pub(crate) fn seeded(data_layout: &'dl DataLayout, alias_map: &IndexMap<Ident, SymType>) -> Resolver<'dl> {
        let bindings =
            alias_map.iter().map(|(id, ty)| (*id, IdentStatus::Resolved(ty.clone()))).collect();
        Resolver { data_layout, bindings, errors: HashSet::new() }
    }

    pub(crate) fn declare(&mut self, id: Ident, raw: RawType) {
        self.bindings.entry(id).or_insert(IdentStatus::Pending(raw));
    }

    pub(crate) fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors in a deterministic order; `HashSet` iteration order is not
    /// stable, so sort by rendering before handing the list to a caller.
    pub(crate) fn into_errors(self) -> Vec<LiftError> {
        let mut errors: Vec<LiftError> = self.errors.into_iter().collect();
        errors.sort_by(|a, b| format!("{}", a).cmp(&format!("{}", b)));
        errors
    }

    fn record_unsupported(&mut self, raw: RawType) {
        self.errors.insert(LiftError::UnsupportedType(raw));
    }

    fn record_unresolvable(&mut self, id: Ident) {
        self.errors.insert(LiftError::UnresolvableIdent(id));
    }

    /// `tcIdent`: the cycle-breaking step (spec §4.4).
    pub(crate) fn tc_ident(&mut self, id: Ident) -> SymType {
        match self.bindings.get(&id) {
            Some(IdentStatus::Resolved(t)) => return t.clone(),
            Some(IdentStatus::Active) => {
                trace!(?id, "tcIdent: active re-entry, cycle detected");
                self.record_unresolvable(id);
                return SymType::UnsupportedType(RawType::Alias(id));
            }
            Some(IdentStatus::Pending(_)) => {}
            None => {
                trace!(?id, "tcIdent: missing binding, dangling reference");
                self.record_unresolvable(id);
                return SymType::UnsupportedType(RawType::Alias(id));
            }
        }

        let raw = match self.bindings.insert(id, IdentStatus::Active) {
            Some(IdentStatus::Pending(raw)) => raw,
            _ => unreachable!("checked Pending above"),
        };
        trace!(?id, "tcIdent: Pending -> Active");

        // A declaration whose entire right-hand side is itself a bare alias
        // reference (`id = Alias(target)`, as opposed to one nested inside a
        // Ptr/Array/Struct/FunTy) is a renaming, not an indirection: it must
        // chase `target` all the way through to detect a dangling reference
        // or a pointer-free cycle, rather than returning the shallow,
        // unexpanded `Alias(target)` that `tcType` alone would produce.
        // Nested aliases (e.g. a pointer's pointee) are never chased this
        // way — that's what lets a pointer indirection break a cycle.
        let resolved = if let RawType::Alias(target) = raw {
            match self.tc_ident(target) {
                SymType::UnsupportedType(_) => {
                    self.record_unresolvable(target);
                    SymType::UnsupportedType(RawType::Alias(target))
                }
                _ => SymType::Alias(target),
            }
        } else {
            self.tc_type(raw)
        };

        self.bindings.insert(id, IdentStatus::Resolved(resolved.clone()));
        resolved
    }

    /// `tcType`: structural resolution of one raw type (spec §4.4).
    pub(crate) fn tc_type(&mut self, raw: RawType) -> SymType {
        match raw {
            RawType::Int(w) => SymType::MemType(MemType::Int(w)),
            RawType::Float => SymType::MemType(MemType::Float),
            RawType::Double => SymType::MemType(MemType::Double),
            RawType::Void => SymType::VoidType,
            RawType::Metadata => SymType::MemType(MemType::Metadata),
            RawType::OtherPrimitive(_) => {
                self.record_unsupported(raw.clone());
                SymType::UnsupportedType(raw)
            }
            RawType::Alias(id) => SymType::Alias(id),
            RawType::Ptr(ref elem) => {
                let pointee = self.tc_type((**elem).clone());
                SymType::MemType(MemType::Ptr(Box::new(pointee)))
            }
            RawType::Array(n, ref elem) => match self.tc_mem_type((**elem).clone()) {
                Some(mt) => SymType::MemType(MemType::Array(n, Box::new(mt))),
                None => {
                    self.record_unsupported(raw.clone());
                    SymType::UnsupportedType(raw)
                }
            },
            RawType::Vector(n, ref elem) => match self.tc_mem_type((**elem).clone()) {
                Some(mt) => SymType::MemType(MemType::Vec(n, Box::new(mt))),
                None => {
                    self.record_unsupported(raw.clone());
                    SymType::UnsupportedType(raw)
                }
            },
            RawType::Struct(ref fields) | RawType::PackedStruct(ref fields) => {
                let packed = matches!(raw, RawType::PackedStruct(_));
                match self.tc_struct_fields(fields) {
                    Some(mem_fields) => {
                        let shapes: Vec<layout::FieldShape> =
                            mem_fields.iter().map(|mt| self.field_shape(mt)).collect();
                        let layout =
                            layout::mk_struct_info(packed, &shapes, self.data_layout.aggregate_align);
                        SymType::MemType(MemType::Struct(StructInfo { fields: mem_fields, layout }))
                    }
                    None => {
                        self.record_unsupported(raw.clone());
                        SymType::UnsupportedType(raw)
                    }
                }
            }
            RawType::FunTy(ref ret, ref args, vararg) => {
                let ret_sym = self.tc_type((**ret).clone());
                let ret_ty = self.expand_to_ret_type(ret_sym);
                let arg_tys = self.tc_mem_types(args);
                match (ret_ty, arg_tys) {
                    (Some(ret), Some(args)) => {
                        SymType::FunType(FunDecl { ret, args, vararg })
                    }
                    _ => {
                        self.record_unsupported(raw.clone());
                        SymType::UnsupportedType(raw)
                    }
                }
            }
            RawType::Opaque => SymType::OpaqueType,
        }
    }

    fn tc_struct_fields(&mut self, fields: &[RawType]) -> Option<Vec<MemType>> {
        self.tc_mem_types(fields)
    }

    fn tc_mem_types(&mut self, raws: &[RawType]) -> Option<Vec<MemType>> {
        let mut out = Vec::with_capacity(raws.len());
        for r in raws {
            out.push(self.tc_mem_type(r.clone())?);
        }
        Some(out)
    }

    /// `tcMemType`: resolve `raw` and expand `Alias` hops until a `MemType`
    /// is reached, or fail.
    fn tc_mem_type(&mut self, raw: RawType) -> Option<MemType> {
        let sym = self.tc_type(raw);
        self.expand_to_mem_type(sym)
    }

    /// `resolveMemType(sym)`: expand `Alias` hops (via the cycle-breaking
    /// `tc_ident`) until reaching a `MemType`, or give up with `None`.
    pub(crate) fn expand_to_mem_type(&mut self, sym: SymType) -> Option<MemType> {
        match sym {
            SymType::MemType(mt) => Some(mt),
            SymType::Alias(id) => {
                let resolved = self.tc_ident(id);
                self.expand_to_mem_type(resolved)
            }
            _ => None,
        }
    }

    /// `resolveRetType(sym)`: expand `Alias` hops until reaching a
    /// `MemType` or `VoidType`, or give up with `None`.
    pub(crate) fn expand_to_ret_type(&mut self, sym: SymType) -> Option<RetType> {
        match sym {
            SymType::VoidType => Some(None),
            SymType::MemType(mt) => Some(Some(mt)),
            SymType::Alias(id) => {
                let resolved = self.tc_ident(id);
                self.expand_to_ret_type(resolved)
            }
            _ => None,
        }
    }

    fn field_shape(&self, mt: &MemType) -> layout::FieldShape {
        let (size, align) = self.mem_type_size_align(mt);
        layout::FieldShape { size, align }
    }

    fn mem_type_size_align(&self, mt: &MemType) -> (layout::Size, layout::Align) {
        match mt {
            MemType::Int(w) => {
                let int = layout::Integer::fit(*w as u64);
                (self.data_layout.int_size(int), self.data_layout.int_align(int))
            }
            MemType::Float => (self.data_layout.float_size(), self.data_layout.float_align()),
            MemType::Double => (self.data_layout.double_size(), self.data_layout.double_align()),
            MemType::Ptr(_) => (self.data_layout.ptr_size(), self.data_layout.ptr_align()),
            MemType::Array(n, elem) | MemType::Vec(n, elem) => {
                let (elem_size, elem_align) = self.mem_type_size_align(elem);
                (elem_size * *n, elem_align)
            }
            MemType::Struct(info) => (info.layout.size, info.layout.align),
            MemType::Metadata => (layout::Size::ZERO, layout::Align::ONE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout::DataLayout;

    fn resolver(dl: &DataLayout) -> Resolver<'_> {
        Resolver::new(dl)
    }

    #[test]
    fn primitive_ints_lift_directly() {
        let dl = DataLayout::default();
        let mut r = resolver(&dl);
        assert_eq!(r.tc_type(RawType::Int(32)), SymType::MemType(MemType::Int(32)));
        assert!(!r.has_errors());
    }

    #[test]
    fn other_primitive_is_unsupported() {
        let dl = DataLayout::default();
        let mut r = resolver(&dl);
        let raw = RawType::OtherPrimitive("x86_fp80".to_string());
        assert_eq!(r.tc_type(raw.clone()), SymType::UnsupportedType(raw));
        assert!(r.has_errors());
    }

    #[test]
    fn dangling_alias_is_unresolvable() {
        let dl = DataLayout::default();
        let mut r = resolver(&dl);
        let mut idents = crate::ident::IdentTable::new();
        let b = idents.intern("B");
        // `B` was never declared.
        let sym = r.tc_ident(b);
        assert_eq!(sym, SymType::UnsupportedType(RawType::Alias(b)));
        let errs = r.into_errors();
        assert_eq!(errs, vec![LiftError::UnresolvableIdent(b)]);
    }

    #[test]
    fn pure_cycle_without_pointer_is_unresolvable() {
        let dl = DataLayout::default();
        let mut r = resolver(&dl);
        let mut idents = crate::ident::IdentTable::new();
        let a = idents.intern("A");
        let b = idents.intern("B");
        r.declare(a, RawType::Alias(b));
        r.declare(b, RawType::Alias(a));

        let sym_a = r.tc_ident(a);
        assert_eq!(sym_a, SymType::UnsupportedType(RawType::Alias(b)));
        let errs = r.into_errors();
        assert_eq!(errs, vec![LiftError::UnresolvableIdent(a), LiftError::UnresolvableIdent(b)]);
    }

    #[test]
    fn cycle_broken_by_pointer_resolves() {
        let dl = DataLayout::default();
        let mut r = resolver(&dl);
        let mut idents = crate::ident::IdentTable::new();
        let node = idents.intern("Node");
        // Node = { i32, Node* }
        r.declare(
            node,
            RawType::Struct(vec![RawType::Int(32), RawType::ptr(RawType::Alias(node))]),
        );
        let sym = r.tc_ident(node);
        assert!(!r.has_errors());
        match sym {
            SymType::MemType(MemType::Struct(info)) => {
                assert_eq!(info.fields[0], MemType::Int(32));
                assert_eq!(info.fields[1], MemType::Ptr(Box::new(SymType::Alias(node))));
            }
            other => panic!("expected struct, got {:?}", other),
        }
    }
}
