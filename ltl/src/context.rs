//! `mkContext` and the read-only query layer over the resulting
//! `LLVMContext` (spec §4.4/§4.5).

use indexmap::IndexMap;
use tracing::{debug, info_span};

use crate::error::LiftError;
use crate::ident::Ident;
use crate::metadata::{MetadataMap, ValMd};
use crate::raw::RawType;
use crate::resolver::Resolver;
use crate::sym_type::{MemType, RetType, SymType};
use layout::DataLayout;

/// The immutable context `mkContext` produces: a resolved alias map, the
/// unnamed-metadata map, and the data layout it was built against.
/// Immutable after construction (spec §3.2); safe to share across threads
/// (spec §5).
#[derive(Debug)]
pub struct LLVMContext {
    data_layout: DataLayout,
    metadata_map: MetadataMap,
    alias_map: IndexMap<Ident, SymType>,
}

/// Resolves a set of named type declarations (possibly mutually
/// referential) plus a data layout into a closed `LLVMContext`, per spec
/// §4.4:
///
/// 1. every declared alias starts `Pending`,
/// 2. each declaration is resolved through `tcIdent` in input order,
///    updating bindings as a side effect,
/// 3. the accumulated errors and the resulting context are returned
///    together — `mkContext` never fails outright; unsupported constructs
///    become `UnsupportedType` sentinels in the alias map (spec §4.6).
pub fn mk_context(
    data_layout: DataLayout,
    metadata_map: MetadataMap,
    decls: Vec<(Ident, RawType)>,
) -> (Vec<LiftError>, LLVMContext) {
    let span = info_span!("mk_context", decl_count = decls.len());
    let _enter = span.enter();

    let mut resolver = Resolver::new(&data_layout);
    for (id, raw) in &decls {
        resolver.declare(*id, raw.clone());
    }

    let mut alias_map = IndexMap::new();
    for (id, _) in &decls {
        let sym = resolver.tc_ident(*id);
        alias_map.insert(*id, sym);
    }

    let errors = resolver.into_errors();
    debug!(error_count = errors.len(), "mkContext finished");
    (errors, LLVMContext { data_layout, metadata_map, alias_map })
}

impl LLVMContext {
    pub fn data_layout(&self) -> &DataLayout {
        &self.data_layout
    }

    pub fn alias_map(&self) -> &IndexMap<Ident, SymType> {
        &self.alias_map
    }

    /// Direct map probe — does not expand `Alias` hops.
    pub fn lookup_alias(&self, id: Ident) -> Option<&SymType> {
        self.alias_map.get(&id)
    }

    pub fn lookup_metadata(&self, i: u32) -> Option<&ValMd> {
        self.metadata_map.get(&i)
    }

    /// Follows `Alias` hops to a `MemType`, never mutating the context.
    pub fn as_mem_type(&self, sym: &SymType) -> Option<MemType> {
        let mut resolver = Resolver::seeded(&self.data_layout, &self.alias_map);
        resolver.expand_to_mem_type(sym.clone())
    }

    /// Follows `Alias` hops to a `MemType`/void, never mutating the context.
    pub fn as_ret_type(&self, sym: &SymType) -> Option<RetType> {
        let mut resolver = Resolver::seeded(&self.data_layout, &self.alias_map);
        resolver.expand_to_ret_type(sym.clone())
    }

    /// Runs a query-mode lift of `raw`, starting from `bindings =
    /// Resolved(aliasMap)`. If any error is recorded during this lift,
    /// degrades to `None`, discarding the produced `SymType` (spec §4.5,
    /// §7).
    pub fn lift_type(&self, raw: RawType) -> Option<SymType> {
        let mut resolver = Resolver::seeded(&self.data_layout, &self.alias_map);
        let sym = resolver.tc_type(raw);
        if resolver.has_errors() {
            None
        } else {
            Some(sym)
        }
    }

    pub fn lift_mem_type(&self, raw: RawType) -> Option<MemType> {
        let sym = self.lift_type(raw)?;
        self.as_mem_type(&sym)
    }

    pub fn lift_ret_type(&self, raw: RawType) -> Option<RetType> {
        let sym = self.lift_type(raw)?;
        self.as_ret_type(&sym)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::IdentTable;
    use crate::sym_type::MemType;

    #[test]
    fn linear_aliases_lift_through_to_mem_type() {
        // A = i32, B = A
        let mut idents = IdentTable::new();
        let a = idents.intern("A");
        let b = idents.intern("B");
        let decl_list = vec![(a, RawType::Int(32)), (b, RawType::Alias(a))];
        let (errors, ctx) = mk_context(DataLayout::default(), MetadataMap::new(), decl_list);
        assert!(errors.is_empty());
        let sym_b = ctx.lookup_alias(b).cloned().unwrap();
        assert_eq!(ctx.as_mem_type(&sym_b), Some(MemType::Int(32)));
    }

    #[test]
    fn unsupported_primitive_is_recorded() {
        let mut idents = IdentTable::new();
        let a = idents.intern("A");
        let (errors, ctx) =
            mk_context(DataLayout::default(), MetadataMap::new(), vec![(a, RawType::OtherPrimitive("x86_fp80".into()))]);
        assert_eq!(errors.len(), 1);
        assert!(matches!(ctx.lookup_alias(a), Some(SymType::UnsupportedType(_))));
    }

    #[test]
    fn dangling_reference_is_recorded() {
        let mut idents = IdentTable::new();
        let a = idents.intern("A");
        let b = idents.intern("B");
        // A = B, B undeclared.
        let (errors, ctx) = mk_context(DataLayout::default(), MetadataMap::new(), vec![(a, RawType::Alias(b))]);
        assert_eq!(errors, vec![LiftError::UnresolvableIdent(b)]);
        assert!(matches!(ctx.lookup_alias(a), Some(SymType::UnsupportedType(RawType::Alias(_)))));
    }

    #[test]
    fn self_cycle_through_pointer_resolves_cleanly() {
        let mut idents = IdentTable::new();
        let node = idents.intern("Node");
        let decl = RawType::Struct(vec![RawType::Int(32), RawType::ptr(RawType::Alias(node))]);
        let (errors, ctx) = mk_context(DataLayout::default(), MetadataMap::new(), vec![(node, decl)]);
        assert!(errors.is_empty());
        match ctx.lookup_alias(node) {
            Some(SymType::MemType(MemType::Struct(info))) => {
                assert_eq!(info.fields[0], MemType::Int(32));
                assert_eq!(info.fields[1], MemType::Ptr(Box::new(SymType::Alias(node))));
            }
            other => panic!("expected resolved struct, got {:?}", other),
        }
    }

    #[test]
    fn every_declared_ident_appears_in_alias_map() {
        let mut idents = IdentTable::new();
        let a = idents.intern("A");
        let b = idents.intern("B");
        let (_, ctx) = mk_context(
            DataLayout::default(),
            MetadataMap::new(),
            vec![(a, RawType::Int(8)), (b, RawType::Alias(a))],
        );
        assert!(ctx.alias_map().contains_key(&a));
        assert!(ctx.alias_map().contains_key(&b));
    }
}
