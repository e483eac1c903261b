//! `SymType`/`MemType`/`RetType`/`StructInfo`/`FunDecl` (spec §3.2), plus
//! `compatMemTypes`/`compatRetTypes` (spec §4.5) — structural compatibility
//! by shape, ignoring pointee types, never expanding `Alias`.

use crate::ident::Ident;
use crate::raw::RawType;

/// A concrete in-memory type: something with a size and alignment.
#[derive(Clone, Debug, PartialEq)]
pub enum MemType {
    Int(u32),
    Float,
    Double,
    /// The pointee is a full `SymType`, not a `MemType` — pointers to
    /// `Opaque` and to unresolved aliases are legal (spec §9 open
    /// question; the lifter intentionally does not reject them).
    Ptr(Box<SymType>),
    Array(u64, Box<MemType>),
    Vec(u64, Box<MemType>),
    Struct(StructInfo),
    Metadata,
}

/// A function's return type; `None` models void.
pub type RetType = Option<MemType>;

/// A struct's fields (as lifted `MemType`s) plus the size/alignment/offset
/// layout the data-layout service derived from them.
#[derive(Clone, Debug, PartialEq)]
pub struct StructInfo {
    pub fields: Vec<MemType>,
    pub layout: layout::StructInfo,
}

impl StructInfo {
    pub fn packed(&self) -> bool {
        self.layout.packed
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunDecl {
    pub ret: RetType,
    pub args: Vec<MemType>,
    pub vararg: bool,
}

/// The lifted, symbolic form of an LLVM type.
#[derive(Clone, Debug, PartialEq)]
pub enum SymType {
    MemType(MemType),
    /// An unresolved or (at this point in resolution) recursive reference
    /// to a named type. Query-time callers follow this through
    /// `LLVMContext::as_mem_type`/`as_ret_type`.
    Alias(Ident),
    FunType(FunDecl),
    VoidType,
    OpaqueType,
    /// A sentinel recording that lifting failed; carries the raw type (or
    /// `RawType::Alias(id)` for an unresolvable identifier) that could not
    /// be mapped.
    UnsupportedType(RawType),
}

/// Bit-level compatibility (spec §4.5): structural equality by shape.
/// `Int(w)` matches same width; floats match same kind; pointers are all
/// mutually compatible regardless of pointee; arrays/vectors compatible iff
/// same length and compatible element; structs compatible iff same
/// `packed` flag and pointwise-compatible field lists; every other
/// cross-pairing is incompatible. Aliases are never expanded here — callers
/// are expected to resolve through `as_mem_type` first.
pub fn compat_mem_types(a: &MemType, b: &MemType) -> bool {
    match (a, b) {
        (MemType::Int(w1), MemType::Int(w2)) => w1 == w2,
        (MemType::Float, MemType::Float) => true,
        (MemType::Double, MemType::Double) => true,
        (MemType::Ptr(_), MemType::Ptr(_)) => true,
        (MemType::Array(n1, e1), MemType::Array(n2, e2)) => n1 == n2 && compat_mem_types(e1, e2),
        (MemType::Vec(n1, e1), MemType::Vec(n2, e2)) => n1 == n2 && compat_mem_types(e1, e2),
        (MemType::Struct(s1), MemType::Struct(s2)) => {
            s1.packed() == s2.packed()
                && s1.fields.len() == s2.fields.len()
                && s1.fields.iter().zip(s2.fields.iter()).all(|(x, y)| compat_mem_types(x, y))
        }
        (MemType::Metadata, MemType::Metadata) => true,
        _ => false,
    }
}

/// Equates void-to-void; otherwise defers to `compat_mem_types`.
pub fn compat_ret_types(a: &RetType, b: &RetType) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => compat_mem_types(x, y),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ints_compatible_iff_same_width() {
        assert!(compat_mem_types(&MemType::Int(32), &MemType::Int(32)));
        assert!(!compat_mem_types(&MemType::Int(32), &MemType::Int(64)));
    }

    #[test]
    fn pointers_compatible_regardless_of_pointee() {
        let p8 = MemType::Ptr(Box::new(SymType::MemType(MemType::Int(8))));
        let p64 = MemType::Ptr(Box::new(SymType::MemType(MemType::Int(64))));
        assert!(compat_mem_types(&p8, &p64));
    }

    #[test]
    fn void_ret_types_are_mutually_compatible_only() {
        assert!(compat_ret_types(&None, &None));
        assert!(!compat_ret_types(&None, &Some(MemType::Int(32))));
    }

    #[test]
    fn arrays_require_equal_length_and_compatible_element() {
        let a = MemType::Array(4, Box::new(MemType::Int(8)));
        let b = MemType::Array(4, Box::new(MemType::Int(8)));
        let c = MemType::Array(5, Box::new(MemType::Int(8)));
        assert!(compat_mem_types(&a, &b));
        assert!(!compat_mem_types(&a, &c));
    }

    #[test]
    fn cross_sort_pairings_are_incompatible() {
        assert!(!compat_mem_types(&MemType::Int(32), &MemType::Float));
    }
}
