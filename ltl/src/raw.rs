//! The minimal alphabet of LLVM type constructors the lifter's structural
//! recursion (`tcType`, spec §4.4) matches on. Parsing LLVM text/bitcode
//! into this shape is explicitly out of scope (spec §1 — the parsed LLVM
//! AST is an external collaborator); `RawType` is the target representation
//! a frontend would build, kept small enough that tests and the CLI's
//! ad hoc textual format (see `symex_glue::decls`) can construct it by hand.

use crate::ident::Ident;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RawType {
    Int(u32),
    Float,
    Double,
    Void,
    Metadata,
    /// Any other LLVM primitive this lifter doesn't special-case (`x86_fp80`,
    /// `ppc_fp128`, ...) — always lifts to `UnsupportedType`.
    OtherPrimitive(String),
    Alias(Ident),
    Array(u64, Box<RawType>),
    Vector(u64, Box<RawType>),
    Ptr(Box<RawType>),
    Struct(Vec<RawType>),
    PackedStruct(Vec<RawType>),
    FunTy(Box<RawType>, Vec<RawType>, bool),
    Opaque,
}

impl RawType {
    pub fn ptr(elem: RawType) -> RawType {
        RawType::Ptr(Box::new(elem))
    }

    pub fn array(n: u64, elem: RawType) -> RawType {
        RawType::Array(n, Box::new(elem))
    }

    pub fn vector(n: u64, elem: RawType) -> RawType {
        RawType::Vector(n, Box::new(elem))
    }

    pub fn fun_ty(ret: RawType, args: Vec<RawType>, vararg: bool) -> RawType {
        RawType::FunTy(Box::new(ret), args, vararg)
    }
}
