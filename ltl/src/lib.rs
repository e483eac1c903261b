//! LLVM Type Lifter (LTL): resolves a module's named type declarations
//! (possibly mutually referential) into a closed, self-consistent symbolic
//! type system suitable for memory-model reasoning.
//!
//! The entry point is [`mk_context`], which turns a data layout, an
//! unnamed-metadata map, and a list of `(Ident, RawType)` declarations into
//! an immutable [`LLVMContext`] plus a structured list of [`LiftError`]s.
//! The resolver never throws: every unsupported construct becomes an
//! `UnsupportedType` sentinel, so one bad declaration never stops the rest
//! of the module from lifting (spec §4.6).
//!
//! - [`ident`]: `Ident`/`IdentTable`, the interned identifiers naming
//!   declarations.
//! - [`raw`]: `RawType`, the input alphabet `tcType` recurses over.
//! - [`sym_type`]: `SymType`/`MemType`/`RetType`/`StructInfo`/`FunDecl`, the
//!   lifted output types, plus `compat_mem_types`/`compat_ret_types`.
//! - [`metadata`]: `ValMd`/`MetadataMap`, the opaque unnamed-metadata
//!   carrier.
//! - [`error`]: `LiftError`, the two structured error kinds.
//! - [`resolver`] (private): the `Pending`/`Active`/`Resolved` state
//!   machine implementing `tcIdent`/`tcType`.
//! - [`context`]: `mk_context` and the read-only query layer
//!   (`LLVMContext::{lookup_alias, as_mem_type, lift_type, ...}`).

mod resolver;

pub mod context;
pub mod error;
pub mod ident;
pub mod metadata;
pub mod raw;
pub mod sym_type;

pub use context::{mk_context, LLVMContext};
pub use error::LiftError;
pub use ident::{Ident, IdentTable};
pub use metadata::{MetadataMap, ValMd};
pub use raw::RawType;
pub use sym_type::{compat_mem_types, compat_ret_types, FunDecl, MemType, RetType, StructInfo, SymType};
