//! The two structured, never-thrown error kinds from spec §7. Both are
//! accumulated in a set during `mkContext` (or a query-mode lift) so
//! duplicate reports collapse; `Resolver::into_errors` returns the
//! resulting list in a deterministic (sorted-by-rendering) order.

use thiserror::Error;

use crate::ident::Ident;
use crate::raw::RawType;

#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum LiftError {
    /// A raw type constructor could not be mapped to any `SymType`/
    /// `MemType`: an unknown primitive, or a composite whose element is
    /// itself unsupported.
    #[error("unsupported type: {0:?}")]
    UnsupportedType(RawType),
    /// An alias reference either pointed at an identifier with no
    /// declaration, or participated in a recursive cycle that could not be
    /// broken without a pointer indirection.
    #[error("unresolvable identifier: {0:?}")]
    UnresolvableIdent(Ident),
}
