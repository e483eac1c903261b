//! `ValMd`: unnamed-metadata values, represented abstractly. Their real
//! internal structure belongs to the (out-of-scope) LLVM AST — the lifter
//! and its consumers only ever need identity and a printable rendering, so
//! this wraps a cheaply-cloned textual token rather than modeling metadata
//! nodes (spec SPEC_FULL §3, "concrete representation choices").

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ValMd(Arc<str>);

impl ValMd {
    pub fn new(text: impl AsRef<str>) -> ValMd {
        ValMd(Arc::from(text.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ValMd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValMd({:?})", self.0)
    }
}

impl fmt::Display for ValMd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The unnamed-metadata map `mkContext` is handed (spec §6): metadata
/// indices are plain `u32`s assigned by the (out-of-scope) frontend.
pub type MetadataMap = HashMap<u32, ValMd>;
