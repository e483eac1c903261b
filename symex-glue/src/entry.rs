//! Function-name interning — the "peripheral glue" named in spec §1. Same
//! bidirectional map/vector shape as `ltl::ident::IdentTable`, kept as a
//! separate small type rather than shared with `ltl` because the two name
//! two different universes (LLVM type names vs. function names) that
//! happen to want the same interning trick.

use rustc_hash::FxHashMap;

/// The simulator's reserved entry-point name (spec §6, "Constants").
pub const ENTRY_POINT_NAME: &str = "_start";

/// A small `Copy` index into a [`FunctionTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionName(u32);

/// Interns function names, with [`ENTRY_POINT_NAME`] pre-interned at
/// index 0 so every fresh table already has a name for the simulator's
/// entry point.
pub struct FunctionTable {
    map: FxHashMap<String, u32>,
    names: Vec<String>,
    entry_point: FunctionName,
}

impl Default for FunctionTable {
    fn default() -> FunctionTable {
        FunctionTable::new()
    }
}

impl FunctionTable {
    pub fn new() -> FunctionTable {
        let mut t = FunctionTable { map: FxHashMap::default(), names: Vec::new(), entry_point: FunctionName(0) };
        t.entry_point = t.intern(ENTRY_POINT_NAME);
        t
    }

    pub fn entry_point(&self) -> FunctionName {
        self.entry_point
    }

    pub fn intern(&mut self, name: &str) -> FunctionName {
        if let Some(&idx) = self.map.get(name) {
            return FunctionName(idx);
        }
        let idx = self.names.len() as u32;
        self.names.push(name.to_owned());
        self.map.insert(name.to_owned(), idx);
        FunctionName(idx)
    }

    pub fn get(&self, name: FunctionName) -> &str {
        &self.names[name.0 as usize]
    }

    pub fn is_entry_point(&self, name: FunctionName) -> bool {
        name == self.entry_point
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_table_has_entry_point_preinterned() {
        let t = FunctionTable::new();
        assert_eq!(t.get(t.entry_point()), ENTRY_POINT_NAME);
        assert!(t.is_entry_point(t.entry_point()));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn interning_entry_point_name_again_yields_same_handle() {
        let mut t = FunctionTable::new();
        let again = t.intern(ENTRY_POINT_NAME);
        assert_eq!(again, t.entry_point());
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn distinct_names_get_distinct_handles() {
        let mut t = FunctionTable::new();
        let main = t.intern("main");
        let helper = t.intern("helper");
        assert_ne!(main, helper);
        assert!(!t.is_entry_point(main));
    }
}
