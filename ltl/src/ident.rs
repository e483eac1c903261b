//! Interning for named type identifiers. Shaped after the teacher's
//! historical `Interner<T>` (`src/libsyntax/util/interner.rs`) — a
//! bidirectional map/vector pair — but reimplemented against modern
//! idiomatic Rust: `FxHashMap`, no unsafe, no `@mut`.

use rustc_hash::FxHashMap;

/// A small `Copy` index into an [`IdentTable`]'s string table. Two `Ident`s
/// compare equal iff they were interned from the same name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ident(u32);

/// The bidirectional name table `Ident` indexes into.
#[derive(Default)]
pub struct IdentTable {
    map: FxHashMap<String, u32>,
    names: Vec<String>,
}

impl IdentTable {
    pub fn new() -> IdentTable {
        IdentTable::default()
    }

    /// Interns `name`, returning the same `Ident` on repeat calls.
    pub fn intern(&mut self, name: &str) -> Ident {
        if let Some(&idx) = self.map.get(name) {
            return Ident(idx);
        }
        let idx = self.names.len() as u32;
        self.names.push(name.to_owned());
        self.map.insert(name.to_owned(), idx);
        Ident(idx)
    }

    pub fn get(&self, ident: Ident) -> &str {
        &self.names[ident.0 as usize]
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
    fn interning_same_name_twice_yields_same_ident() {
        let mut t = IdentTable::new();
        let a = t.intern("Node");
        let b = t.intern("Node");
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_names_get_distinct_idents() {
        let mut t = IdentTable::new();
        let a = t.intern("A");
        let b = t.intern("B");
        assert_ne!(a, b);
        assert_eq!(t.get(a), "A");
        assert_eq!(t.get(b), "B");
    }
}
