//! The sort taxonomy indexing the abstract-value family (`ada`) and, loosely,
//! the memory-type shapes produced by the type lifter (`ltl`).
//!
//! A `Sort` is a recursive description of "what kind of value" something is,
//! independent of whether that value is concrete or abstract. `ada` builds
//! its per-sort dispatch tables over this enum; `ltl` does not depend on it
//! directly, but a simulator wiring both cores together uses `Sort` to line
//! abstract values up against lifted memory types without re-deriving the
//! taxonomy in two places.

/// One of the base type categories a value (concrete or abstract) can
/// inhabit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sort {
    Bool,
    Nat,
    Integer,
    Real,
    /// Fixed-width bit-vector. The width is carried on the sort because the
    /// BV domain is width-indexed end to end.
    Bv(u32),
    Complex,
    /// Array sort; the index sort is tracked only for documentation — every
    /// operation on arrays ignores it and recurses on the element sort.
    Array { index: Box<Sort>, element: Box<Sort> },
    Struct(Vec<Sort>),
}

impl Sort {
    pub fn bv(width: u32) -> Sort {
        Sort::Bv(width)
    }

    pub fn array(index: Sort, element: Sort) -> Sort {
        Sort::Array { index: Box::new(index), element: Box::new(element) }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Sort::Nat | Sort::Integer | Sort::Real | Sort::Bv(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_ignores_index_sort_in_equality_by_construction() {
        let a = Sort::array(Sort::Integer, Sort::Bool);
        let b = Sort::array(Sort::Nat, Sort::Bool);
        // Different index sorts are still different `Sort` values; callers
        // that want "ignore the index" semantics recurse on `element`
        // themselves (see ada::dispatch::join).
        assert_ne!(a, b);
        assert_eq!(
            matches!(a, Sort::Array { ref element, .. } if **element == Sort::Bool),
            true
        );
    }
}
