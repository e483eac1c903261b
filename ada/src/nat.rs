//! `NatValueRange`: mirrors `ValueRange<Integer>` but with a hard lower
//! bound of zero, for the `Nat` sort.

use crate::bound::{bound_max, ValueBound};
use crate::numeric::Integer;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NatValueRange {
    NatSingle(u64),
    NatMulti(u64, ValueBound<Integer>),
}

impl NatValueRange {
    pub fn single(n: u64) -> NatValueRange {
        NatValueRange::NatSingle(n)
    }

    /// Builds a `NatMulti`, normalizing to `NatSingle` when `hi` is the same
    /// finite value as `lo` (the same collapsing rule `ValueRange` applies).
    pub fn multi(lo: u64, hi: ValueBound<Integer>) -> NatValueRange {
        if let ValueBound::Inclusive(h) = hi {
            debug_assert!(h >= lo as Integer, "NatValueRange built with hi < lo");
            if h == lo as Integer {
                return NatValueRange::NatSingle(lo);
            }
        }
        NatValueRange::NatMulti(lo, hi)
    }

    pub fn lo(&self) -> u64 {
        match *self {
            NatValueRange::NatSingle(n) => n,
            NatValueRange::NatMulti(lo, _) => lo,
        }
    }

    pub fn hi(&self) -> ValueBound<Integer> {
        match *self {
            NatValueRange::NatSingle(n) => ValueBound::Inclusive(n as Integer),
            NatValueRange::NatMulti(_, hi) => hi,
        }
    }

    pub fn top() -> NatValueRange {
        NatValueRange::NatMulti(0, ValueBound::Unbounded)
    }

    pub fn contains(&self, n: u64) -> bool {
        let n = n as Integer;
        n >= self.lo() as Integer
            && match self.hi() {
                ValueBound::Unbounded => true,
                ValueBound::Inclusive(h) => n <= h,
            }
    }

    /// Normalizes to `NatSingle` iff both sides are the same singleton;
    /// otherwise `NatMulti(min(lo), max(hi))`.
    pub fn join(a: &NatValueRange, b: &NatValueRange) -> NatValueRange {
        if let (NatValueRange::NatSingle(x), NatValueRange::NatSingle(y)) = (a, b) {
            if x == y {
                return NatValueRange::NatSingle(*x);
            }
        }
        NatValueRange::multi(a.lo().min(b.lo()), bound_max(a.hi(), b.hi()))
    }

    pub fn overlap(a: &NatValueRange, b: &NatValueRange) -> bool {
        let disjoint = match (a.hi(), b.lo()) {
            (ValueBound::Inclusive(h), l) => (h as u64) < l,
            (ValueBound::Unbounded, _) => false,
        } || match (b.hi(), a.lo()) {
            (ValueBound::Inclusive(h), l) => (h as u64) < l,
            (ValueBound::Unbounded, _) => false,
        };
        !disjoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_of_equal_singletons_is_singleton() {
        assert_eq!(NatValueRange::join(&NatValueRange::single(3), &NatValueRange::single(3)), NatValueRange::single(3));
    }

    #[test]
    fn join_of_distinct_values_is_multi() {
        let joined = NatValueRange::join(&NatValueRange::single(1), &NatValueRange::single(4));
        assert_eq!(joined, NatValueRange::multi(1, ValueBound::Inclusive(4)));
    }

    #[test]
    fn lower_bound_never_goes_negative() {
        let r = NatValueRange::top();
        assert_eq!(r.lo(), 0);
        assert!(r.contains(0));
        assert!(r.contains(1_000_000));
    }

    #[test]
    fn overlap_respects_unbounded_hi() {
        let unbounded = NatValueRange::top();
        let small = NatValueRange::single(5);
        assert!(NatValueRange::overlap(&unbounded, &small));
    }
}
