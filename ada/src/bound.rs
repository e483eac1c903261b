//! `ValueBound<T>`: either side of a [`crate::range::ValueRange`]. Unbounded
//! is kept as an explicit variant rather than a sentinel extreme value so
//! bound arithmetic stays total and free of signed-overflow traps (spec
//! §9, "avoid sentinel extreme integers").

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueBound<T> {
    Unbounded,
    Inclusive(T),
}

impl<T: Copy> ValueBound<T> {
    pub fn value(self) -> Option<T> {
        match self {
            ValueBound::Unbounded => None,
            ValueBound::Inclusive(t) => Some(t),
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, ValueBound::Unbounded)
    }
}

/// Lifts a binary operator over two bounds: if either side is `Unbounded`,
/// the result is `Unbounded` (spec §3.1). Used for both `min`/`max`
/// (join's lower/upper bound, where the unbounded side is already the
/// extremal value so propagating `Unbounded` is correct) and for pointwise
/// arithmetic (`add`, scalar `mul`).
pub fn lift2<T: Copy>(a: ValueBound<T>, b: ValueBound<T>, f: impl FnOnce(T, T) -> T) -> ValueBound<T> {
    match (a, b) {
        (ValueBound::Inclusive(x), ValueBound::Inclusive(y)) => ValueBound::Inclusive(f(x, y)),
        _ => ValueBound::Unbounded,
    }
}

pub fn lift1<T: Copy>(a: ValueBound<T>, f: impl FnOnce(T) -> T) -> ValueBound<T> {
    match a {
        ValueBound::Inclusive(x) => ValueBound::Inclusive(f(x)),
        ValueBound::Unbounded => ValueBound::Unbounded,
    }
}

pub fn bound_min<T: Ord + Copy>(a: ValueBound<T>, b: ValueBound<T>) -> ValueBound<T> {
    lift2(a, b, |x, y| x.min(y))
}

pub fn bound_max<T: Ord + Copy>(a: ValueBound<T>, b: ValueBound<T>) -> ValueBound<T> {
    lift2(a, b, |x, y| x.max(y))
}

/// Is `hi` (as an upper bound, `Unbounded` meaning `+infinity`) strictly
/// less than `lo` (as a lower bound, `Unbounded` meaning `-infinity`)?
/// `Unbounded` on either side can never make this true — an unbounded hi is
/// never less than anything, and nothing is ever less than an unbounded lo.
pub fn hi_lt_lo<T: Ord + Copy>(hi: ValueBound<T>, lo: ValueBound<T>) -> bool {
    match (hi, lo) {
        (ValueBound::Inclusive(h), ValueBound::Inclusive(l)) => h < l,
        _ => false,
    }
}

/// Is `hi` (upper bound) `<=` `lo'` (lower bound of the other range)? Used
/// by `rangeCheckLe`. Only ever true when both sides are finite.
pub fn hi_le_lo<T: Ord + Copy>(hi: ValueBound<T>, lo: ValueBound<T>) -> bool {
    match (hi, lo) {
        (ValueBound::Inclusive(h), ValueBound::Inclusive(l)) => h <= l,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Integer;

    type B = ValueBound<Integer>;

    #[test]
    fn lift2_propagates_unbounded() {
        assert_eq!(lift2(B::Unbounded, B::Inclusive(3), |x, y| x + y), B::Unbounded);
        assert_eq!(lift2(B::Inclusive(2), B::Inclusive(3), |x, y| x + y), B::Inclusive(5));
    }

    #[test]
    fn hi_lt_lo_is_false_when_either_unbounded() {
        assert!(!hi_lt_lo(B::Unbounded, B::Inclusive(0)));
        assert!(!hi_lt_lo(B::Inclusive(0), B::Unbounded));
        assert!(hi_lt_lo(B::Inclusive(1), B::Inclusive(2)));
        assert!(!hi_lt_lo(B::Inclusive(2), B::Inclusive(1)));
    }

    #[test]
    fn bound_min_max_are_pointwise() {
        assert_eq!(bound_min(B::Inclusive(3), B::Inclusive(1)), B::Inclusive(1));
        assert_eq!(bound_max(B::Inclusive(3), B::Inclusive(1)), B::Inclusive(3));
    }
}
