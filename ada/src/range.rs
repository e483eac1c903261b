//! `ValueRange<T>`: a singleton or closed-below/closed-above interval over
//! a totally ordered carrier, plus the range algebra from spec §4.1 —
//! join, addition, scalar and range multiplication, overlap/disjointness,
//! and the `Some(true)/Some(false)/None` three-way comparisons.

use crate::bound::{bound_max, bound_min, hi_le_lo, hi_lt_lo, lift2, ValueBound};
use crate::numeric::Numeric;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueRange<T> {
    Single(T),
    Multi(ValueBound<T>, ValueBound<T>),
}

impl<T: Ord + Copy> ValueRange<T> {
    pub fn single(t: T) -> ValueRange<T> {
        ValueRange::Single(t)
    }

    /// Builds a `Multi`, normalizing `Multi(Inclusive(t), Inclusive(t))` down
    /// to `Single(t)` per the spec's equal-meaning invariant. Panics (in
    /// debug builds) if `lo > hi`, which would violate the range invariant.
    pub fn multi(lo: ValueBound<T>, hi: ValueBound<T>) -> ValueRange<T> {
        if let (ValueBound::Inclusive(l), ValueBound::Inclusive(h)) = (lo, hi) {
            debug_assert!(l <= h, "ValueRange::multi built with lo > hi");
            if l == h {
                return ValueRange::Single(l);
            }
        }
        ValueRange::Multi(lo, hi)
    }

    pub fn lo(&self) -> ValueBound<T> {
        match *self {
            ValueRange::Single(t) => ValueBound::Inclusive(t),
            ValueRange::Multi(lo, _) => lo,
        }
    }

    pub fn hi(&self) -> ValueBound<T> {
        match *self {
            ValueRange::Single(t) => ValueBound::Inclusive(t),
            ValueRange::Multi(_, hi) => hi,
        }
    }

    pub fn contains(&self, t: T) -> bool
    where
        T: Numeric,
    {
        let above_lo = match self.lo() {
            ValueBound::Unbounded => true,
            ValueBound::Inclusive(l) => l <= t,
        };
        let below_hi = match self.hi() {
            ValueBound::Unbounded => true,
            ValueBound::Inclusive(h) => t <= h,
        };
        above_lo && below_hi
    }

    /// Singletons with equal values collapse to a singleton; otherwise the
    /// join is `Multi(min(lo_x, lo_y), max(hi_x, hi_y))`.
    pub fn join(a: &ValueRange<T>, b: &ValueRange<T>) -> ValueRange<T> {
        if let (ValueRange::Single(x), ValueRange::Single(y)) = (a, b) {
            if x == y {
                return ValueRange::Single(*x);
            }
        }
        ValueRange::multi(bound_min(a.lo(), b.lo()), bound_max(a.hi(), b.hi()))
    }

    /// Ranges are disjoint iff `hi_x < lo_y` or `hi_y < lo_x`. An unbounded
    /// bound on the relevant side never makes them disjoint.
    pub fn disjoint(a: &ValueRange<T>, b: &ValueRange<T>) -> bool {
        hi_lt_lo(a.hi(), b.lo()) || hi_lt_lo(b.hi(), a.lo())
    }

    pub fn overlap(a: &ValueRange<T>, b: &ValueRange<T>) -> bool {
        !ValueRange::disjoint(a, b)
    }

    /// `Some(false)` if disjoint; `Some(c_x == c_y)` if both singletons;
    /// `None` otherwise.
    pub fn check_eq(a: &ValueRange<T>, b: &ValueRange<T>) -> Option<bool> {
        if ValueRange::disjoint(a, b) {
            return Some(false);
        }
        if let (ValueRange::Single(x), ValueRange::Single(y)) = (a, b) {
            return Some(x == y);
        }
        None
    }

    /// `Some(true)` if `hi_x <= lo_y`; `Some(false)` if `hi_y < lo_x`; else
    /// `None`.
    pub fn check_le(a: &ValueRange<T>, b: &ValueRange<T>) -> Option<bool> {
        if hi_le_lo(a.hi(), b.lo()) {
            Some(true)
        } else if hi_lt_lo(b.hi(), a.lo()) {
            Some(false)
        } else {
            None
        }
    }
}

/// A bound's value extended with a signed infinity, used only inside
/// [`ValueRange::mul`] to combine corner products without losing the sign
/// an `Unbounded` `ValueBound` carries implicitly (negative as a lower
/// bound, positive as an upper bound).
#[derive(Clone, Copy)]
enum Corner<T> {
    NegInf,
    Finite(T),
    PosInf,
}

impl<T: Numeric> Corner<T> {
    fn of(b: ValueBound<T>, is_lower: bool) -> Corner<T> {
        match b {
            ValueBound::Inclusive(t) => Corner::Finite(t),
            ValueBound::Unbounded => {
                if is_lower {
                    Corner::NegInf
                } else {
                    Corner::PosInf
                }
            }
        }
    }

    fn negate(self) -> Corner<T> {
        match self {
            Corner::NegInf => Corner::PosInf,
            Corner::PosInf => Corner::NegInf,
            Corner::Finite(t) => Corner::Finite(t),
        }
    }

    fn into_lo_bound(self) -> ValueBound<T> {
        match self {
            Corner::NegInf => ValueBound::Unbounded,
            Corner::Finite(t) => ValueBound::Inclusive(t),
            Corner::PosInf => unreachable!("a product range's minimum corner cannot be +infinity"),
        }
    }

    fn into_hi_bound(self) -> ValueBound<T> {
        match self {
            Corner::PosInf => ValueBound::Unbounded,
            Corner::Finite(t) => ValueBound::Inclusive(t),
            Corner::NegInf => unreachable!("a product range's maximum corner cannot be -infinity"),
        }
    }
}

/// One corner product `a·b`, given whether each bound is a lower or upper
/// bound (so an `Unbounded` side resolves to the right signed infinity).
/// `infinity × 0 = 0`; `infinity × positive` keeps its sign; `infinity ×
/// negative` flips it; `infinity × infinity` multiplies the signs.
fn corner_mul<T: Numeric>(a: ValueBound<T>, a_is_lower: bool, b: ValueBound<T>, b_is_lower: bool) -> Corner<T> {
    match (Corner::of(a, a_is_lower), Corner::of(b, b_is_lower)) {
        (Corner::Finite(x), Corner::Finite(y)) => Corner::Finite(x * y),
        (Corner::Finite(x), inf) | (inf, Corner::Finite(x)) => {
            if x == T::ZERO {
                Corner::Finite(T::ZERO)
            } else if x.is_negative() {
                inf.negate()
            } else {
                inf
            }
        }
        (a_inf, b_inf) => {
            let negative = matches!(a_inf, Corner::NegInf) != matches!(b_inf, Corner::NegInf);
            if negative {
                Corner::NegInf
            } else {
                Corner::PosInf
            }
        }
    }
}

fn corner_min<T: Ord>(acc: Corner<T>, c: Corner<T>) -> Corner<T> {
    match (acc, c) {
        (Corner::NegInf, _) | (_, Corner::NegInf) => Corner::NegInf,
        (Corner::PosInf, other) | (other, Corner::PosInf) => other,
        (Corner::Finite(x), Corner::Finite(y)) => Corner::Finite(x.min(y)),
    }
}

fn corner_max<T: Ord>(acc: Corner<T>, c: Corner<T>) -> Corner<T> {
    match (acc, c) {
        (Corner::PosInf, _) | (_, Corner::PosInf) => Corner::PosInf,
        (Corner::NegInf, other) | (other, Corner::NegInf) => other,
        (Corner::Finite(x), Corner::Finite(y)) => Corner::Finite(x.max(y)),
    }
}

impl<T: Numeric> ValueRange<T> {
    /// Pointwise addition of bounds. `Single + Multi` falls out of the same
    /// formula since a singleton's lo/hi are both `Inclusive(t)`.
    pub fn add(a: &ValueRange<T>, b: &ValueRange<T>) -> ValueRange<T> {
        if let (ValueRange::Single(x), ValueRange::Single(y)) = (a, b) {
            return ValueRange::Single(*x + *y);
        }
        ValueRange::multi(lift2(a.lo(), b.lo(), |x, y| x + y), lift2(a.hi(), b.hi(), |x, y| x + y))
    }

    /// Scalar multiplication by `k`. `k = 0` collapses to `Single(0)`
    /// regardless of unboundedness (an unbounded range times zero is still
    /// exactly zero); `k > 0` scales both bounds in place; `k < 0` swaps
    /// and scales so `lo` stays the minimum.
    pub fn scalar_mul(r: &ValueRange<T>, k: T) -> ValueRange<T> {
        if k == T::ZERO {
            return ValueRange::Single(T::ZERO);
        }
        if let ValueRange::Single(x) = r {
            return ValueRange::Single(*x * k);
        }
        let (lo, hi) = (r.lo(), r.hi());
        if k.is_negative() {
            ValueRange::multi(
                crate::bound::lift1(hi, |h| h * k),
                crate::bound::lift1(lo, |l| l * k),
            )
        } else {
            ValueRange::multi(
                crate::bound::lift1(lo, |l| l * k),
                crate::bound::lift1(hi, |h| h * k),
            )
        }
    }

    /// Range multiplication via the four corner products `lx·ly, lx·uy,
    /// ux·ly, ux·uy` (spec §4.1's case split is this same rule, specialized
    /// per sign combination; written out here as corners directly because
    /// the specialized cases stop being mutually exclusive the moment one
    /// operand straddles zero and the other doesn't — e.g. `x` straddling
    /// with `y` positive-only still needs the `ux·uy` corner, which none of
    /// the non-straddle-pair cases name). Each corner is computed with
    /// explicit signed-infinity handling, since an `Unbounded` lower bound
    /// is `-infinity` and an `Unbounded` upper bound is `+infinity` — the
    /// plain `lift2`-based lifting `add`/`scalar_mul` use can't tell those
    /// apart and would conflate a corner that limits to `-infinity` with
    /// one that limits to `+infinity`.
    pub fn mul(a: &ValueRange<T>, b: &ValueRange<T>) -> ValueRange<T> {
        if let ValueRange::Single(k) = a {
            return ValueRange::scalar_mul(b, *k);
        }
        if let ValueRange::Single(k) = b {
            return ValueRange::scalar_mul(a, *k);
        }

        let (lx, ux) = (a.lo(), a.hi());
        let (ly, uy) = (b.lo(), b.hi());

        let corners = [
            corner_mul(lx, true, ly, true),
            corner_mul(lx, true, uy, false),
            corner_mul(ux, false, ly, true),
            corner_mul(ux, false, uy, false),
        ];

        let lo = corners.iter().copied().fold(Corner::PosInf, corner_min).into_lo_bound();
        let hi = corners.iter().copied().fold(Corner::NegInf, corner_max).into_hi_bound();

        ValueRange::multi(lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Integer;

    type R = ValueRange<Integer>;
    type B = ValueBound<Integer>;

    fn multi(lo: Integer, hi: Integer) -> R {
        R::multi(B::Inclusive(lo), B::Inclusive(hi))
    }

    #[test]
    fn multi_with_equal_bounds_normalizes_to_single() {
        assert_eq!(R::multi(B::Inclusive(3), B::Inclusive(3)), R::Single(3));
    }

    #[test]
    fn join_of_equal_singletons_is_singleton() {
        assert_eq!(R::join(&R::Single(4), &R::Single(4)), R::Single(4));
    }

    #[test]
    fn join_is_idempotent_and_commutative() {
        let r = multi(-2, 5);
        let s = multi(1, 9);
        assert_eq!(R::join(&r, &r), r);
        assert_eq!(R::join(&r, &s), R::join(&s, &r));
    }

    #[test]
    fn mul_straddling_zero_matches_worked_example() {
        // mulRange(Multi(-2, 3), Multi(-4, 5)) = Multi(-12, 15)
        let x = multi(-2, 3);
        let y = multi(-4, 5);
        assert_eq!(R::mul(&x, &y), multi(-12, 15));
    }

    #[test]
    fn mul_both_positive() {
        let x = multi(2, 3);
        let y = multi(4, 5);
        assert_eq!(R::mul(&x, &y), multi(8, 15));
    }

    #[test]
    fn mul_both_negative() {
        let x = multi(-5, -2);
        let y = multi(-4, -1);
        assert_eq!(R::mul(&x, &y), multi(2, 20));
    }

    #[test]
    fn mul_is_commutative_on_sampled_ranges() {
        let ranges = [multi(-3, 2), multi(1, 4), multi(-5, -1), R::Single(0), R::Single(-7)];
        for x in &ranges {
            for y in &ranges {
                assert_eq!(R::mul(x, y), R::mul(y, x), "mul not commutative for {:?} * {:?}", x, y);
            }
        }
    }

    #[test]
    fn mul_with_unbounded_side_is_unbounded_unless_zero() {
        let unbounded_below = R::multi(B::Unbounded, B::Inclusive(5));
        let pos = multi(1, 2);
        let result = R::mul(&unbounded_below, &pos);
        assert_eq!(result.lo(), B::Unbounded);

        let zero = R::Single(0);
        assert_eq!(R::mul(&unbounded_below, &zero), R::Single(0));
    }

    #[test]
    fn scalar_mul_by_negative_swaps_bounds() {
        let r = multi(1, 4);
        assert_eq!(R::scalar_mul(&r, -2), multi(-8, -2));
    }

    #[test]
    fn add_is_commutative_and_pointwise() {
        let x = multi(-2, 3);
        let y = multi(1, 1);
        assert_eq!(R::add(&x, &y), multi(-1, 4));
        assert_eq!(R::add(&x, &y), R::add(&y, &x));
    }

    #[test]
    fn disjoint_ranges_never_overlap() {
        let x = multi(0, 2);
        let y = multi(3, 5);
        assert!(R::disjoint(&x, &y));
        assert!(!R::overlap(&x, &y));
        assert_eq!(R::check_eq(&x, &y), Some(false));
    }

    #[test]
    fn unbounded_side_never_counts_as_disjoint() {
        let x = R::multi(B::Unbounded, B::Inclusive(2));
        let y = multi(3, 5);
        assert!(!R::disjoint(&x, &y));
    }

    #[test]
    fn check_le_three_way() {
        assert_eq!(R::check_le(&multi(0, 2), &multi(3, 5)), Some(true));
        assert_eq!(R::check_le(&multi(3, 5), &multi(0, 2)), Some(false));
        assert_eq!(R::check_le(&multi(0, 4), &multi(2, 6)), None);
    }

    #[test]
    fn soundness_of_add_and_mul_over_sampled_members() {
        let rs = [multi(-3, 2), multi(1, 4), R::Single(-1)];
        for r in &rs {
            for s in &rs {
                for a in -3..=4 {
                    for b in -3..=4 {
                        if r.contains(a) && s.contains(b) {
                            assert!(R::add(r, s).contains(a + b));
                            assert!(R::mul(r, s).contains(a * b));
                        }
                    }
                }
            }
        }
    }
}
