//! Sort-indexed dispatch (spec §4.3): `join`, `overlap`, and the derived
//! `top`/`single`/`contains` operations, unified over one `Sort` + `AbstractValue`
//! pair per the teacher's "tagged sort representative + single big match"
//! architecture (spec §9 design note — chosen over a trait/vtable per sort
//! because it keeps the join/overlap tables in one legible place).

use bvdomain::BvDomain;
use sorts::Sort;

use crate::bound::ValueBound;
use crate::nat::NatValueRange;
use crate::range::ValueRange;
use crate::rav::RealAbstractValue;
use crate::tri::TriState;
use crate::value::{AbstractValue, ConcreteValue};

fn mismatch(sort: &Sort, what: &str) -> ! {
    panic!("ada: sort/value mismatch ({:?} is not a {})", sort, what)
}

/// Upper bound in the lattice per sort.
pub fn join(sort: &Sort, a: &AbstractValue, b: &AbstractValue) -> AbstractValue {
    match (sort, a, b) {
        (Sort::Bool, AbstractValue::Bool(x), AbstractValue::Bool(y)) => {
            AbstractValue::Bool(TriState::join(*x, *y))
        }
        (Sort::Nat, AbstractValue::Nat(x), AbstractValue::Nat(y)) => {
            AbstractValue::Nat(NatValueRange::join(x, y))
        }
        (Sort::Integer, AbstractValue::Integer(x), AbstractValue::Integer(y)) => {
            AbstractValue::Integer(ValueRange::join(x, y))
        }
        (Sort::Real, AbstractValue::Real(x), AbstractValue::Real(y)) => {
            AbstractValue::Real(RealAbstractValue::join(x, y))
        }
        (Sort::Bv(w), AbstractValue::Bv(x), AbstractValue::Bv(y)) => {
            debug_assert_eq!(x.width(), *w);
            AbstractValue::Bv(BvDomain::union(x, y))
        }
        (Sort::Complex, AbstractValue::Complex(xr, xi), AbstractValue::Complex(yr, yi)) => {
            AbstractValue::Complex(RealAbstractValue::join(xr, yr), RealAbstractValue::join(xi, yi))
        }
        (Sort::Array { element, .. }, AbstractValue::Array(x), AbstractValue::Array(y)) => {
            AbstractValue::Array(Box::new(join(element, x, y)))
        }
        (Sort::Struct(field_sorts), AbstractValue::Struct(xs), AbstractValue::Struct(ys)) => {
            AbstractValue::Struct(
                field_sorts
                    .iter()
                    .zip(xs.iter().zip(ys.iter()))
                    .map(|(s, (x, y))| join(s, x, y))
                    .collect(),
            )
        }
        _ => mismatch(sort, "value matching this sort"),
    }
}

/// Could `a` and `b` share a concrete value?
pub fn overlap(sort: &Sort, a: &AbstractValue, b: &AbstractValue) -> bool {
    match (sort, a, b) {
        (Sort::Bool, AbstractValue::Bool(x), AbstractValue::Bool(y)) => TriState::overlap(*x, *y),
        (Sort::Nat, AbstractValue::Nat(x), AbstractValue::Nat(y)) => NatValueRange::overlap(x, y),
        (Sort::Integer, AbstractValue::Integer(x), AbstractValue::Integer(y)) => {
            ValueRange::overlap(x, y)
        }
        (Sort::Real, AbstractValue::Real(x), AbstractValue::Real(y)) => RealAbstractValue::overlap(x, y),
        (Sort::Bv(w), AbstractValue::Bv(x), AbstractValue::Bv(y)) => {
            debug_assert_eq!(x.width(), *w);
            BvDomain::overlap(x, y)
        }
        (Sort::Complex, AbstractValue::Complex(xr, xi), AbstractValue::Complex(yr, yi)) => {
            RealAbstractValue::overlap(xr, yr) && RealAbstractValue::overlap(xi, yi)
        }
        (Sort::Array { element, .. }, AbstractValue::Array(x), AbstractValue::Array(y)) => {
            overlap(element, x, y)
        }
        (Sort::Struct(field_sorts), AbstractValue::Struct(xs), AbstractValue::Struct(ys)) => {
            field_sorts.iter().zip(xs.iter().zip(ys.iter())).all(|(s, (x, y))| overlap(s, x, y))
        }
        _ => mismatch(sort, "value matching this sort"),
    }
}

/// The greatest abstract value per sort.
pub fn top(sort: &Sort) -> AbstractValue {
    match sort {
        Sort::Bool => AbstractValue::Bool(TriState::Unknown),
        Sort::Nat => AbstractValue::Nat(NatValueRange::top()),
        Sort::Integer => AbstractValue::Integer(ValueRange::multi(ValueBound::Unbounded, ValueBound::Unbounded)),
        Sort::Real => AbstractValue::Real(RealAbstractValue::top()),
        Sort::Bv(w) => AbstractValue::Bv(BvDomain::any(*w)),
        Sort::Complex => AbstractValue::Complex(RealAbstractValue::top(), RealAbstractValue::top()),
        Sort::Array { element, .. } => AbstractValue::Array(Box::new(top(element))),
        Sort::Struct(field_sorts) => AbstractValue::Struct(field_sorts.iter().map(top).collect()),
    }
}

/// The minimal abstract value containing exactly one concrete value.
pub fn single(sort: &Sort, concrete: &ConcreteValue) -> AbstractValue {
    match (sort, concrete) {
        (Sort::Bool, ConcreteValue::Bool(b)) => AbstractValue::Bool(TriState::of(*b)),
        (Sort::Nat, ConcreteValue::Nat(n)) => AbstractValue::Nat(NatValueRange::single(*n)),
        (Sort::Integer, ConcreteValue::Integer(n)) => AbstractValue::Integer(ValueRange::single(*n)),
        (Sort::Real, ConcreteValue::Real(q)) => AbstractValue::Real(RealAbstractValue::single(*q)),
        (Sort::Bv(w), ConcreteValue::Bv { width, value }) => {
            debug_assert_eq!(w, width);
            AbstractValue::Bv(BvDomain::singleton(*w, *value))
        }
        (Sort::Complex, ConcreteValue::Complex(re, im)) => {
            AbstractValue::Complex(RealAbstractValue::single(*re), RealAbstractValue::single(*im))
        }
        (Sort::Array { element, .. }, ConcreteValue::Array) => {
            // A concrete array carries no per-index information at this
            // layer (§3.1); the minimal abstraction is still the element
            // sort's top, not a single element value.
            AbstractValue::Array(Box::new(top(element)))
        }
        (Sort::Struct(field_sorts), ConcreteValue::Struct(fields)) => AbstractValue::Struct(
            field_sorts.iter().zip(fields.iter()).map(|(s, c)| single(s, c)).collect(),
        ),
        _ => mismatch(sort, "concrete value matching this sort"),
    }
}

/// Does `abs` contain `concrete`? Defined as `overlap(single(concrete), abs)`;
/// the boolean sort's `Unknown` already makes this universal via
/// `TriState::overlap`, so no extra case is needed here.
pub fn contains(sort: &Sort, concrete: &ConcreteValue, abs: &AbstractValue) -> bool {
    overlap(sort, &single(sort, concrete), abs)
}
