//! The sort-indexed `AbstractValue`/`ConcreteValue` families from spec §3.1.
//! Rust has no dependent sort index, so both are plain enums; [`crate::dispatch`]
//! is what actually enforces that a given [`sorts::Sort`] and `AbstractValue`
//! variant agree with each other.

use bvdomain::BvDomain;

use crate::nat::NatValueRange;
use crate::numeric::{Integer, Rational};
use crate::range::ValueRange;
use crate::rav::RealAbstractValue;
use crate::tri::TriState;

#[derive(Clone, Debug, PartialEq)]
pub enum AbstractValue {
    Bool(TriState),
    Nat(NatValueRange),
    Integer(ValueRange<Integer>),
    Real(RealAbstractValue),
    Bv(BvDomain),
    Complex(RealAbstractValue, RealAbstractValue),
    /// The index sort is not represented here — every operation on arrays
    /// recurses straight into the element abstraction (spec §4.3).
    Array(Box<AbstractValue>),
    Struct(Vec<AbstractValue>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConcreteValue {
    Bool(bool),
    Nat(u64),
    Integer(Integer),
    Real(Rational),
    Bv { width: u32, value: u128 },
    Complex(Rational, Rational),
    /// Concrete arrays are not modeled element-wise at this layer — only
    /// the element sort's abstraction matters to ADA, so the concrete
    /// carrier collapses to unit (spec §3.1: "unit for arrays").
    Array,
    Struct(Vec<ConcreteValue>),
}
