//! Abstract Domain Algebra (ADA): a lattice of abstract values over a fixed
//! set of base sorts — booleans, naturals, integers, reals, bit-vectors,
//! complex numbers, arrays, and structs — with join, overlap, containment,
//! and arithmetic-propagation operators.
//!
//! Everything here is a pure, total function over immutable values; there
//! is no error channel (spec §7: "ADA has no error channel") and no shared
//! mutable state, so every operation is safe to call from any thread
//! without synchronization (spec §5).
//!
//! - [`bound`] / [`range`]: the numeric range algebra (`ValueBound`,
//!   `ValueRange`, join/add/mul/overlap/checkEq/checkLe).
//! - [`nat`]: `NatValueRange`, the `Nat` sort's non-negative-only range.
//! - [`rav`]: `RealAbstractValue`, pairing a rational range with a
//!   tri-state integrality flag.
//! - [`tri`]: the tri-state boolean abstraction, reused for integrality.
//! - [`numeric`]: the carrier types (`Integer`, `Rational`) the range
//!   algebra is generic over.
//! - [`value`]: the sort-indexed `AbstractValue`/`ConcreteValue` families.
//! - [`dispatch`]: `join`/`overlap`/`top`/`single`/`contains`, dispatched
//!   over a `sorts::Sort` representative.

pub mod bound;
pub mod dispatch;
pub mod nat;
pub mod numeric;
pub mod range;
pub mod rav;
pub mod tri;
pub mod value;

pub use bound::ValueBound;
pub use dispatch::{contains, join, overlap, single, top};
pub use nat::NatValueRange;
pub use numeric::{Integer, Rational};
pub use range::ValueRange;
pub use rav::RealAbstractValue;
pub use tri::TriState;
pub use value::{AbstractValue, ConcreteValue};
