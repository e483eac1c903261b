//! The peripheral glue named in spec §1: function-name interning (with the
//! reserved `"_start"` entry-point constant) and a CLI binary wiring the
//! ADA and LTL cores together for manual inspection and integration
//! testing. Neither module is load-bearing for the cores' correctness —
//! that lives entirely in `ada` and `ltl` — but both are real, tested
//! surfaces, not stubs.

pub mod decls;
pub mod entry;

pub use decls::{parse_decls, DeclError};
pub use entry::{FunctionName, FunctionTable, ENTRY_POINT_NAME};
