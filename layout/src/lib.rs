//! The data-layout service. This is one of the "external collaborators" the
//! type lifter treats as opaque: target-specific primitive sizes and
//! alignments, plus struct-layout computation. Grounded on
//! `rustc_target::abi::TargetDataLayout` (`Size`, `Align`, `Integer`,
//! struct-field placement), trimmed to what `ltl`'s `MemType`/`StructInfo`
//! actually need.

mod data_layout;
mod size;
mod struct_info;

pub use data_layout::{DataLayout, Endian, Integer};
pub use size::{Align, Size};
pub use struct_info::{mk_struct_info, FieldShape, StructInfo};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("unknown target `{0}`")]
    UnknownTarget(String),
    #[error("malformed data-layout specifier `{0}`")]
    Malformed(String),
}
