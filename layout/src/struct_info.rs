use crate::size::{Align, Size};

/// The size/alignment shape of one struct field, as handed to
/// [`mk_struct_info`] by a caller (`ltl`) that already knows each field's
/// `MemType` but doesn't need to expose that type to this crate.
#[derive(Copy, Clone, Debug)]
pub struct FieldShape {
    pub size: Size,
    pub align: Align,
}

/// The layout of a struct: per-field byte offsets plus the struct's own
/// size and alignment, derived the way `rustc_target::abi`'s
/// `LayoutDetails`/`FieldPlacement::Arbitrary` derives them for a
/// `univariant` struct — fields in declaration order, each placed at the
/// smallest offset satisfying its alignment (or back-to-back, for packed
/// structs), with trailing padding to bring the whole struct up to its own
/// alignment.
#[derive(Clone, Debug, PartialEq)]
pub struct StructInfo {
    pub packed: bool,
    pub size: Size,
    pub align: Align,
    pub offsets: Vec<Size>,
}

pub fn mk_struct_info(packed: bool, fields: &[FieldShape], aggregate_align: Align) -> StructInfo {
    let mut offset = Size::ZERO;
    let mut offsets = Vec::with_capacity(fields.len());
    let mut align = if packed { Align::ONE } else { aggregate_align };

    for field in fields {
        let field_align = if packed { Align::ONE } else { field.align };
        offset = offset.align_to(field_align);
        offsets.push(offset);
        offset += field.size;
        if !packed {
            align = align.max(field_align);
        }
    }

    let size = offset.align_to(align);
    StructInfo { packed, size, align, offsets }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(bytes: u64, align_bytes: u64) -> FieldShape {
        FieldShape { size: Size::from_bytes(bytes), align: Align::from_bytes(align_bytes).unwrap() }
    }

    #[test]
    fn pads_between_misaligned_fields() {
        // { i8, i32 } on a target with 4-byte i32 alignment: the i32 field
        // is pushed from offset 1 to offset 4, and the struct is padded to
        // size 8 (a multiple of its own 4-byte alignment).
        let info = mk_struct_info(
            false,
            &[field(1, 1), field(4, 4)],
            Align::from_bytes(8).unwrap(),
        );
        assert_eq!(info.offsets, vec![Size::from_bytes(0), Size::from_bytes(4)]);
        assert_eq!(info.size.bytes(), 8);
        assert_eq!(info.align.bytes(), 8);
    }

    #[test]
    fn packed_struct_has_no_interior_padding() {
        let info = mk_struct_info(
            true,
            &[field(1, 1), field(4, 4)],
            Align::from_bytes(8).unwrap(),
        );
        assert_eq!(info.offsets, vec![Size::from_bytes(0), Size::from_bytes(1)]);
        assert_eq!(info.size.bytes(), 5);
        assert_eq!(info.align.bytes(), 1);
    }

    #[test]
    fn empty_struct_is_zero_sized() {
        let info = mk_struct_info(false, &[], Align::from_bytes(8).unwrap());
        assert_eq!(info.size.bytes(), 0);
    }
}
