use crate::size::{Align, Size};
use crate::LayoutError;

/// A fixed-width integer primitive, the way `rustc_target::abi::Integer`
/// enumerates them: every width LLVM treats as a "native" integer gets its
/// own alignment entry in the data layout, everything else (arbitrary `iN`)
/// falls back to the next integer at least as wide.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Integer {
    I1,
    I8,
    I16,
    I32,
    I64,
    I128,
}

impl Integer {
    pub fn size(self) -> Size {
        use Integer::*;
        match self {
            I1 => Size::from_bits(1),
            I8 => Size::from_bits(8),
            I16 => Size::from_bits(16),
            I32 => Size::from_bits(32),
            I64 => Size::from_bits(64),
            I128 => Size::from_bits(128),
        }
    }

    /// The smallest native integer whose size is at least `width` bits.
    pub fn fit(width: u64) -> Integer {
        use Integer::*;
        if width <= 1 {
            I1
        } else if width <= 8 {
            I8
        } else if width <= 16 {
            I16
        } else if width <= 32 {
            I32
        } else if width <= 64 {
            I64
        } else {
            I128
        }
    }
}

/// Byte order. Tracked for completeness; nothing in LTL/ADA is
/// endian-sensitive, but a real data-layout service has to carry it because
/// downstream memory-model reasoning does.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

/// Parsed target data layout: everything needed to compute sizes, alignments
/// and struct layouts for a given target triple. Grounded on
/// `rustc_target::abi::TargetDataLayout`, trimmed to the primitives this
/// workspace's `MemType` actually uses (no vector/aggregate-align table,
/// no address spaces — those are LLVM-backend concerns the surrounding
/// simulator never asks the lifter about).
#[derive(Clone, Debug, PartialEq)]
pub struct DataLayout {
    pub endian: Endian,
    pub i8_align: Align,
    pub i16_align: Align,
    pub i32_align: Align,
    pub i64_align: Align,
    pub i128_align: Align,
    pub f32_align: Align,
    pub f64_align: Align,
    pub pointer_size: Size,
    pub pointer_align: Align,
    pub aggregate_align: Align,
}

impl Default for DataLayout {
    /// The little-endian, 64-bit-pointer default, matching the teacher's
    /// own `TargetDataLayout::default()` modulo byte order (most targets
    /// this crate is ever pointed at in practice are little-endian; `Big`
    /// exists for completeness and is reachable via `parse`).
    fn default() -> DataLayout {
        DataLayout {
            endian: Endian::Little,
            i8_align: Align::from_bytes(1).unwrap(),
            i16_align: Align::from_bytes(2).unwrap(),
            i32_align: Align::from_bytes(4).unwrap(),
            i64_align: Align::from_bytes(8).unwrap(),
            i128_align: Align::from_bytes(16).unwrap(),
            f32_align: Align::from_bytes(4).unwrap(),
            f64_align: Align::from_bytes(8).unwrap(),
            pointer_size: Size::from_bytes(8),
            pointer_align: Align::from_bytes(8).unwrap(),
            aggregate_align: Align::from_bytes(8).unwrap(),
        }
    }
}

impl DataLayout {
    /// A handful of named presets, for the CLI's `--target` flag and for
    /// tests. Not a general LLVM data-layout string parser (that belongs to
    /// the out-of-scope AST/frontend); `parse` below handles the textual
    /// mini-format these presets are rendered from.
    pub fn preset(name: &str) -> Result<DataLayout, LayoutError> {
        match name {
            "x86_64-linux" | "aarch64-linux" => Ok(DataLayout::default()),
            "i686-linux" => Ok(DataLayout {
                pointer_size: Size::from_bytes(4),
                pointer_align: Align::from_bytes(4).unwrap(),
                aggregate_align: Align::from_bytes(4).unwrap(),
                i64_align: Align::from_bytes(4).unwrap(),
                ..DataLayout::default()
            }),
            other => Err(LayoutError::UnknownTarget(other.to_string())),
        }
    }

    /// Parses the small `key:value,key:value` textual layout format used by
    /// tests and the CLI (e.g. `"E-p:32:32-i64:32"` sets big-endian, a
    /// 32-bit pointer, and a 32-bit `i64` alignment). This is intentionally
    /// not LLVM's `datalayout` string grammar — that parsing belongs to the
    /// out-of-scope LLVM-AST frontend — but it exercises the same fields.
    pub fn parse(text: &str) -> Result<DataLayout, LayoutError> {
        let mut dl = DataLayout::default();
        if text.trim().is_empty() {
            return Ok(dl);
        }
        for spec in text.split('-') {
            let spec = spec.trim();
            if spec.is_empty() {
                continue;
            }
            if spec == "E" {
                dl.endian = Endian::Big;
                continue;
            }
            if spec == "e" {
                dl.endian = Endian::Little;
                continue;
            }
            let mut parts = spec.split(':');
            let key = parts.next().unwrap_or("");
            let rest: Vec<&str> = parts.collect();
            match key {
                "p" => {
                    let size = rest
                        .first()
                        .and_then(|s| s.parse::<u64>().ok())
                        .ok_or_else(|| LayoutError::Malformed(spec.to_string()))?;
                    let align = rest
                        .get(1)
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(size);
                    dl.pointer_size = Size::from_bits(size);
                    dl.pointer_align = Align::from_bits(align)
                        .map_err(|_| LayoutError::Malformed(spec.to_string()))?;
                }
                "i64" => {
                    let align = rest
                        .first()
                        .and_then(|s| s.parse::<u64>().ok())
                        .ok_or_else(|| LayoutError::Malformed(spec.to_string()))?;
                    dl.i64_align = Align::from_bits(align)
                        .map_err(|_| LayoutError::Malformed(spec.to_string()))?;
                }
                "i128" => {
                    let align = rest
                        .first()
                        .and_then(|s| s.parse::<u64>().ok())
                        .ok_or_else(|| LayoutError::Malformed(spec.to_string()))?;
                    dl.i128_align = Align::from_bits(align)
                        .map_err(|_| LayoutError::Malformed(spec.to_string()))?;
                }
                _ => {
                    // Unrecognized specifiers (vector alignment, native
                    // integer widths, mangling conventions, ...) are
                    // accepted and ignored: this mini-format only models
                    // the fields this workspace's callers ever query.
                }
            }
        }
        Ok(dl)
    }

    pub fn int_size(&self, integer: Integer) -> Size {
        integer.size()
    }

    pub fn int_align(&self, integer: Integer) -> Align {
        use Integer::*;
        match integer {
            I1 | I8 => self.i8_align,
            I16 => self.i16_align,
            I32 => self.i32_align,
            I64 => self.i64_align,
            I128 => self.i128_align,
        }
    }

    pub fn float_size(&self) -> Size {
        Size::from_bits(32)
    }

    pub fn float_align(&self) -> Align {
        self.f32_align
    }

    pub fn double_size(&self) -> Size {
        Size::from_bits(64)
    }

    pub fn double_align(&self) -> Align {
        self.f64_align
    }

    pub fn ptr_size(&self) -> Size {
        self.pointer_size
    }

    pub fn ptr_align(&self) -> Align {
        self.pointer_align
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_64_bit_little_endian() {
        let dl = DataLayout::default();
        assert_eq!(dl.endian, Endian::Little);
        assert_eq!(dl.ptr_size().bytes(), 8);
    }

    #[test]
    fn parse_big_endian_and_pointer_width() {
        let dl = DataLayout::parse("E-p:32:32").unwrap();
        assert_eq!(dl.endian, Endian::Big);
        assert_eq!(dl.ptr_size().bits(), 32);
    }

    #[test]
    fn preset_i686_has_32_bit_pointers() {
        let dl = DataLayout::preset("i686-linux").unwrap();
        assert_eq!(dl.ptr_size().bytes(), 4);
    }

    #[test]
    fn unknown_preset_errors() {
        assert!(DataLayout::preset("not-a-target").is_err());
    }

    #[test]
    fn integer_fit_picks_smallest_native_width() {
        assert_eq!(Integer::fit(12), Integer::I16);
        assert_eq!(Integer::fit(32), Integer::I32);
        assert_eq!(Integer::fit(65), Integer::I128);
    }
}
