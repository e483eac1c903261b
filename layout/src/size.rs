use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

/// A size in bits, stored exactly (no rounding) so callers can choose
/// whether to work in bits or bytes without losing precision.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Size {
    raw: u64,
}

impl fmt::Debug for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Size({} bits)", self.raw)
    }
}

impl Size {
    pub const ZERO: Size = Size { raw: 0 };

    pub fn from_bits(bits: u64) -> Size {
        Size { raw: bits }
    }

    pub fn from_bytes(bytes: u64) -> Size {
        Size { raw: bytes * 8 }
    }

    pub fn bits(self) -> u64 {
        self.raw
    }

    pub fn bytes(self) -> u64 {
        // Round up: a size is only ever constructed from whole bits, but a
        // non-multiple-of-8 width (e.g. an `i1`) still occupies a whole byte
        // in memory.
        (self.raw + 7) / 8
    }

    pub fn align_to(self, align: Align) -> Size {
        let mask = align.bytes() - 1;
        Size::from_bytes((self.bytes() + mask) & !mask)
    }

    pub fn is_aligned(self, align: Align) -> bool {
        let mask = align.bytes() - 1;
        self.bytes() & mask == 0
    }
}

impl Add for Size {
    type Output = Size;
    fn add(self, other: Size) -> Size {
        Size::from_bits(self.raw + other.raw)
    }
}

impl Sub for Size {
    type Output = Size;
    fn sub(self, other: Size) -> Size {
        Size::from_bits(self.raw.checked_sub(other.raw).unwrap_or(0))
    }
}

impl AddAssign for Size {
    fn add_assign(&mut self, other: Size) {
        *self = *self + other;
    }
}

impl Mul<u64> for Size {
    type Output = Size;
    fn mul(self, count: u64) -> Size {
        Size::from_bits(self.raw * count)
    }
}

/// A power-of-two alignment, stored as its base-2 exponent (in bytes) the
/// way the teacher's own `Align` does, so an invalid non-power-of-two
/// alignment is simply unrepresentable.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Align {
    exp: u8,
}

impl fmt::Debug for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Align({} bytes)", self.bytes())
    }
}

impl Align {
    pub const ONE: Align = Align { exp: 0 };

    pub fn from_bytes(align: u64) -> Result<Align, String> {
        if align == 0 {
            return Ok(Align::ONE);
        }
        if !align.is_power_of_two() {
            return Err(format!("alignment {} is not a power of two", align));
        }
        Ok(Align { exp: align.trailing_zeros() as u8 })
    }

    pub fn from_bits(bits: u64) -> Result<Align, String> {
        if bits % 8 != 0 {
            return Err(format!("alignment {} bits is not a whole number of bytes", bits));
        }
        Align::from_bytes(bits / 8)
    }

    pub fn bytes(self) -> u64 {
        1 << self.exp
    }

    pub fn bits(self) -> u64 {
        self.bytes() * 8
    }

    pub fn max(self, other: Align) -> Align {
        Align { exp: self.exp.max(other.exp) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_to_rounds_up() {
        let size = Size::from_bytes(3);
        let align = Align::from_bytes(4).unwrap();
        assert_eq!(size.align_to(align).bytes(), 4);
    }

    #[test]
    fn align_to_is_noop_when_already_aligned() {
        let size = Size::from_bytes(8);
        let align = Align::from_bytes(4).unwrap();
        assert_eq!(size.align_to(align).bytes(), 8);
    }

    #[test]
    fn rejects_non_power_of_two() {
        assert!(Align::from_bytes(3).is_err());
    }
}
