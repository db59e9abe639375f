/*! Descriptions of the storage byte.

This module describes the memory element that holds packed bits. The crate only
stores bits in `u8` bytes, so the constants here are fixed rather than derived
from a register type.
!*/

/// The bit width of a storage byte.
pub const BITS: u8 = 8;
/// The number of bits required to store an index in the range `0 .. BITS`.
pub const INDX: u8 = BITS.trailing_zeros() as u8;
/// A mask over all bits that can be used as an index within a byte.
pub const MASK: u8 = BITS - 1;

/// The byte value with only its least significant bit set to `1`.
pub const ONE: u8 = 1;
/// The byte value with all of its bits set to `1`.
pub const ALL: u8 = !0;

/** Computes the number of bytes required to store some number of bits.

# Parameters

- `bits`: The number of bits to store.

# Returns

The number of bytes required to store `bits`, which is `ceil(bits / 8)`.

As this is a const function, when `bits` is a constant expression, this can be
used to compute the size of an array type `[u8; elts(bits)]`.
**/
#[inline]
pub const fn elts(bits: usize) -> usize {
	(bits >> INDX) + (bits & MASK as usize != 0) as usize
}

/// Produces the byte that every storage element holds after a fill.
#[inline]
pub const fn fill_byte(fill: bool) -> u8 {
	if fill { ALL } else { 0 }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rounding() {
		assert_eq!(elts(0), 0);
		assert_eq!(elts(1), 1);
		assert_eq!(elts(7), 1);
		assert_eq!(elts(8), 1);
		assert_eq!(elts(9), 2);
		assert_eq!(elts(16), 2);
		assert_eq!(elts(17), 3);
		assert_eq!(elts(usize::MAX), usize::MAX / 8 + 1);

		for bits in 0 .. 100 {
			assert_eq!(elts(bits), (bits + 7) / 8);
		}
	}

	#[test]
	fn fill() {
		assert_eq!(fill_byte(false), 0x00);
		assert_eq!(fill_byte(true), 0xFF);
	}

	#[test]
	fn constants() {
		assert_eq!(INDX, 3);
		assert_eq!(MASK, 0b111);
		assert_eq!(ONE << MASK, 0x80);
	}
}
