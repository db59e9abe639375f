/*! Governs access to the storage bytes.

Every read or write of a single bit in this crate routes through the
[`BitAccess`] trait, which operates on one byte given a [`BitIdx`] inside it.
The containers compute the byte address, and this module decides what happens
inside the byte.

[`BitIdx`]: crate::index::BitIdx
!*/

use crate::index::BitIdx;

/** Single-bit operations on a storage byte.

The containers in this crate hold exclusive ownership of their buffers, so these
operations take `&mut self` for writes and perform an ordinary read-modify-write
of the byte. Only the bit that `place` selects is affected.
**/
pub trait BitAccess {
	/// Reads a single bit out of the element.
	///
	/// # Parameters
	///
	/// - `&self`
	/// - `place`: A bit index in the element.
	///
	/// # Returns
	///
	/// The value of the bit at `place`.
	fn get_bit(&self, place: BitIdx) -> bool;

	/// Set a single bit in an element high.
	///
	/// This unconditionally writes a `1` bit into the position that `place`
	/// selects, by OR-ing in its mask.
	fn set_bit(&mut self, place: BitIdx);

	/// Set a single bit in an element low.
	///
	/// This unconditionally writes a `0` bit into the position that `place`
	/// selects, by AND-ing with the inverse of its mask.
	fn clear_bit(&mut self, place: BitIdx);

	/// Writes a value into a single bit.
	#[inline]
	fn write_bit(&mut self, place: BitIdx, value: bool) {
		if value {
			self.set_bit(place);
		}
		else {
			self.clear_bit(place);
		}
	}
}

impl BitAccess for u8 {
	#[inline(always)]
	fn get_bit(&self, place: BitIdx) -> bool {
		*self & place.select().value() != 0
	}

	#[inline(always)]
	fn set_bit(&mut self, place: BitIdx) {
		*self |= place.select().value();
	}

	#[inline(always)]
	fn clear_bit(&mut self, place: BitIdx) {
		*self &= !place.select().value();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn single_bits() {
		for idx in BitIdx::range_all() {
			let mut elem = 0u8;
			elem.set_bit(idx);
			assert_eq!(elem, 1 << idx.value());
			assert!(elem.get_bit(idx));
			//  Setting an already-set bit is a no-op.
			elem.set_bit(idx);
			assert_eq!(elem, 1 << idx.value());

			let mut elem = !0u8;
			elem.clear_bit(idx);
			assert_eq!(elem, !(1 << idx.value()));
			assert!(!elem.get_bit(idx));
		}
	}

	#[test]
	fn neighbors_untouched() {
		let mut elem = 0b1010_0101u8;
		elem.write_bit(BitIdx::new(1).unwrap(), true);
		assert_eq!(elem, 0b1010_0111);
		elem.write_bit(BitIdx::new(7).unwrap(), false);
		assert_eq!(elem, 0b0010_0111);
		elem.write_bit(BitIdx::new(0).unwrap(), true);
		assert_eq!(elem, 0b0010_0111);
	}
}
