/*! Typed positions of bits within the packed buffer.

This module provides the arithmetic that turns a logical bit position into a
byte address and a selection mask within that byte. All of the crate's storage
access flows through these types, so that the packing layout is decided in
exactly one place.

# Type Sequence

Caller-provided integers are first checked against a container length by
[`checked`], which produces a `usize` position known to be in bounds. [`locate`]
splits that position into a byte index and a [`BitIdx`]. The `BitIdx` is then
turned into a [`BitSel`], the one-hot mask used to read or write the bit.

The layout is least-significant-bit first: position `p` lives in byte `p / 8`
under the mask `1 << (p % 8)`.
!*/

use crate::{
	error::BitError,
	mem,
};

use core::{
	convert::TryInto,
	fmt::{
		self,
		Debug,
		Formatter,
	},
};

use funty::Integral;

/** A semantic index of a single bit within a storage byte.

This type is a counter in the range `0 .. 8`. It cannot be constructed outside
this crate with an out-of-range value.
**/
#[repr(transparent)]
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BitIdx {
	/// Semantic index counter within a byte, constrained to `0 .. 8`.
	idx: u8,
}

impl BitIdx {
	/// The inclusive-maximum index.
	#[cfg(test)]
	pub(crate) const LAST: Self = Self { idx: mem::MASK };
	/// The zero index.
	#[cfg(test)]
	pub(crate) const ZERO: Self = Self { idx: 0 };

	/// Wraps a counter value as a known-good index into a byte.
	///
	/// If `idx` is outside the valid range `0 .. 8`, this returns `None`.
	#[cfg(test)]
	pub(crate) fn new(idx: u8) -> Option<Self> {
		if idx >= mem::BITS {
			return None;
		}
		Some(Self { idx })
	}

	/// Computes the one-hot selector for this index.
	///
	/// Bit offset `b` corresponds to the mask `1 << b`.
	#[inline]
	pub fn select(self) -> BitSel {
		BitSel {
			sel: mem::ONE << self.idx,
		}
	}

	/// Views the internal index value.
	#[cfg(test)]
	pub(crate) fn value(self) -> u8 {
		self.idx
	}

	/// Ranges over all possible index values.
	#[cfg(test)]
	pub(crate) fn range_all() -> impl Iterator<Item = Self>
	+ DoubleEndedIterator
	+ ExactSizeIterator {
		(Self::ZERO.idx ..= Self::LAST.idx).map(|idx| Self { idx })
	}
}

#[cfg(not(tarpaulin_include))]
impl Debug for BitIdx {
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		write!(fmt, "BitIdx({})", self.idx)
	}
}

/** A one-hot selection mask for a single bit in a byte.

Values of this type always have exactly one bit set. They are produced only by
[`BitIdx::select`].
**/
#[repr(transparent)]
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BitSel {
	/// The one-hot selector mask.
	sel: u8,
}

impl BitSel {
	/// Views the internal mask value.
	#[inline]
	pub fn value(self) -> u8 {
		self.sel
	}
}

#[cfg(not(tarpaulin_include))]
impl Debug for BitSel {
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		write!(fmt, "BitSel({:08b})", self.sel)
	}
}

/** Splits a logical bit position into its storage coordinates.

# Parameters

- `pos`: A logical bit position. This function does not check it against any
  container length.

# Returns

- `.0`: The index of the byte that holds `pos`.
- `.1`: The bit index of `pos` within that byte.
**/
#[inline]
pub fn locate(pos: usize) -> (usize, BitIdx) {
	(pos >> mem::INDX, BitIdx {
		idx: pos as u8 & mem::MASK,
	})
}

/** Converts a caller-provided position into a `usize` known to be in bounds.

# Parameters

- `pos`: Any primitive integer. Signed values are permitted so that callers can
  pass negative positions and receive an error rather than a wrapped index.
- `len`: The logical length of the container being addressed.

# Returns

`pos` as a `usize`, if `0 <= pos < len`.

# Errors

[`BitError::OutOfBounds`] for any other value. The error carries `pos` when it
is representable as a `usize`.
**/
#[inline]
pub fn checked<I>(pos: I, len: usize) -> Result<usize, BitError>
where I: Integral {
	let idx = <I as TryInto<usize>>::try_into(pos).ok();
	match idx {
		Some(idx) if idx < len => Ok(idx),
		_ => Err(BitError::out_of_bounds(idx, len)),
	}
}

/** Converts a caller-provided bit count into a `usize`.

# Errors

[`BitError::InvalidArgument`] if `bits` is negative or does not fit in `usize`.
**/
#[inline]
pub fn size<I>(bits: I) -> Result<usize, BitError>
where I: Integral {
	<I as TryInto<usize>>::try_into(bits).map_err(|_| BitError::InvalidArgument)
}
