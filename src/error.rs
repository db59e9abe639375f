//! The error type produced by fallible bit-array operations.

use core::fmt::{
	self,
	Display,
	Formatter,
};

/** An error produced when constructing, accessing, or decoding a bit array.

Every fallible operation in this crate checks its arguments before it touches
memory, so a container that produces one of these errors is left unchanged and
remains usable.
**/
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BitError {
	/// The requested size was negative, or did not fit in `usize`.
	InvalidArgument,
	/// A position was outside `0 .. len`.
	OutOfBounds {
		/// The requested position, or `None` if it was negative or did not fit
		/// in `usize`.
		index: Option<usize>,
		/// The logical length of the container.
		len: usize,
	},
	/// A serialized record carried a buffer of the wrong length for its size.
	Decode {
		/// The logical bit count in the record.
		size: usize,
		/// The number of bytes that `size` bits require.
		expected: usize,
		/// The number of bytes the record actually carried.
		found: usize,
	},
}

impl BitError {
	#[inline]
	pub(crate) fn out_of_bounds(index: Option<usize>, len: usize) -> Self {
		Self::OutOfBounds { index, len }
	}
}

impl Display for BitError {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		match *self {
			Self::InvalidArgument => {
				fmt.write_str("size must be a non-negative integer")
			},
			Self::OutOfBounds {
				index: Some(index),
				len,
			} => write!(
				fmt,
				"index {} out of range for bit array of length {}",
				index, len,
			),
			Self::OutOfBounds { index: None, len } => write!(
				fmt,
				"negative or oversized index for bit array of length {}",
				len,
			),
			Self::Decode {
				size,
				expected,
				found,
			} => write!(
				fmt,
				"a record of {} bits requires {} bytes, but carried {}",
				size, expected, found,
			),
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for BitError {
}
