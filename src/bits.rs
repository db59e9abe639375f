/*! The uniform access interface for bit containers.

Both [`BitStore`] and [`HalfBitView`] expose their contents through the [`Bits`]
trait. The trait owns the bounds checking for every access: implementors supply
their logical length and an unchecked read/write pair, and the provided methods
validate each caller position against that length before touching memory.

Positions are accepted as any primitive integer, so that a negative signed
position is reported as [`BitError::OutOfBounds`] rather than wrapping into a
large `usize`.

[`BitError::OutOfBounds`]: crate::error::BitError::OutOfBounds
[`BitStore`]: crate::store::BitStore
[`HalfBitView`]: crate::view::HalfBitView
!*/

mod iter;
mod proxy;

pub use self::{
	iter::Iter,
	proxy::BitMut,
};

use crate::{
	error::BitError,
	index,
};

use funty::Integral;

/** Indexed access to a fixed-length sequence of bits.

This trait cannot be implemented outside this crate.

# Examples

```rust
use bitarray::prelude::*;

let mut bits = BitStore::new(10, false);
bits.set(3)?;
assert!(bits.get(3)?);
assert!(bits.get(-1).is_err());

bits.set_to(4, true)?;
bits.clear(3)?;
assert_eq!(
	bits.iter().filter(|&(_, bit)| bit).map(|(idx, _)| idx).collect::<Vec<_>>(),
	[4],
);
# Ok::<(), BitError>(())
```
**/
pub trait Bits: seal::Backing + Sized {
	/// The number of logical positions in the container.
	fn len(&self) -> usize;

	/// Tests if the container has no positions at all.
	#[inline]
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Tests if `pos` is a legal position, without producing an error.
	///
	/// This is true exactly when `0 <= pos < self.len()`.
	#[inline]
	fn contains<I>(&self, pos: I) -> bool
	where I: Integral {
		index::checked(pos, self.len()).is_ok()
	}

	/// Reads the bit at `pos`.
	///
	/// # Errors
	///
	/// [`BitError::OutOfBounds`] unless `0 <= pos < self.len()`.
	#[inline]
	fn get<I>(&self, pos: I) -> Result<bool, BitError>
	where I: Integral {
		index::checked(pos, self.len()).map(|idx| self.peek(idx))
	}

	/// Sets the bit at `pos` to `1`.
	///
	/// # Errors
	///
	/// [`BitError::OutOfBounds`] unless `0 <= pos < self.len()`. The container
	/// is not modified when this fails.
	#[inline]
	fn set<I>(&mut self, pos: I) -> Result<(), BitError>
	where I: Integral {
		self.set_to(pos, true)
	}

	/// Resets the bit at `pos` to `0`.
	///
	/// # Errors
	///
	/// [`BitError::OutOfBounds`] unless `0 <= pos < self.len()`. The container
	/// is not modified when this fails.
	#[inline]
	fn reset<I>(&mut self, pos: I) -> Result<(), BitError>
	where I: Integral {
		self.set_to(pos, false)
	}

	/// Writes `value` into the bit at `pos`, dispatching to [`set`] when it is
	/// `true` and to [`reset`] when it is `false`.
	///
	/// [`reset`]: Self::reset
	/// [`set`]: Self::set
	fn set_to<I>(&mut self, pos: I, value: bool) -> Result<(), BitError>
	where I: Integral {
		let idx = index::checked(pos, self.len())?;
		self.poke(idx, value);
		Ok(())
	}

	/// Alias for [`reset`](Self::reset).
	#[inline]
	fn clear<I>(&mut self, pos: I) -> Result<(), BitError>
	where I: Integral {
		self.reset(pos)
	}

	/// Produces an iterator of `(position, bit)` pairs over the container.
	#[inline]
	fn iter(&self) -> Iter<'_, Self> {
		Iter::new(self)
	}

	/// Produces a write proxy for the bit at `pos`.
	///
	/// # Errors
	///
	/// [`BitError::OutOfBounds`] unless `0 <= pos < self.len()`.
	fn get_mut<I>(&mut self, pos: I) -> Result<BitMut<'_, Self>, BitError>
	where I: Integral {
		let idx = index::checked(pos, self.len())?;
		Ok(BitMut::new(self, idx))
	}
}

/// Produces the static `bool` reference that `Index` implementations return.
///
/// # Panics
///
/// This panics with the error's message if `pos` is out of bounds, as slice
/// indexing does.
pub(crate) fn index_ref<B>(bits: &B, pos: usize) -> &'static bool
where B: Bits {
	match bits.get(pos) {
		Ok(true) => &true,
		Ok(false) => &false,
		Err(err) => panic!("{}", err),
	}
}

pub(crate) mod seal {
	/// Unchecked storage primitives behind [`Bits`](super::Bits).
	///
	/// Callers must only pass positions less than the container length.
	pub trait Backing {
		/// Reads the bit at an in-bounds position.
		fn peek(&self, idx: usize) -> bool;

		/// Writes the bit at an in-bounds position.
		fn poke(&mut self, idx: usize, value: bool);
	}
}

#[cfg(test)]
mod tests;
