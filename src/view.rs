/*! A view that exposes only the even positions of a doubled index space.

[`HalfBitView`] reports a logical length `len`, but only backs the even
positions of it. It owns a [`BitStore`] of `ceil(len / 2)` bits and maps even
position `p` onto stored position `p / 2`. Odd positions have no storage: they
always read as `0`, and writes to them are silently discarded.

This models data where only every other slot carries information, such as an
interleaved or padded bit layout, while keeping a uniform indexed-access
contract over the full logical range.

The view contains its store rather than extending it, so the store's own
length is never mistaken for the view's. Bounds are always checked against the
view's `len`.

[`BitStore`]: crate::store::BitStore
!*/

use crate::{
	bits::{
		seal::Backing,
		Bits,
	},
	error::BitError,
	index,
	mem,
	record::BitRecord,
	store::BitStore,
};

use funty::Integral;

mod traits;

#[cfg(test)]
mod tests;

/** A bit container with `len` positions, of which only the even ones hold data.

# Examples

```rust
use bitarray::prelude::*;

let mut half = HalfBitView::new(17, false);
assert_eq!(half.len(), 17);
assert_eq!(half.as_store().len(), 9);

half.set(4)?;
half.set(5)?;
assert!(half.get(4)?);
assert!(!half.get(5)?);
assert!(half.get(17).is_err());
# Ok::<(), BitError>(())
```
**/
#[derive(Clone)]
pub struct HalfBitView {
	/// The logical length reported to callers.
	len: usize,
	/// Backing storage for the even positions, `ceil(len / 2)` bits long.
	inner: BitStore,
}

impl HalfBitView {
	/// Constructs a view of `len` positions, with every even position set to
	/// `fill`.
	pub fn new(len: usize, fill: bool) -> Self {
		Self {
			len,
			inner: BitStore::new(stored(len), fill),
		}
	}

	/// Constructs a view from any primitive integer length.
	///
	/// # Errors
	///
	/// [`BitError::InvalidArgument`] if `len` is negative or does not fit in
	/// `usize`.
	pub fn try_new<I>(len: I, fill: bool) -> Result<Self, BitError>
	where I: Integral {
		index::size(len).map(|len| Self::new(len, fill))
	}

	/// Views the backing store of the even positions.
	///
	/// The store's length is `ceil(self.len() / 2)`, not `self.len()`.
	#[inline]
	pub fn as_store(&self) -> &BitStore {
		&self.inner
	}

	/// Views the packed buffer of the backing store.
	#[inline]
	pub fn as_raw_slice(&self) -> &[u8] {
		self.inner.as_raw_slice()
	}

	/// Produces the serialized form of the view.
	///
	/// The record's `size` is the view's logical length, and its `array` is the
	/// backing store's buffer.
	pub fn to_record(&self) -> BitRecord {
		BitRecord {
			size: self.len,
			array: self.inner.as_raw_slice().to_vec(),
		}
	}

	/// Reconstructs a view from its serialized form.
	///
	/// # Errors
	///
	/// [`BitError::Decode`] if `record.array` is not exactly the length of the
	/// backing buffer for `record.size` positions, `ceil(ceil(size / 2) / 8)`.
	pub fn from_record(record: BitRecord) -> Result<Self, BitError> {
		let BitRecord { size, array } = record;
		let expected = mem::elts(stored(size));
		if array.len() != expected {
			log::debug!(
				"rejecting a {}-position half record with {} bytes; expected {}",
				size,
				array.len(),
				expected,
			);
			return Err(BitError::Decode {
				size,
				expected,
				found: array.len(),
			});
		}
		BitStore::from_record(BitRecord {
			size: stored(size),
			array,
		})
		.map(|inner| Self { len: size, inner })
	}
}

impl Bits for HalfBitView {
	#[inline]
	fn len(&self) -> usize {
		self.len
	}
}

impl Backing for HalfBitView {
	#[inline]
	fn peek(&self, idx: usize) -> bool {
		!is_odd(idx) && self.inner.peek(idx >> 1)
	}

	#[inline]
	fn poke(&mut self, idx: usize, value: bool) {
		if is_odd(idx) {
			return;
		}
		self.inner.poke(idx >> 1, value);
	}
}

/// The number of stored bits backing `len` positions, `ceil(len / 2)`.
#[inline]
fn stored(len: usize) -> usize {
	(len >> 1) + (len & 1)
}

#[inline]
fn is_odd(idx: usize) -> bool {
	idx & 1 == 1
}
