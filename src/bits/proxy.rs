/*! Proxy reference for `&mut bool`.

Bit containers can easily produce *read* references to `bool`s that they
contain, by testing the bit and producing the appropriate `&'static bool`, but
Rust's rules forbid production of a *write* reference to a `bool` stored inside
a packed byte. This type stands in for `&mut bool` instead.
!*/

use super::Bits;

use core::{
	fmt::{
		self,
		Debug,
		Formatter,
	},
	mem,
	ops::{
		Deref,
		DerefMut,
	},
};

/** Proxy reference type, equivalent to `&mut bool`.

This type implements [`Deref`] and [`DerefMut`] to an internal `bool` slot, and
in [`Drop`] commits the value of that slot to the proxied bit in the container
from which it was created. It holds the exclusive borrow of that container for
its whole lifetime.

Writes through a proxy are subject to the container's own write rules. A proxy
for an odd position of a [`HalfBitView`] caches the written value, but the
commit on drop is discarded and the position keeps reading as `false`.

# Examples

```rust
use bitarray::prelude::*;

let mut bits = BitStore::new(4, false);
*bits.get_mut(2)? = true;
assert!(bits[2]);

let mut bit = bits.get_mut(2)?;
assert_eq!(bit.replace(false), true);
drop(bit);
assert!(!bits[2]);
# Ok::<(), BitError>(())
```

[`Deref`]: core::ops::Deref
[`DerefMut`]: core::ops::DerefMut
[`Drop`]: core::ops::Drop
[`HalfBitView`]: crate::view::HalfBitView
**/
pub struct BitMut<'a, B>
where B: Bits {
	/// The container that owns the proxied bit.
	bits: &'a mut B,
	/// The in-bounds position of the proxied bit.
	idx: usize,
	/// A local cache for [`Deref`] usage.
	///
	/// [`Deref`]: core::ops::Deref
	data: bool,
}

impl<'a, B> BitMut<'a, B>
where B: Bits
{
	/// Constructs a proxy over an in-bounds position.
	pub(crate) fn new(bits: &'a mut B, idx: usize) -> Self {
		let data = bits.peek(idx);
		Self { bits, idx, data }
	}

	/// The position of the proxied bit within its container.
	#[inline]
	pub fn index(&self) -> usize {
		self.idx
	}

	/// Writes a bit into the proxied location without waiting for drop.
	#[inline]
	pub fn set(&mut self, value: bool) {
		self.data = value;
		self.commit();
	}

	/// Replaces the proxied bit with a new value, returning the old one.
	#[inline]
	pub fn replace(&mut self, value: bool) -> bool {
		let old = mem::replace(&mut self.data, value);
		self.commit();
		old
	}

	#[inline]
	fn commit(&mut self) {
		self.bits.poke(self.idx, self.data);
	}
}

#[cfg(not(tarpaulin_include))]
impl<B> Debug for BitMut<'_, B>
where B: Bits
{
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.debug_struct("BitMut")
			.field("idx", &self.idx)
			.field("data", &self.data)
			.finish()
	}
}

impl<B> Deref for BitMut<'_, B>
where B: Bits
{
	type Target = bool;

	#[inline]
	fn deref(&self) -> &Self::Target {
		&self.data
	}
}

impl<B> DerefMut for BitMut<'_, B>
where B: Bits
{
	#[inline]
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.data
	}
}

impl<B> Drop for BitMut<'_, B>
where B: Bits
{
	#[inline]
	fn drop(&mut self) {
		self.commit();
	}
}
