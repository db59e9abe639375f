//! Iteration processes for bit containers.

use super::Bits;

use core::{
	fmt::{
		self,
		Debug,
		Formatter,
	},
	iter::FusedIterator,
};

/** Produces `(position, bit)` pairs from a bit container, in increasing order.

The iterator holds a shared borrow of its container and a pair of cursors. It
does not store any position inside the container, so any number of iterators can
walk the same container at once, and [`rewind`] restarts one of them from the
beginning without affecting the others.

[`rewind`]: Self::rewind
**/
pub struct Iter<'a, B>
where B: Bits {
	/// The container undergoing iteration.
	bits: &'a B,
	/// The next position to yield from the front.
	head: usize,
	/// One past the next position to yield from the back.
	tail: usize,
}

impl<'a, B> Iter<'a, B>
where B: Bits
{
	pub(crate) fn new(bits: &'a B) -> Self {
		Self {
			bits,
			head: 0,
			tail: bits.len(),
		}
	}

	/// Restarts iteration from the first position of the container.
	///
	/// This restores the full range regardless of how many items have been
	/// consumed from either end.
	#[inline]
	pub fn rewind(&mut self) {
		self.head = 0;
		self.tail = self.bits.len();
	}

	/// Views the container undergoing iteration.
	#[inline]
	pub fn container(&self) -> &'a B {
		self.bits
	}

	#[inline]
	fn item(&self, idx: usize) -> (usize, bool) {
		(idx, self.bits.peek(idx))
	}
}

impl<B> Clone for Iter<'_, B>
where B: Bits
{
	#[inline]
	fn clone(&self) -> Self {
		Self { ..*self }
	}
}

#[cfg(not(tarpaulin_include))]
impl<B> Debug for Iter<'_, B>
where B: Bits
{
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.debug_struct("Iter")
			.field("head", &self.head)
			.field("tail", &self.tail)
			.finish()
	}
}

impl<B> Iterator for Iter<'_, B>
where B: Bits
{
	type Item = (usize, bool);

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		if self.head >= self.tail {
			return None;
		}
		let out = self.item(self.head);
		self.head += 1;
		Some(out)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.len();
		(len, Some(len))
	}

	#[inline]
	fn count(self) -> usize {
		self.len()
	}

	fn nth(&mut self, n: usize) -> Option<Self::Item> {
		if n >= self.len() {
			self.head = self.tail;
			return None;
		}
		self.head += n;
		self.next()
	}

	#[inline]
	fn last(mut self) -> Option<Self::Item> {
		self.next_back()
	}
}

impl<B> DoubleEndedIterator for Iter<'_, B>
where B: Bits
{
	#[inline]
	fn next_back(&mut self) -> Option<Self::Item> {
		if self.head >= self.tail {
			return None;
		}
		self.tail -= 1;
		Some(self.item(self.tail))
	}

	fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
		if n >= self.len() {
			self.tail = self.head;
			return None;
		}
		self.tail -= n;
		self.next_back()
	}
}

impl<B> ExactSizeIterator for Iter<'_, B>
where B: Bits
{
	#[inline]
	fn len(&self) -> usize {
		self.tail - self.head
	}
}

impl<B> FusedIterator for Iter<'_, B> where B: Bits
{
}
