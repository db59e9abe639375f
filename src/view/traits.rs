//! General trait implementations for `HalfBitView`.

use crate::{
	bits::{
		self,
		Bits,
		Iter,
	},
	error::BitError,
	record::BitRecord,
	view::HalfBitView,
};

use core::{
	convert::TryFrom,
	fmt::{
		self,
		Debug,
		Display,
		Formatter,
	},
	hash::{
		Hash,
		Hasher,
	},
	ops::Index,
};

impl Default for HalfBitView {
	#[inline]
	fn default() -> Self {
		Self::new(0, false)
	}
}

impl Eq for HalfBitView {
}

impl PartialEq for HalfBitView {
	fn eq(&self, rhs: &Self) -> bool {
		self.len() == rhs.len() && self.as_store() == rhs.as_store()
	}
}

impl Hash for HalfBitView {
	fn hash<H>(&self, hasher: &mut H)
	where H: Hasher {
		self.len().hash(hasher);
		self.as_store().hash(hasher);
	}
}

impl Index<usize> for HalfBitView {
	type Output = bool;

	/// Looks up a single bit by position. Odd positions are always `false`.
	///
	/// # Panics
	///
	/// This panics if `index` is out of bounds.
	#[inline]
	fn index(&self, index: usize) -> &Self::Output {
		bits::index_ref(self, index)
	}
}

impl<'a> IntoIterator for &'a HalfBitView {
	type IntoIter = Iter<'a, HalfBitView>;
	type Item = (usize, bool);

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl From<HalfBitView> for BitRecord {
	#[inline]
	fn from(view: HalfBitView) -> Self {
		Self {
			size: view.len,
			array: view.inner.into_boxed_slice().into_vec(),
		}
	}
}

impl From<&HalfBitView> for BitRecord {
	#[inline]
	fn from(view: &HalfBitView) -> Self {
		view.to_record()
	}
}

impl TryFrom<BitRecord> for HalfBitView {
	type Error = BitError;

	#[inline]
	fn try_from(record: BitRecord) -> Result<Self, Self::Error> {
		Self::from_record(record)
	}
}

#[cfg(not(tarpaulin_include))]
impl Debug for HalfBitView {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.debug_struct("HalfBitView")
			.field("len", &self.len())
			.field("inner", self.as_store())
			.finish()
	}
}

/// Renders every logical position, odd ones included, as `0` or `1`.
impl Display for HalfBitView {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.debug_list()
			.entries(self.iter().map(|(_, bit)| bit as u8))
			.finish()
	}
}
