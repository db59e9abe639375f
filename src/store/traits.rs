/*! General trait implementations for `BitStore`.

Equality and hashing consider only the addressable bits. The unused trailing
bits of the last byte are ignored, as they are by every access operation.
!*/

use crate::{
	bits::{
		self,
		Bits,
		Iter,
	},
	error::BitError,
	record::BitRecord,
	store::BitStore,
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

use wyz::fmt::FmtForward;

impl AsRef<[u8]> for BitStore {
	#[inline]
	fn as_ref(&self) -> &[u8] {
		self.as_raw_slice()
	}
}

impl Default for BitStore {
	#[inline]
	fn default() -> Self {
		Self::new(0, false)
	}
}

impl Eq for BitStore {
}

impl PartialEq for BitStore {
	fn eq(&self, rhs: &Self) -> bool {
		self.len() == rhs.len()
			&& self.full_bytes() == rhs.full_bytes()
			&& self.masked_tail() == rhs.masked_tail()
	}
}

impl Hash for BitStore {
	fn hash<H>(&self, hasher: &mut H)
	where H: Hasher {
		self.len().hash(hasher);
		self.full_bytes().hash(hasher);
		self.masked_tail().hash(hasher);
	}
}

impl Index<usize> for BitStore {
	type Output = bool;

	/// Looks up a single bit by position.
	///
	/// # Panics
	///
	/// This panics if `index` is out of bounds. Use [`Bits::get`] for a
	/// fallible lookup.
	#[inline]
	fn index(&self, index: usize) -> &Self::Output {
		bits::index_ref(self, index)
	}
}

impl<'a> IntoIterator for &'a BitStore {
	type IntoIter = Iter<'a, BitStore>;
	type Item = (usize, bool);

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl From<BitStore> for BitRecord {
	#[inline]
	fn from(store: BitStore) -> Self {
		Self {
			size: store.len(),
			array: store.into_boxed_slice().into_vec(),
		}
	}
}

impl From<&BitStore> for BitRecord {
	#[inline]
	fn from(store: &BitStore) -> Self {
		store.to_record()
	}
}

impl TryFrom<BitRecord> for BitStore {
	type Error = BitError;

	#[inline]
	fn try_from(record: BitRecord) -> Result<Self, Self::Error> {
		Self::from_record(record)
	}
}

#[cfg(not(tarpaulin_include))]
impl Debug for BitStore {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.debug_struct("BitStore")
			.field("size", &self.len())
			.field("buffer", &RawBytes(self.as_raw_slice()))
			.finish()
	}
}

/// Renders the bits as a list of `0` and `1` in position order.
impl Display for BitStore {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.debug_list()
			.entries(self.iter().map(|(_, bit)| bit as u8))
			.finish()
	}
}

/// Renders a byte buffer as a list of binary numbers.
pub(crate) struct RawBytes<'a>(pub(crate) &'a [u8]);

impl Debug for RawBytes<'_> {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.debug_list()
			.entries(self.0.iter().map(|byte| byte.fmt_binary()))
			.finish()
	}
}
