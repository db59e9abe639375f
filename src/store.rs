/*! A fixed-size, heap-allocated array of packed bits.

[`BitStore`] owns a buffer of `ceil(len / 8)` bytes and addresses `len` logical
positions inside it. Position `p` lives in byte `p / 8` at bit offset `p % 8`,
least significant bit first.

The store is sized once, at construction, and never grows or shrinks. All of
its indexed operations come from the [`Bits`] trait.

[`Bits`]: crate::bits::Bits
!*/

use crate::{
	access::BitAccess,
	bits::{
		seal::Backing,
		Bits,
	},
	error::BitError,
	index,
	mem,
	record::BitRecord,
};

use alloc::{
	boxed::Box,
	vec,
};

use funty::Integral;

use tap::pipe::Pipe;

mod traits;


/** A fixed-size array of bits, packed eight to a byte.

# Examples

```rust
use bitarray::prelude::*;

let mut bits = BitStore::new(9, true);
assert_eq!(bits.as_raw_slice(), &[0xFF, 0xFF]);

bits.reset(8)?;
assert!(!bits[8]);
assert!(bits.get(9).is_err());
# Ok::<(), BitError>(())
```
**/
#[derive(Clone)]
pub struct BitStore {
	/// The number of logical positions.
	size: usize,
	/// Packed storage, exactly `ceil(size / 8)` bytes long.
	buffer: Box<[u8]>,
}

impl BitStore {
	/// Constructs a store of `size` bits, all set to `fill`.
	///
	/// Every byte of the buffer, including any unused trailing bits in the last
	/// one, is initialized to `0xFF` when `fill` is `true` and `0x00` otherwise.
	pub fn new(size: usize, fill: bool) -> Self {
		let bytes = mem::elts(size);
		log::trace!("allocating {} bytes for {} bits", bytes, size);
		Self {
			size,
			buffer: vec![mem::fill_byte(fill); bytes].into_boxed_slice(),
		}
	}

	/// Constructs a store from any primitive integer size.
	///
	/// # Errors
	///
	/// [`BitError::InvalidArgument`] if `size` is negative or does not fit in
	/// `usize`. No store is produced in that case.
	pub fn try_new<I>(size: I, fill: bool) -> Result<Self, BitError>
	where I: Integral {
		index::size(size).map(|size| Self::new(size, fill))
	}

	/// Views the packed buffer.
	///
	/// These are the exact bytes that serialization transmits.
	#[inline]
	pub fn as_raw_slice(&self) -> &[u8] {
		&self.buffer
	}

	/// Converts the store into its packed buffer, discarding the length.
	#[inline]
	pub fn into_boxed_slice(self) -> Box<[u8]> {
		self.buffer
	}

	/// Produces the serialized form of the store.
	pub fn to_record(&self) -> BitRecord {
		BitRecord {
			size: self.size,
			array: self.buffer.to_vec(),
		}
	}

	/// Reconstructs a store from its serialized form.
	///
	/// The record's buffer is taken verbatim, including any trailing bits past
	/// `size`.
	///
	/// # Errors
	///
	/// [`BitError::Decode`] if `record.array` is not exactly
	/// `ceil(record.size / 8)` bytes long.
	pub fn from_record(record: BitRecord) -> Result<Self, BitError> {
		let BitRecord { size, array } = record;
		let expected = mem::elts(size);
		if array.len() != expected {
			log::debug!(
				"rejecting a {}-bit record with {} bytes; expected {}",
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
		Ok(Self {
			size,
			buffer: array.into_boxed_slice(),
		})
	}

	/// Produces the last byte with its unused trailing bits cleared.
	///
	/// This is used to compare and hash stores by their addressable contents.
	pub(crate) fn masked_tail(&self) -> Option<u8> {
		let (full, tail) = index::locate(self.size);
		self.buffer
			.get(full)
			.map(|&byte| byte & tail.select().value().wrapping_sub(1))
	}

	/// Views the fully-addressable bytes, excluding a partial last byte.
	pub(crate) fn full_bytes(&self) -> &[u8] {
		index::locate(self.size).0.pipe(|full| &self.buffer[.. full])
	}
}

impl Bits for BitStore {
	#[inline]
	fn len(&self) -> usize {
		self.size
	}
}

impl Backing for BitStore {
	#[inline]
	fn peek(&self, idx: usize) -> bool {
		let (byte, bit) = index::locate(idx);
		self.buffer[byte].get_bit(bit)
	}

	#[inline]
	fn poke(&mut self, idx: usize, value: bool) {
		let (byte, bit) = index::locate(idx);
		self.buffer[byte].write_bit(bit, value);
	}
}
