/*! `serde`-powered de/serialization

This module implements the Serde traits for [`BitRecord`], [`BitStore`], and
[`HalfBitView`]. All three use the same two-field structure:

- `size`: the logical length, as a `u64`.
- `array`: the packed buffer, as a byte string.

The buffer is sent with `serialize_bytes`, so every byte value survives any
format that can carry bytes. Self-describing formats without a byte type, such
as JSON, render it as a sequence of integers, which the decoder also accepts.

Decoding is lenient about missing fields, which take the values of
`BitRecord::default()`, but strict about buffer length: a `BitStore` or
`HalfBitView` only decodes from a record whose `array` is exactly as long as
its `size` requires.

[`BitRecord`]: crate::record::BitRecord
[`BitStore`]: crate::store::BitStore
[`HalfBitView`]: crate::view::HalfBitView
!*/

#![cfg(feature = "serde")]

use crate::{
	bits::Bits,
	record::BitRecord,
	store::BitStore,
	view::HalfBitView,
};

use alloc::vec::Vec;

use core::{
	cmp,
	convert::TryFrom,
	fmt::{
		self,
		Formatter,
	},
};

use serde::{
	de::{
		self,
		Deserialize,
		Deserializer,
		MapAccess,
		SeqAccess,
		Unexpected,
		Visitor,
	},
	ser::{
		Serialize,
		SerializeStruct,
		Serializer,
	},
};

use tap::pipe::Pipe;

/// The field names of the serialized structure, in order.
const FIELDS: &[&str] = &["size", "array"];

/// The largest buffer preallocated from a sequence's size hint.
const MAX_PREALLOC: usize = 4096;

/// Writes the two-field structure shared by every serialized type.
fn serialize_parts<S>(
	name: &'static str,
	size: usize,
	array: &[u8],
	serializer: S,
) -> Result<S::Ok, S::Error>
where
	S: Serializer,
{
	let mut state = serializer.serialize_struct(name, FIELDS.len())?;

	state.serialize_field("size", &(size as u64))?;
	state.serialize_field("array", &RawBytes(array))?;

	state.end()
}

/// Serializes a byte slice as a byte string rather than as a sequence.
struct RawBytes<'a>(&'a [u8]);

impl Serialize for RawBytes<'_> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where S: Serializer {
		serializer.serialize_bytes(self.0)
	}
}

impl Serialize for BitRecord {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where S: Serializer {
		serialize_parts("BitArray", self.size, &self.array, serializer)
	}
}

impl Serialize for BitStore {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where S: Serializer {
		serialize_parts("BitArray", self.len(), self.as_raw_slice(), serializer)
	}
}

impl Serialize for HalfBitView {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where S: Serializer {
		serialize_parts(
			"HalfBitArray",
			self.len(),
			self.as_raw_slice(),
			serializer,
		)
	}
}

impl<'de> Deserialize<'de> for BitRecord {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where D: Deserializer<'de> {
		deserializer.deserialize_struct("BitArray", FIELDS, RecordVisitor)
	}
}

impl<'de> Deserialize<'de> for BitStore {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where D: Deserializer<'de> {
		BitRecord::deserialize(deserializer)?
			.pipe(Self::from_record)
			.map_err(de::Error::custom)
	}
}

impl<'de> Deserialize<'de> for HalfBitView {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where D: Deserializer<'de> {
		deserializer
			.deserialize_struct("HalfBitArray", FIELDS, RecordVisitor)?
			.pipe(Self::from_record)
			.map_err(de::Error::custom)
	}
}

/// A Serde visitor to pull a `BitRecord` out of a serialized stream.
#[derive(Clone, Copy, Debug, Default)]
struct RecordVisitor;

impl RecordVisitor {
	fn size<E>(self, size: Option<u64>) -> Result<usize, E>
	where E: de::Error {
		let size = size.unwrap_or_default();
		usize::try_from(size)
			.map_err(|_| E::invalid_value(Unexpected::Unsigned(size), &self))
	}
}

impl<'de> Visitor<'de> for RecordVisitor {
	type Value = BitRecord;

	fn expecting(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.write_str("a bit array record with a `size` and a byte `array`")
	}

	/// Visit a sequence of anonymous data elements. These must be in the order
	/// `u64`, `[u8]`; trailing elements that are absent take their defaults.
	fn visit_seq<V>(self, mut seq: V) -> Result<Self::Value, V::Error>
	where V: SeqAccess<'de> {
		let size = seq.next_element::<u64>()?;
		let array = seq.next_element::<ByteBuf>()?;

		Ok(BitRecord {
			size: self.size(size)?,
			array: array.map(|buf| buf.0).unwrap_or_default(),
		})
	}

	/// Visit a map of named data elements. These may be in any order, and
	/// each of `size: u64` and `array: [u8]` may appear at most once.
	fn visit_map<V>(self, mut map: V) -> Result<Self::Value, V::Error>
	where V: MapAccess<'de> {
		let mut size: Option<u64> = None;
		let mut array: Option<ByteBuf> = None;

		while let Some(key) = map.next_key()? {
			match key {
				Field::Size => {
					if size.replace(map.next_value()?).is_some() {
						return Err(de::Error::duplicate_field("size"));
					}
				},
				Field::Array => {
					if array.replace(map.next_value()?).is_some() {
						return Err(de::Error::duplicate_field("array"));
					}
				},
			}
		}

		Ok(BitRecord {
			size: self.size(size)?,
			array: array.map(|buf| buf.0).unwrap_or_default(),
		})
	}
}

/// The named fields of the record structure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Field {
	Size,
	Array,
}

impl<'de> Deserialize<'de> for Field {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where D: Deserializer<'de> {
		deserializer.deserialize_identifier(FieldVisitor)
	}
}

struct FieldVisitor;

impl<'de> Visitor<'de> for FieldVisitor {
	type Value = Field;

	fn expecting(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.write_str("`size` or `array`")
	}

	fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
	where E: de::Error {
		match value {
			0 => Ok(Field::Size),
			1 => Ok(Field::Array),
			n => Err(E::invalid_value(Unexpected::Unsigned(n), &self)),
		}
	}

	fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
	where E: de::Error {
		match value {
			"size" => Ok(Field::Size),
			"array" => Ok(Field::Array),
			f => Err(E::unknown_field(f, FIELDS)),
		}
	}
}

/// An owned byte buffer that accepts either a byte string or a sequence.
struct ByteBuf(Vec<u8>);

impl<'de> Deserialize<'de> for ByteBuf {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where D: Deserializer<'de> {
		deserializer.deserialize_byte_buf(ByteBufVisitor)
	}
}

struct ByteBufVisitor;

impl<'de> Visitor<'de> for ByteBufVisitor {
	type Value = ByteBuf;

	fn expecting(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.write_str("a byte string or a sequence of bytes")
	}

	fn visit_bytes<E>(self, value: &[u8]) -> Result<Self::Value, E>
	where E: de::Error {
		Ok(ByteBuf(value.to_vec()))
	}

	fn visit_byte_buf<E>(self, value: Vec<u8>) -> Result<Self::Value, E>
	where E: de::Error {
		Ok(ByteBuf(value))
	}

	fn visit_seq<V>(self, mut seq: V) -> Result<Self::Value, V::Error>
	where V: SeqAccess<'de> {
		let cap = cmp::min(seq.size_hint().unwrap_or(0), MAX_PREALLOC);
		let mut out = Vec::with_capacity(cap);
		while let Some(byte) = seq.next_element::<u8>()? {
			out.push(byte);
		}
		Ok(ByteBuf(out))
	}
}
