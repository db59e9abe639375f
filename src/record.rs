/*! The serialized form of a bit array.

A [`BitRecord`] is the two-field structure that crosses a serialization
boundary: the logical bit count, and the packed buffer exactly as the container
stores it. It carries no invariants of its own; the containers check that the
buffer length agrees with the size when a record is decoded back into them.
!*/

use alloc::vec::Vec;

/** The logical `{ size, array }` record of a bit container.

The `Default` value, `{ size: 0, array: [] }`, is what a decoder produces for a
record that is missing either field.

# Examples

```rust
use bitarray::prelude::*;

let mut bits = BitStore::new(10, false);
bits.set(9)?;

let record = bits.to_record();
assert_eq!(record.size, 10);
assert_eq!(record.array, [0x00, 0x02]);

assert_eq!(BitStore::from_record(record)?, bits);
# Ok::<(), BitError>(())
```
**/
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct BitRecord {
	/// The logical bit count.
	pub size: usize,
	/// The packed buffer, least significant bit first within each byte.
	pub array: Vec<u8>,
}
