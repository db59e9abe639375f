/*! `bitarray` – a fixed-size array of packed bits.

This crate provides [`BitStore`], a container of `N` boolean flags packed eight
to a byte, and [`HalfBitView`], a container of `N` positions of which only the
even ones carry data.

Both containers are sized once, at construction, and expose the same indexed
interface through the [`Bits`] trait: bounds-checked `get`, `set`, and `reset`,
plus an existence check, write proxies, and iteration over `(position, bit)`
pairs. Every access validates its position before touching memory, so a failed
call leaves the container exactly as it was.

# Memory Layout

Logical position `p` is stored in byte `p / 8`, at bit offset `p % 8`, counting
from the least significant bit. A store of `N` bits owns exactly `ceil(N / 8)`
bytes. When `N` is not a multiple of eight, the unused high bits of the last
byte are never read or written by any access operation.

# Serialization

A container converts to and from a [`BitRecord`], the two-field structure
`{ size, array }` holding the logical length and the raw packed buffer. With the
`serde` feature enabled, the containers and the record implement `Serialize` and
`Deserialize` over the same structure.

Decoding checks that the buffer length agrees with the size, and rejects a
mismatched record with [`BitError::Decode`] rather than producing a container
that would read past its buffer.

# Examples

```rust
use bitarray::prelude::*;

let mut flags = BitStore::new(12, false);
flags.set(3)?;
flags.set_to(11, true)?;
assert_eq!(flags.as_raw_slice(), &[0b0000_1000, 0b0000_1000]);

let record = flags.to_record();
assert_eq!(BitStore::from_record(record)?, flags);

let mut half = HalfBitView::new(8, false);
half.set(1)?;
assert!(!half[1]);
# Ok::<(), BitError>(())
```

[`BitError::Decode`]: crate::error::BitError::Decode
[`BitRecord`]: crate::record::BitRecord
[`BitStore`]: crate::store::BitStore
[`Bits`]: crate::bits::Bits
[`HalfBitView`]: crate::view::HalfBitView
!*/

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod access;
pub mod bits;
pub mod error;
mod index;
mod mem;
pub mod prelude;
pub mod record;
pub mod store;
pub mod view;

#[cfg(feature = "serde")]
mod serdes;
