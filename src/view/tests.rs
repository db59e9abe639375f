//! Unit tests for the `view` module.

use crate::prelude::*;

use alloc::{
	format,
	string::ToString,
	vec,
	vec::Vec,
};

#[test]
fn construction() {
	let cases: &[(usize, bool, &[u8])] = &[
		(0, false, b""),
		(1, false, b"\x00"),
		(8, false, b"\x00"),
		(9, false, b"\x00"),
		(16, false, b"\x00"),
		(17, false, b"\x00\x00"),
		(0, true, b""),
		(1, true, b"\xff"),
		(8, true, b"\xff"),
		(9, true, b"\xff"),
		(16, true, b"\xff"),
		(17, true, b"\xff\xff"),
	];
	for &(len, fill, expected) in cases {
		let half = HalfBitView::new(len, fill);
		assert_eq!(half.as_raw_slice(), expected, "len {} fill {}", len, fill);
		assert_eq!(half.len(), len);
		assert_eq!(half.as_store().len(), (len + 1) / 2);
	}
}

#[test]
fn fallible_construction() {
	assert_eq!(HalfBitView::try_new(-2, true), Err(BitError::InvalidArgument));
	assert_eq!(HalfBitView::try_new(5u32, true), Ok(HalfBitView::new(5, true)));
}

#[test]
fn empty_array() {
	let mut half = HalfBitView::new(2, false);
	half.set(0).unwrap();
	assert_eq!(half.get(0), Ok(true));
	assert_eq!(half.get(1), Ok(false));
	half.reset(0).unwrap();
	assert_eq!(half.get(0), Ok(false));
	assert_eq!(half.get(1), Ok(false));
	half.set(1).unwrap();
	assert_eq!(half.get(1), Ok(false));
	half.reset(1).unwrap();
	assert_eq!(half.get(1), Ok(false));
}

#[test]
fn filled_array() {
	let mut half = HalfBitView::new(2, true);
	half.reset(0).unwrap();
	assert_eq!(half.get(0), Ok(false));
	assert_eq!(half.get(1), Ok(false));
	half.set(0).unwrap();
	assert_eq!(half.get(0), Ok(true));
	assert_eq!(half.get(1), Ok(false));
}

#[test]
fn odd_positions_are_fixed() {
	for len in 0 .. 20 {
		for &fill in &[false, true] {
			let mut half = HalfBitView::new(len, fill);
			let before = half.as_raw_slice().to_vec();
			for pos in (1 .. len).step_by(2) {
				half.set(pos).unwrap();
				half.set_to(pos, true).unwrap();
				*half.get_mut(pos).unwrap() = true;
				assert_eq!(half.get(pos), Ok(false));
				half.reset(pos).unwrap();
				assert_eq!(half.get(pos), Ok(false));
			}
			assert_eq!(half.as_raw_slice(), &before[..]);
		}
	}
}

#[test]
fn even_positions_map_to_halves() {
	for len in 1 .. 20usize {
		for pos in (0 .. len).step_by(2) {
			let mut half = HalfBitView::new(len, false);
			half.set(pos).unwrap();
			assert_eq!(half.get(pos), Ok(true));
			assert_eq!(half.as_store().get(pos / 2), Ok(true));
			for (idx, bit) in &half {
				assert_eq!(bit, idx == pos, "{} in {}", idx, len);
			}
			half.reset(pos).unwrap();
			assert_eq!(half.get(pos), Ok(false));
			assert_eq!(half, HalfBitView::new(len, false));
		}
	}
}

#[test]
fn bounds() {
	//  The view is longer than its store; the view's length governs.
	let mut half = HalfBitView::new(9, true);
	assert_eq!(half.as_store().len(), 5);
	assert_eq!(half.get(8), Ok(true));
	assert_eq!(half.get(7), Ok(false));
	assert_eq!(
		half.get(9),
		Err(BitError::OutOfBounds {
			index: Some(9),
			len: 9,
		}),
	);

	let before = half.as_raw_slice().to_vec();
	assert!(half.set(-1).is_err());
	assert!(half.reset(9).is_err());
	assert!(half.set_to(10u32, false).is_err());
	assert!(half.get_mut(9).is_err());
	assert!(half.get_mut(-4i64).is_err());
	assert_eq!(half.as_raw_slice(), &before[..]);
	assert_eq!(half, HalfBitView::new(9, true));

	assert!(half.contains(8));
	assert!(!half.contains(9));
	assert!(!half.contains(-2));

	let empty = HalfBitView::new(0, true);
	assert!(empty.is_empty());
	assert!(empty.get(0).is_err());
}

#[test]
fn iteration() {
	let half = HalfBitView::new(7, true);
	let items = half.iter().collect::<Vec<_>>();
	assert_eq!(items, [
		(0, true),
		(1, false),
		(2, true),
		(3, false),
		(4, true),
		(5, false),
		(6, true),
	]);

	let mut iter = half.iter();
	iter.nth(5);
	iter.rewind();
	assert_eq!(iter.collect::<Vec<_>>(), items);
}

#[test]
fn indexing() {
	let mut half = HalfBitView::new(4, false);
	half.set_to(2, true).unwrap();
	assert!(half[2]);
	assert!(!half[3]);
	half.clear(2).unwrap();
	assert!(!half[2]);
}

#[test]
#[should_panic(expected = "index 4 out of range for bit array of length 4")]
fn index_panics() {
	let half = HalfBitView::new(4, false);
	let _bit = half[4];
}

#[test]
fn records() {
	let mut half = HalfBitView::new(17, false);
	half.set(16).unwrap();
	half.set(2).unwrap();

	let record = half.to_record();
	assert_eq!(record, BitRecord {
		size: 17,
		array: vec![0b0000_0010, 0b0000_0001],
	});
	assert_eq!(BitRecord::from(&half), record);
	assert_eq!(BitRecord::from(half.clone()), record);
	assert_eq!(HalfBitView::from_record(record).unwrap(), half);

	assert_eq!(
		HalfBitView::from_record(BitRecord {
			size: 17,
			array: vec![0],
		}),
		Err(BitError::Decode {
			size: 17,
			expected: 2,
			found: 1,
		}),
	);
	assert_eq!(
		HalfBitView::from_record(BitRecord::default()),
		Ok(HalfBitView::default()),
	);
}

#[test]
fn formatting() {
	let half = HalfBitView::new(3, true);
	assert_eq!(half.to_string(), "[1, 0, 1]");
	assert_eq!(
		format!("{:?}", half),
		"HalfBitView { len: 3, inner: BitStore { size: 2, buffer: [11111111] } }",
	);
}
