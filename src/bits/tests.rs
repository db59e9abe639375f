#![cfg(test)]

use crate::{
	bits::{
		BitMut,
		Iter,
	},
	prelude::*,
};

use static_assertions::*;

#[test]
fn auto_traits() {
	assert_impl_all!(BitStore: Send, Sync, Clone, Default);
	assert_impl_all!(HalfBitView: Send, Sync, Clone, Default);
	assert_impl_all!(Iter<'static, BitStore>: Send, Sync, Clone);
	assert_not_impl_any!(BitMut<'static, BitStore>: Clone, Copy);
}

#[test]
fn generic_access() {
	fn toggle_all<B>(bits: &mut B) -> Result<(), BitError>
	where B: Bits {
		for pos in 0 .. bits.len() {
			let bit = bits.get(pos)?;
			bits.set_to(pos, !bit)?;
		}
		Ok(())
	}

	let mut store = BitStore::new(5, false);
	toggle_all(&mut store).unwrap();
	assert!(store.iter().all(|(_, bit)| bit));

	let mut half = HalfBitView::new(5, false);
	toggle_all(&mut half).unwrap();
	assert_eq!(
		half.iter().map(|(_, bit)| bit).collect::<alloc::vec::Vec<_>>(),
		[true, false, true, false, true],
	);
}
