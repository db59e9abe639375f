/*! Prove that the example code in `README.md` executes.

This file must be updated whenever the README's code samples are modified.
!*/

use bitarray::prelude::*;

#[test]
fn readme() -> Result<(), BitError> {
	let mut flags = BitStore::new(10, false);
	flags.set(9)?;
	assert_eq!(flags.as_raw_slice(), &[0, 0b10]);
	assert!(flags.get(-1).is_err());
	Ok(())
}
