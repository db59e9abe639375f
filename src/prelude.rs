/*! [`bitarray`] symbol export.

This module collects the general public API into a single spot for inclusion, as
`use bitarray::prelude::*;`, without polluting the root namespace of the crate.

[`bitarray`]: crate
!*/

pub use crate::{
	bits::Bits,
	error::BitError,
	record::BitRecord,
	store::BitStore,
	view::HalfBitView,
};
