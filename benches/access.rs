/*! This benchmark measures single-bit access through the bounds-checked
interface, and full-container iteration, for both containers.
!*/

use bitarray::prelude::*;

use criterion::{
	black_box,
	criterion_group,
	criterion_main,
	BenchmarkId,
	Criterion,
};

fn single_bits(c: &mut Criterion) {
	let mut grp = c.benchmark_group("single_bits");
	for &len in &[64usize, 4096, 1 << 20] {
		let mut bits = BitStore::new(len, false);
		let mut half = HalfBitView::new(len, false);

		grp.bench_with_input(BenchmarkId::new("BitStore", len), &len, |b, len| {
			b.iter(|| {
				for pos in (0 .. *len).step_by(7) {
					bits.set(black_box(pos)).unwrap();
					black_box(bits.get(pos).unwrap());
					bits.reset(pos).unwrap();
				}
			})
		});
		grp.bench_with_input(
			BenchmarkId::new("HalfBitView", len),
			&len,
			|b, len| {
				b.iter(|| {
					for pos in (0 .. *len).step_by(7) {
						half.set(black_box(pos)).unwrap();
						black_box(half.get(pos).unwrap());
						half.reset(pos).unwrap();
					}
				})
			},
		);
	}
	grp.finish();
}

fn iteration(c: &mut Criterion) {
	let bits = BitStore::new(1 << 16, true);
	let half = HalfBitView::new(1 << 16, true);

	c.bench_function("iter_store", |b| {
		b.iter(|| bits.iter().filter(|&(_, bit)| bit).count())
	});
	c.bench_function("iter_half", |b| {
		b.iter(|| half.iter().filter(|&(_, bit)| bit).count())
	});
}

criterion_group!(access, single_bits, iteration);
criterion_main!(access);
