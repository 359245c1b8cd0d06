//! Performance benchmarks for BitArray operations.
//!
//! Single-bit accessors include the bounds check on every call. Bulk
//! operations (count, dump, load, reset) scale with the byte size.

use barray::BitArray;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};

const SIZE_STANDARD: usize = 10000;
const SEED: u64 = 42;

fn random_array(size: usize) -> BitArray {
    let mut rng = rand::rngs::StdRng::seed_from_u64(SEED);
    let mut ba = BitArray::new(size);
    for b in 0..size {
        if rng.gen_bool(0.1) {
            ba.set(b).unwrap();
        }
    }
    ba
}

// =============================================================================
// Single Bit Operations
// =============================================================================

fn bench_set(c: &mut Criterion) {
    let mut ba = BitArray::new(SIZE_STANDARD);

    c.bench_function("set", |b| {
        let mut i = 0;
        b.iter(|| {
            ba.set(black_box(i % SIZE_STANDARD)).unwrap();
            i += 1;
        });
    });
}

fn bench_get(c: &mut Criterion) {
    let ba = random_array(SIZE_STANDARD);

    c.bench_function("get", |b| {
        let mut i = 0;
        b.iter(|| {
            let _ = black_box(ba.get(black_box(i % SIZE_STANDARD)));
            i += 1;
        });
    });
}

fn bench_toggle(c: &mut Criterion) {
    let mut ba = BitArray::new(SIZE_STANDARD);

    c.bench_function("toggle", |b| {
        let mut i = 0;
        b.iter(|| {
            ba.toggle(black_box(i % SIZE_STANDARD)).unwrap();
            i += 1;
        });
    });
}

// =============================================================================
// Bulk Operations
// =============================================================================

fn bench_set_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_size");

    for size in [128, 1024, 8192, 65536] {
        let ba = random_array(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &ba, |b, ba| {
            b.iter(|| black_box(ba.set_size()));
        });
    }

    group.finish();
}

fn bench_each_bit(c: &mut Criterion) {
    let ba = random_array(SIZE_STANDARD);

    c.bench_function("each_bit", |b| {
        b.iter(|| black_box(ba.each_bit().filter(|&bit| bit == 1).count()));
    });
}

fn bench_dump_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("dump_load");

    for size in [1024, 65536] {
        let src = random_array(size);
        let data = src.dump();
        let mut dst = BitArray::new(size);

        group.bench_with_input(BenchmarkId::new("dump", size), &src, |b, src| {
            b.iter(|| black_box(src.dump()));
        });
        group.bench_with_input(BenchmarkId::new("load", size), &data, |b, data| {
            b.iter(|| dst.load(black_box(data)).unwrap());
        });
    }

    group.finish();
}

fn bench_reset(c: &mut Criterion) {
    let mut ba = random_array(SIZE_STANDARD);

    c.bench_function("reset", |b| {
        b.iter(|| ba.reset());
    });
}

criterion_group!(
    benches,
    bench_set,
    bench_get,
    bench_toggle,
    bench_set_size,
    bench_each_bit,
    bench_dump_load,
    bench_reset
);
criterion_main!(benches);
