//! Criterion benchmarks for the algokata catalog.
//!
//! Benchmarks cover:
//! - Spiral generation across matrix sizes
//! - In-place rotation across matrix sizes
//! - Insertion sort scaling on random, sorted, and reversed input
//! - Shuffle cycle detection under extreme iteration counts
//! - Next-permutation stepping across digit widths

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

use algokata::prelude::*;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a random integer slice of the given length.
fn generate_random_slice(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect()
}

/// Generate a random lowercase ASCII string of the given length.
fn generate_random_string(len: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

/// Generate a random number with the given count of nonzero-led digits.
fn generate_number(digits: u32, seed: u64) -> u64 {
    let mut rng = StdRng::seed_from_u64(seed);
    let low = 10u64.pow(digits - 1);
    let high = 10u64.pow(digits);
    rng.gen_range(low..high)
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_spiral(c: &mut Criterion) {
    let mut group = c.benchmark_group("spiral");
    group.sample_size(100);

    for size in [8, 32, 128, 512] {
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::new("generate", size), &size, |b, &size| {
            b.iter(|| spiral_matrix(black_box(size)))
        });
    }
    group.finish();
}

fn bench_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation");
    group.sample_size(100);

    for size in [8, 32, 128, 512] {
        group.throughput(Throughput::Elements((size * size) as u64));

        let mut grid = spiral_matrix(size);
        group.bench_with_input(BenchmarkId::new("in_place", size), &size, |b, _| {
            // Rotating the already-rotated grid costs the same as the
            // first turn, so the matrix is reused across iterations.
            b.iter(|| rotate_clockwise(black_box(&mut grid)))
        });
    }
    group.finish();
}

fn bench_sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorting");
    group.sample_size(50);

    for len in [64, 256, 1024] {
        group.throughput(Throughput::Elements(len as u64));

        let random = generate_random_slice(len, 42);
        group.bench_with_input(BenchmarkId::new("random", len), &len, |b, _| {
            b.iter_batched(
                || random.clone(),
                |mut data| sort_ascending(&mut data),
                BatchSize::SmallInput,
            )
        });

        let mut sorted = random.clone();
        sorted.sort_unstable();
        group.bench_with_input(BenchmarkId::new("presorted", len), &len, |b, _| {
            b.iter_batched(
                || sorted.clone(),
                |mut data| sort_ascending(&mut data),
                BatchSize::SmallInput,
            )
        });

        let mut reversed = sorted.clone();
        reversed.reverse();
        group.bench_with_input(BenchmarkId::new("reversed", len), &len, |b, _| {
            b.iter_batched(
                || reversed.clone(),
                |mut data| sort_ascending(&mut data),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");
    group.sample_size(100);

    // Single steps dominated by the character walk itself.
    for len in [16, 256, 4096] {
        group.throughput(Throughput::Elements(len as u64));

        let input = generate_random_string(len, 42);
        group.bench_with_input(BenchmarkId::new("single_step", len), &len, |b, _| {
            b.iter(|| shuffle_chars(black_box(&input), 1))
        });
    }

    // Extreme iteration counts, folded down by cycle detection.
    for len in [16, 256, 4096] {
        let input = generate_random_string(len, 42);
        group.bench_with_input(BenchmarkId::new("u64_max_iterations", len), &len, |b, _| {
            b.iter(|| shuffle_chars(black_box(&input), u64::MAX))
        });
    }
    group.finish();
}

fn bench_next_permutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_permutation");
    group.sample_size(100);

    for digits in [4, 8, 12, 16] {
        group.throughput(Throughput::Elements(digits as u64));

        let number = generate_number(digits, 42);
        group.bench_with_input(BenchmarkId::new("step", digits), &digits, |b, _| {
            b.iter(|| next_bigger_number(black_box(number)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_spiral,
    bench_rotation,
    bench_sorting,
    bench_shuffle,
    bench_next_permutation,
);

criterion_main!(benches);
