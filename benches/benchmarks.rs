//! Benchmarks for batchstats
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use batchstats::frequency::mode;
use batchstats::location::{mean, median};
use batchstats::spread::range;
use batchstats::Summary;

/// Deterministic xorshift64 sample so the benches carry no random number
/// dependency. Values are quantized to two decimals so mode sees repeats.
fn sample_of(len: usize) -> Vec<f64> {
    let mut state = 0x853c49e6748fea9bu64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 100_000) as f64 / 100.0
        })
        .collect()
}

// ============================================================================
// Individual statistics
// ============================================================================

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    for size in [100usize, 10_000, 1_000_000] {
        let sample = sample_of(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("mean_{}", size), |b| {
            b.iter(|| mean(black_box(&sample)).unwrap())
        });

        group.bench_function(format!("median_{}", size), |b| {
            b.iter(|| median(black_box(&sample)).unwrap())
        });

        group.bench_function(format!("mode_{}", size), |b| {
            b.iter(|| mode(black_box(&sample)).unwrap())
        });

        group.bench_function(format!("range_{}", size), |b| {
            b.iter(|| range(black_box(&sample)).unwrap())
        });
    }

    group.finish();
}

// ============================================================================
// Full summary
// ============================================================================

fn bench_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary");

    for size in [100usize, 10_000, 1_000_000] {
        let sample = sample_of(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("compute_{}", size), |b| {
            b.iter(|| Summary::compute(black_box(&sample)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_statistics, bench_summary);
criterion_main!(benches);
