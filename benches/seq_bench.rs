// Comparative benchmark suite for the sequence representations
//
// Benchmarks both implementations:
// - ArraySeq: contiguous buffer with doubling growth
// - LinkedSeq: node slab with index links

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use strand::seq::Seq;
use strand::seq::array::ArraySeq;
use strand::seq::linked::LinkedSeq;

// =============================================================================
// Benchmark Helpers
// =============================================================================

/// Build a sequence of `n` ascending elements.
fn build<S: Seq<i32>>(n: usize) -> S {
    let mut seq = S::default();
    for i in 0..n {
        seq.push(i as i32);
    }
    return seq;
}

// =============================================================================
// Append Benchmarks
// =============================================================================

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    let sizes = [100, 1000, 10000];

    for size in sizes {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ArraySeq", size), &size, |b, &size| {
            b.iter(|| {
                let seq: ArraySeq<i32> = build(size);
                black_box(seq.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("LinkedSeq", size), &size, |b, &size| {
            b.iter(|| {
                let seq: LinkedSeq<i32> = build(size);
                black_box(seq.len())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Indexed Access Benchmarks
// =============================================================================

fn bench_sequential_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_get");

    // LinkedSeq walks from the head on every get, so the whole scan is
    // quadratic; keep the sizes modest.
    let sizes = [100, 1000];

    for size in sizes {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ArraySeq", size), &size, |b, &size| {
            let seq: ArraySeq<i32> = build(size);
            b.iter(|| {
                let mut sum = 0i64;
                for i in 0..size {
                    sum += *seq.get(i).unwrap() as i64;
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("LinkedSeq", size), &size, |b, &size| {
            let seq: LinkedSeq<i32> = build(size);
            b.iter(|| {
                let mut sum = 0i64;
                for i in 0..size {
                    sum += *seq.get(i).unwrap() as i64;
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn bench_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter");

    let sizes = [100, 1000, 10000];

    for size in sizes {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ArraySeq", size), &size, |b, &size| {
            let seq: ArraySeq<i32> = build(size);
            b.iter(|| {
                let sum: i64 = seq.iter().map(|&v| v as i64).sum();
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("LinkedSeq", size), &size, |b, &size| {
            let seq: LinkedSeq<i32> = build(size);
            b.iter(|| {
                let sum: i64 = seq.iter().map(|&v| v as i64).sum();
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Structural Operation Benchmarks
// =============================================================================

fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse");

    let sizes = [100, 1000, 10000];

    for size in sizes {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ArraySeq", size), &size, |b, &size| {
            let mut seq: ArraySeq<i32> = build(size);
            b.iter(|| {
                seq.reverse();
                black_box(seq.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("LinkedSeq", size), &size, |b, &size| {
            let mut seq: LinkedSeq<i32> = build(size);
            b.iter(|| {
                seq.reverse();
                black_box(seq.len())
            });
        });
    }

    group.finish();
}

fn bench_rotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotate");

    let sizes = [100, 1000, 10000];

    for size in sizes {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ArraySeq", size), &size, |b, &size| {
            let mut seq: ArraySeq<i32> = build(size);
            let m = size / 3;
            b.iter(|| {
                seq.rotate(m).unwrap();
                black_box(seq.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("LinkedSeq", size), &size, |b, &size| {
            let mut seq: LinkedSeq<i32> = build(size);
            let m = size / 3;
            b.iter(|| {
                seq.rotate(m).unwrap();
                black_box(seq.len())
            });
        });
    }

    group.finish();
}

fn bench_split_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_back");

    let sizes = [100, 1000, 10000];

    for size in sizes {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ArraySeq", size), &size, |b, &size| {
            b.iter(|| {
                let mut seq: ArraySeq<i32> = build(size);
                let front = seq.split_back(size / 2).unwrap();
                black_box(front.len() + seq.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("LinkedSeq", size), &size, |b, &size| {
            b.iter(|| {
                let mut seq: LinkedSeq<i32> = build(size);
                let front = seq.split_back(size / 2).unwrap();
                black_box(front.len() + seq.len())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_push,
    bench_sequential_get,
    bench_iter,
    bench_reverse,
    bench_rotate,
    bench_split_back,
);

criterion_main!(benches);
