//! Criterion micro-benchmarks for block sequence boundary, interior, and
//! value-lookup operations.

use std::hint::black_box;

use blockseq_bench::{filled_sequence, fragmented_sequence, nth_block};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

/// Benchmark: 1K appends into an empty sequence.
fn bench_push_back_1k(c: &mut Criterion) {
    let blocks: Vec<_> = (0..1_000).map(|i| nth_block(i).unwrap()).collect();
    c.bench_function("push_back_1k", |b| {
        b.iter(|| {
            let mut seq = blockseq_list::BlockSequence::new();
            for &block in &blocks {
                seq.push_back(block);
            }
            black_box(seq.len());
        });
    });
}

/// Benchmark: insert then remove at the head of a 1K sequence.
fn bench_head_churn_1k(c: &mut Criterion) {
    let mut seq = filled_sequence(1_000).unwrap();
    let block = nth_block(5_000).unwrap();
    c.bench_function("head_churn_1k", |b| {
        b.iter(|| {
            seq.insert_at(0, block).unwrap();
            black_box(seq.remove_at(0).unwrap());
        });
    });
}

/// Benchmark: insert then remove at the midpoint of a 1K sequence.
fn bench_interior_churn_1k(c: &mut Criterion) {
    let mut seq = filled_sequence(1_000).unwrap();
    let block = nth_block(5_000).unwrap();
    c.bench_function("interior_churn_1k", |b| {
        b.iter(|| {
            seq.insert_at(500, block).unwrap();
            black_box(seq.remove_at(500).unwrap());
        });
    });
}

/// Benchmark: value lookup of the tail block in a 1K sequence.
fn bench_index_of_tail_1k(c: &mut Criterion) {
    let seq = filled_sequence(1_000).unwrap();
    let tail = nth_block(999).unwrap();
    c.bench_function("index_of_tail_1k", |b| {
        b.iter(|| black_box(seq.index_of(black_box(tail))));
    });
}

/// Benchmark: refill a fragmented sequence, reusing vacated slots.
fn bench_refill_fragmented_1k(c: &mut Criterion) {
    let blocks: Vec<_> = (1_000..1_500).map(|i| nth_block(i).unwrap()).collect();
    c.bench_function("refill_fragmented_1k", |b| {
        b.iter_batched(
            || fragmented_sequence(1_000).unwrap(),
            |mut seq| {
                for &block in &blocks {
                    seq.push_front(block);
                }
                black_box(seq)
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_push_back_1k,
    bench_head_churn_1k,
    bench_interior_churn_1k,
    bench_index_of_tail_1k,
    bench_refill_fragmented_1k
);
criterion_main!(benches);
