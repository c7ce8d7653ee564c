//! Row parsing throughput.
//!
//! Run with: `cargo bench --package worldworth-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use worldworth_bench::{parse_counts, sample_source};

fn parse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_source");

    for rows in [1_000usize, 10_000, 100_000] {
        let text = sample_source(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &text, |b, text| {
            b.iter(|| parse_counts(black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(benches, parse_benchmark);
criterion_main!(benches);
