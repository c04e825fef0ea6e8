//! Benchmarks for simplex construction, hypersums and the recurrence.
//!
//! The recurrence is O(length) while the simplex grows as O(layers^d); the
//! `formula_vs_simplex` group shows the gap for the same output.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pascal_simplex::{build, hypersums, sequence, SequenceIter, SimplexBuilder};

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for dimension in [2usize, 3, 4, 5] {
        group.bench_with_input(
            BenchmarkId::from_parameter(dimension),
            &dimension,
            |b, &dimension| {
                b.iter(|| black_box(build(16, dimension)));
            },
        );
    }
    group.finish();
}

fn bench_builder_reuse(c: &mut Criterion) {
    let mut builder = SimplexBuilder::with_capacity(16);
    c.bench_function("build_reused_factorials", |b| {
        b.iter(|| black_box(builder.build(16, 4)));
    });
}

fn bench_hypersums(c: &mut Criterion) {
    let mut group = c.benchmark_group("hypersums");
    for dimension in [2usize, 3, 4] {
        let Ok(simplex) = build(16, dimension) else {
            continue;
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(dimension),
            &simplex,
            |b, simplex| {
                b.iter(|| black_box(hypersums(simplex, 2)));
            },
        );
    }
    group.finish();
}

fn bench_formula_vs_simplex(c: &mut Criterion) {
    let mut group = c.benchmark_group("formula_vs_simplex");
    group.bench_function("sequence", |b| {
        b.iter(|| black_box(sequence(4, 2, 16)));
    });
    group.bench_function("sequence_iter", |b| {
        b.iter(|| SequenceIter::new(4, 2).map(|it| black_box(it.take(16).count())));
    });
    group.bench_function("build_and_sum", |b| {
        b.iter(|| build(16, 4).and_then(|simplex| hypersums(&simplex, 2)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_builder_reuse,
    bench_hypersums,
    bench_formula_vs_simplex
);
criterion_main!(benches);
