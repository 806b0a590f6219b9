//! Solver cost across prefix lengths, plus the full build path.
//!
//! Cost is dominated by the big-integer scale/shift and the two
//! base58check boundary encodings; prefix length mostly moves the
//! `58^free` exponent.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use proto_vanity::{build, solve, statement::STATEMENT_LAYOUT};

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    for prefix in ["Pt1", "Pt1JoinAscent", "Pt1JoinAscentToMountVinson"] {
        group.bench_with_input(BenchmarkId::from_parameter(prefix.len()), prefix, |b, p| {
            b.iter(|| solve(&STATEMENT_LAYOUT, black_box(p)))
        });
    }

    group.finish();
}

fn bench_solve_infeasible(c: &mut Criterion) {
    let prefix = "2".repeat(50);
    c.bench_function("solve_infeasible", |b| {
        b.iter(|| solve(&STATEMENT_LAYOUT, black_box(&prefix)))
    });
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_statement", |b| {
        b.iter(|| build(black_box("Join Ascent To Mount Vinson")))
    });
}

criterion_group!(benches, bench_solve, bench_solve_infeasible, bench_build);
criterion_main!(benches);
