//! Criterion benchmarks for the estimation hot paths.
//!
//! The simulation spends nearly all of its time inside `solver::solve`
//! (once per repetition plus once per bootstrap resample), so that is what
//! gets measured, across the sample sizes of the reference grid.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use shapelab_core::solver::DIRECT_BRACKET;
use shapelab_core::{solver, weibull, SimStream};

fn make_sample(shape: f64, n: usize) -> Vec<f64> {
    let mut stream = SimStream::seed_from(38);
    weibull::generate(shape, &stream.open_unit_vec(n))
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for &n in &[10usize, 100, 500] {
        let sample = make_sample(2.0, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &sample, |b, sample| {
            b.iter(|| solver::solve(black_box(sample), DIRECT_BRACKET).unwrap());
        });
    }
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut stream = SimStream::seed_from(38);
    let uniforms = stream.open_unit_vec(500);
    c.bench_function("generate_500", |b| {
        b.iter(|| weibull::generate(black_box(2.0), black_box(&uniforms)));
    });
}

criterion_group!(benches, bench_solve, bench_generate);
criterion_main!(benches);
