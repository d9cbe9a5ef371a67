//! Criterion benchmarks for the dense Gaussian elimination.
//! Focus sizes: n in {4, 8, 16, 32}; random diagonally dominant systems and
//! the symmetric entry point used by the KKT solves.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::{DMatrix, DVector};
use rand::{rngs::StdRng, Rng, SeedableRng};
use spatial_kernel::linalg::{solve, solve_symmetric, PivotMode};

fn random_system(n: usize, seed: u64, symmetric: bool) -> (DMatrix<f64>, DVector<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut m = DMatrix::from_fn(n, n, |_, _| rng.gen_range(-1.0..1.0));
    if symmetric {
        m = &m + m.transpose();
    }
    for i in 0..n {
        // keep it comfortably non-singular
        m[(i, i)] += n as f64;
    }
    let y = DVector::from_fn(n, |_, _| rng.gen_range(-1.0..1.0));
    (m, y)
}

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("linalg");
    for &n in &[4usize, 8, 16, 32] {
        group.bench_with_input(BenchmarkId::new("solve_strict", n), &n, |b, &n| {
            b.iter_batched(
                || random_system(n, 17, false),
                |(m, y)| {
                    let _x = solve(m, y, PivotMode::Strict);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("solve_symmetric", n), &n, |b, &n| {
            b.iter_batched(
                || random_system(n, 18, true),
                |(m, y)| {
                    let _x = solve_symmetric(m, y);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
