//! Benchmarks for materializing deferred expressions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lazymat::{Materialize, Matrix};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_matrix(rng: &mut StdRng, size: usize) -> Matrix<i64> {
    Matrix::from_fn(size, size, |_, _| rng.gen_range(-1000..1000))
}

fn bench_elementwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementwise");
    let mut rng = StdRng::seed_from_u64(42);

    for size in [20, 100, 500].iter() {
        let a = random_matrix(&mut rng, *size);
        let b = random_matrix(&mut rng, *size);

        group.bench_with_input(BenchmarkId::new("add", size), size, |bench, _| {
            bench.iter(|| (black_box(&a) + black_box(&b)).materialize());
        });
        group.bench_with_input(BenchmarkId::new("sub", size), size, |bench, _| {
            bench.iter(|| (black_box(&a) - black_box(&b)).materialize());
        });
        group.bench_with_input(BenchmarkId::new("add_sub_chain", size), size, |bench, _| {
            bench.iter(|| (black_box(&a) + black_box(&b) - black_box(&a)).materialize());
        });
    }

    group.finish();
}

fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar");
    let mut rng = StdRng::seed_from_u64(42);

    for size in [20, 100, 500].iter() {
        let a = random_matrix(&mut rng, *size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bench, _| {
            bench.iter(|| (black_box(&a) * black_box(123i64)).materialize());
        });
    }

    group.finish();
}

fn bench_matrix_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_product");
    let mut rng = StdRng::seed_from_u64(42);

    for size in [20, 50, 100].iter() {
        let a = random_matrix(&mut rng, *size);
        let b = random_matrix(&mut rng, *size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bench, _| {
            bench.iter(|| (black_box(&a) * black_box(&b)).materialize());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_elementwise, bench_scalar, bench_matrix_product);
criterion_main!(benches);
