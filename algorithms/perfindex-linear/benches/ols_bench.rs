use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use perfindex::traits::Fit;
use perfindex_datasets::generate::synthetic_students;
use perfindex_linear::LinearRegression;
use rand::SeedableRng;
use rand_isaac::Isaac64Rng;

fn perform_ols(dataset: &perfindex::Dataset<f64>) {
    let lin_reg = LinearRegression::new();
    let _model = lin_reg.fit(dataset);
}

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("perfindex_linear");
    let sizes: [usize; 3] = [1_000, 10_000, 100_000];
    for size in sizes {
        let mut rng = Isaac64Rng::seed_from_u64(42);
        let dataset = synthetic_students(size, 2.0, &mut rng).to_dataset().unwrap();

        group.bench_with_input(BenchmarkId::new("OLS", size), &dataset, |b, dataset| {
            b.iter(|| perform_ols(dataset));
        });
    }
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
