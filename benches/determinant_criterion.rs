use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matrix_lib::matrix::Matrix;
use std::time::Duration;

fn determinant_7x7(m: &Matrix) -> f64 {
    m.determinant().unwrap_or(f64::NAN)
}

fn run_determinant_bench(c: &mut Criterion) {
    let values: Vec<f64> = (0..49).map(|i| ((i * 31 + 7) % 17) as f64 - 8.0).collect();
    let matrix = Matrix::new(values, 7, 7).unwrap();
    c.bench_function("7x7 determinant by cofactor expansion", |b| {
        b.iter(|| determinant_7x7(black_box(&matrix)))
    });
}

criterion_group!(
    name = determinant_bench;
    config = Criterion::default().significance_level(0.1).sample_size(10).measurement_time(Duration::from_secs(2));
    targets = run_determinant_bench
);

criterion_main!(determinant_bench);
