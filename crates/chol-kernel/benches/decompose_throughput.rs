use chol_kernel::fixtures::{banded, negative_diagonal, random_spd};
use chol_kernel::{decompose, Matrix32};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_decompose(c: &mut Criterion) {
    let inputs = [
        ("banded", banded(2.0, 0.1)),
        ("random_spd", random_spd(12001)),
        ("negative_diagonal", negative_diagonal()),
    ];
    let mut group = c.benchmark_group("decompose_throughput");
    for (name, a) in &inputs {
        group.bench_function(*name, |b| {
            let mut l = Matrix32::zeros();
            b.iter(|| decompose(black_box(a), &mut l));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decompose);
criterion_main!(benches);
