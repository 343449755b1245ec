use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use group::{random_safe_prime, GroupParameters};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_safe_prime(c: &mut Criterion) {
    let mut bench_group = c.benchmark_group("safe_prime");
    bench_group.sample_size(10);
    for bits in [64u64, 128] {
        let mut rng = StdRng::seed_from_u64(42);
        bench_group.bench_with_input(BenchmarkId::from_parameter(bits), &bits, |bencher, &bits| {
            bencher.iter(|| black_box(random_safe_prime(&mut rng, bits)))
        });
    }
    bench_group.finish();
}

fn bench_exp_generator(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let params = GroupParameters::generate(&mut rng, 256).expect("parameters");
    let scalar = params.random_scalar(&mut rng);

    c.bench_function("exp_generator", |bencher| {
        bencher.iter(|| black_box(params.exp_generator(black_box(&scalar))))
    });
}

fn bench_double_exp(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let params = GroupParameters::generate(&mut rng, 256).expect("parameters");
    let base = params.random_element(&mut rng);
    let a = params.random_scalar(&mut rng);
    let b = params.random_scalar(&mut rng);

    c.bench_function("double_exp", |bencher| {
        bencher.iter(|| black_box(params.double_exp(black_box(&a), black_box(&b), &base)))
    });

    c.bench_function("separate_exp", |bencher| {
        bencher.iter(|| {
            black_box(params.mul(
                &params.exp_generator(black_box(&a)),
                &params.pow(&base, black_box(&b)),
            ))
        })
    });
}

fn bench_random_element(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let params = GroupParameters::generate(&mut rng, 256).expect("parameters");

    c.bench_function("random_element", |bencher| {
        bencher.iter(|| black_box(params.random_element(&mut rng)))
    });
}

fn bench_hash(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let params = GroupParameters::generate(&mut rng, 256).expect("parameters");
    let commitment = params.random_element(&mut rng);
    let message = params.random_scalar(&mut rng);

    c.bench_function("challenge_hash", |bencher| {
        bencher.iter(|| black_box(params.hash(black_box(&commitment), black_box(&message))))
    });
}

criterion_group!(
    benches,
    bench_safe_prime,
    bench_exp_generator,
    bench_double_exp,
    bench_random_element,
    bench_hash
);
criterion_main!(benches);
