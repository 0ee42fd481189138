use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::constants::G_COMPRESSED;
use curve::{parse_public, point_multiply, Affine, PrecomputedTable, RandomField, Scalar, WnafForm};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_scalar(rng: &mut StdRng) -> Scalar {
    Scalar::random(rng)
}

fn bench_affine_double(c: &mut Criterion) {
    let g = Affine::generator();
    c.bench_function("affine_double", |bencher| {
        bencher.iter(|| black_box(black_box(g).double()))
    });
}

fn bench_affine_add(c: &mut Criterion) {
    let g = Affine::generator();
    let h = g.double();
    c.bench_function("affine_add", |bencher| {
        bencher.iter(|| black_box(black_box(g) + black_box(h)))
    });
}

fn bench_wnaf_encode(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng).to_words();
    c.bench_function("wnaf_encode", |bencher| {
        bencher.iter(|| black_box(WnafForm::encode(black_box(&scalar))))
    });
}

fn bench_build_table(c: &mut Criterion) {
    let g = Affine::generator();
    c.bench_function("build_table", |bencher| {
        bencher.iter(|| black_box(PrecomputedTable::build(black_box(&g))))
    });
}

fn bench_point_multiply(c: &mut Criterion) {
    let table = PrecomputedTable::build(&Affine::generator());
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng).to_words();

    c.bench_function("point_multiply", |bencher| {
        bencher.iter(|| black_box(point_multiply(black_box(&scalar), black_box(&table))))
    });
}

fn bench_parse_public(c: &mut Criterion) {
    c.bench_function("parse_public", |bencher| {
        bencher.iter(|| black_box(parse_public(black_box(&G_COMPRESSED))))
    });
}

criterion_group!(
    benches,
    bench_affine_double,
    bench_affine_add,
    bench_wnaf_encode,
    bench_build_table,
    bench_point_multiply,
    bench_parse_public
);
criterion_main!(benches);
