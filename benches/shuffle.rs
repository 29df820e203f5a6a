use criterion::{black_box, criterion_group, criterion_main, Criterion};
use huesort::core::{build_grid, generate_corners, min_moves, shuffle_tiles, SimpleRng};

fn bench_generate_level(c: &mut Criterion) {
    c.bench_function("generate_12x12_level", |b| {
        b.iter(|| {
            let corners = generate_corners(&mut SimpleRng::new(black_box(10001)));
            build_grid(12, &corners).unwrap()
        })
    });
}

fn bench_shuffle(c: &mut Criterion) {
    let corners = generate_corners(&mut SimpleRng::new(10001));
    let tiles = build_grid(12, &corners).unwrap();

    c.bench_function("shuffle_12x12", |b| {
        b.iter(|| shuffle_tiles(black_box(&tiles), &mut SimpleRng::new(11000)))
    });
}

fn bench_min_moves(c: &mut Criterion) {
    let corners = generate_corners(&mut SimpleRng::new(10001));
    let tiles = build_grid(12, &corners).unwrap();
    let shuffled = shuffle_tiles(&tiles, &mut SimpleRng::new(11000));

    c.bench_function("min_moves_12x12", |b| {
        b.iter(|| min_moves(black_box(&shuffled)))
    });
}

criterion_group!(benches, bench_generate_level, bench_shuffle, bench_min_moves);
criterion_main!(benches);
