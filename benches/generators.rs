use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use maze_pathing::{
    generators,
    grid::Grid,
    renderers::NullRenderer,
    units::{Height, Width},
};

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    let mut g = Grid::with_size(Width(32), Height(32)).unwrap();
    let mut rng = XorShiftRng::seed_from_u64(32);

    c.bench_function("recursive_backtracker_maze_32", move |b| {
        b.iter(|| {
            g.reset();
            generators::recursive_backtracker(&mut g, &mut rng, &mut NullRenderer)
        })
    });
}

fn bench_recursive_backtracker_maze_256(c: &mut Criterion) {
    let mut g = Grid::with_size(Width(256), Height(256)).unwrap();
    let mut rng = XorShiftRng::seed_from_u64(256);

    c.bench_function("recursive_backtracker_maze_256", move |b| {
        b.iter(|| {
            g.reset();
            generators::recursive_backtracker(&mut g, &mut rng, &mut NullRenderer)
        })
    });
}

fn bench_rebuild_random_walls_64(c: &mut Criterion) {
    let mut g = Grid::with_size(Width(64), Height(64)).unwrap();
    let mut rng = XorShiftRng::seed_from_u64(64);

    c.bench_function("rebuild_random_walls_64", move |b| {
        b.iter(|| {
            g.reset();
            generators::recursive_backtracker(&mut g, &mut rng, &mut NullRenderer);
            generators::rebuild_random_walls(&mut g, 100, &mut rng)
        })
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_32,
    bench_recursive_backtracker_maze_256,
    bench_rebuild_random_walls_64
);
criterion_main!(benches);
