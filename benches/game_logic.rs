use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{GameState, Grid};
use tui_2048::types::{Difficulty, Direction};

fn mixed_grid() -> Grid {
    Grid::from_rows([
        [2, 2, 4, 0],
        [0, 4, 4, 8],
        [2, 0, 2, 0],
        [16, 16, 8, 8],
    ])
}

fn bench_slide_left(c: &mut Criterion) {
    let base = mixed_grid();

    c.bench_function("slide_left", |b| {
        b.iter(|| {
            let mut grid = black_box(base);
            grid.slide(Direction::Left)
        })
    });
}

fn bench_slide_rotated(c: &mut Criterion) {
    let base = mixed_grid();

    // Up goes through the rotate/slide/rotate-back path.
    c.bench_function("slide_up", |b| {
        b.iter(|| {
            let mut grid = black_box(base);
            grid.slide(Direction::Up)
        })
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let base = mixed_grid();

    c.bench_function("apply_move", |b| {
        b.iter(|| {
            let mut state = GameState::from_grid(black_box(base), Difficulty::Easy, 12345);
            state.apply_move(Direction::Left)
        })
    });
}

fn bench_spawn_tile(c: &mut Criterion) {
    let base = mixed_grid();

    c.bench_function("spawn_tile", |b| {
        b.iter(|| {
            let mut state = GameState::from_grid(black_box(base), Difficulty::Hard, 777);
            state.spawn_tile()
        })
    });
}

fn bench_deadlock_check(c: &mut Criterion) {
    let dead = Grid::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ]);

    c.bench_function("is_deadlocked", |b| b.iter(|| black_box(&dead).is_deadlocked()));
}

criterion_group!(
    benches,
    bench_slide_left,
    bench_slide_rotated,
    bench_apply_move,
    bench_spawn_tile,
    bench_deadlock_check
);
criterion_main!(benches);
