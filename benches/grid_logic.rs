use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_tetris_2048::core::{GameState, Grid, GridEngine, ScoringPolicy};
use tui_tetris_2048::types::{GRID_HEIGHT, GRID_WIDTH};

/// A tall sparse stack: every third cell filled, values varied so merges
/// and clears both have work to do.
fn cluttered_grid() -> Grid {
    let mut grid = Grid::new(GRID_HEIGHT, GRID_WIDTH);
    for row in 0..GRID_HEIGHT as i8 {
        for col in 0..GRID_WIDTH as i8 {
            if (row as usize * GRID_WIDTH as usize + col as usize) % 3 == 0 {
                let value = 2u32 << ((row as u32 + col as u32) % 5);
                grid.put(row, col, value);
            }
        }
    }
    grid
}

fn bench_settle_fixpoint(c: &mut Criterion) {
    c.bench_function("settle_fixpoint", |b| {
        b.iter(|| {
            let mut engine =
                GridEngine::from_grid(black_box(cluttered_grid()), ScoringPolicy::Scored);
            engine.settle();
        })
    });
}

fn bench_merge_cascade(c: &mut Criterion) {
    c.bench_function("merge_cascade_full_column", |b| {
        b.iter(|| {
            // A full column of equal tiles: worst-case rescan behavior.
            let mut grid = Grid::new(GRID_HEIGHT, GRID_WIDTH);
            for row in 0..GRID_HEIGHT as i8 {
                grid.put(row, 0, 2);
            }
            let mut engine = GridEngine::from_grid(black_box(grid), ScoringPolicy::Scored);
            engine.resolve_merges();
        })
    });
}

fn bench_turn_resolution(c: &mut Criterion) {
    c.bench_function("turn_resolution", |b| {
        b.iter(|| {
            let mut engine =
                GridEngine::from_grid(black_box(cluttered_grid()), ScoringPolicy::Scored);
            engine.run_turn_resolution();
        })
    });
}

fn bench_game_tick(c: &mut Criterion) {
    let mut game = GameState::new(12345);
    game.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            game.tick(black_box(16), false);
        })
    });
}

criterion_group!(
    benches,
    bench_settle_fixpoint,
    bench_merge_cascade,
    bench_turn_resolution,
    bench_game_tick
);
criterion_main!(benches);
