//! Gravity tests - support runs, fall distances, the settle fixpoint

use tui_tetris_2048::core::{Grid, GridEngine, ScoringPolicy};
use tui_tetris_2048::types::Tile;

fn engine_from(rows: &[&[u32]]) -> GridEngine {
    GridEngine::from_grid(Grid::from_value_rows(rows), ScoringPolicy::Scored)
}

#[test]
fn single_tile_drops_to_the_floor() {
    // A lone 2 dropped at the top of an empty 4x4 column rests on row 0
    // with no merge and no score change.
    let mut engine = GridEngine::new(4, 4);
    engine.place_locked_piece(&[Tile::new(3, 0, 2)]);

    engine.run_turn_resolution();

    assert_eq!(engine.grid().value_at(0, 0), Some(2));
    assert_eq!(engine.grid().tile_count(), 1);
    assert_eq!(engine.score(), 0);
}

#[test]
fn horizontal_run_lands_together() {
    // A run of three tiles with nothing beneath lands on the floor in its
    // original columns after one settle fixpoint.
    let mut engine = engine_from(&[
        &[0, 2, 4, 2, 0],
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
    ]);

    assert!(engine.settle());

    assert_eq!(engine.grid().value_at(0, 1), Some(2));
    assert_eq!(engine.grid().value_at(0, 2), Some(4));
    assert_eq!(engine.grid().value_at(0, 3), Some(2));
    assert_eq!(engine.grid().tile_count(), 3);
}

#[test]
fn run_is_limited_by_its_most_supported_member() {
    // One member of the run has support two below; the whole run drops by
    // that minimum and no further.
    let mut engine = engine_from(&[
        &[2, 2, 2, 0],
        &[0, 0, 0, 0],
        &[0, 4, 0, 0],
        &[0, 8, 0, 0],
    ]);

    engine.settle();

    assert_eq!(engine.grid().value_at(2, 0), Some(2));
    assert_eq!(engine.grid().value_at(2, 1), Some(2));
    assert_eq!(engine.grid().value_at(2, 2), Some(2));
    assert_eq!(engine.grid().value_at(1, 1), Some(4));
}

#[test]
fn runs_separated_by_a_gap_fall_independently() {
    let mut engine = engine_from(&[
        &[2, 0, 4, 4],
        &[0, 0, 0, 0],
        &[0, 0, 0, 0],
        &[0, 0, 8, 0],
    ]);

    engine.settle();

    // The lone 2 hits the floor; the 4-4 pair comes to rest on the 8, its
    // right member overhanging.
    assert_eq!(engine.grid().value_at(0, 0), Some(2));
    assert_eq!(engine.grid().value_at(1, 0), None);
    assert_eq!(engine.grid().value_at(1, 2), Some(4));
    assert_eq!(engine.grid().value_at(1, 3), Some(4));
    assert_eq!(engine.grid().value_at(0, 2), Some(8));
    assert_eq!(engine.grid().value_at(0, 3), None);
}

#[test]
fn settle_fixpoint_leaves_no_floating_tile() {
    let mut engine = engine_from(&[
        &[2, 0, 4, 0, 2],
        &[0, 8, 0, 0, 0],
        &[0, 0, 0, 16, 0],
        &[2, 0, 0, 0, 0],
        &[0, 0, 32, 0, 4],
    ]);

    engine.settle();

    // Every tile sits on the floor or on another tile.
    for tile in engine.grid().tiles() {
        assert!(
            tile.row == 0 || engine.grid().is_occupied(tile.row - 1, tile.col),
            "tile at ({}, {}) is floating",
            tile.row,
            tile.col
        );
    }

    // Applying gravity again changes nothing.
    assert!(!engine.settle_pass());
}

#[test]
fn settling_preserves_tiles_and_values() {
    let mut engine = engine_from(&[
        &[2, 2, 0, 4],
        &[0, 0, 0, 0],
        &[8, 0, 16, 0],
        &[0, 0, 0, 2],
    ]);
    let sum = engine.grid().value_sum();
    let count = engine.grid().tile_count();

    engine.settle();

    assert_eq!(engine.grid().value_sum(), sum);
    assert_eq!(engine.grid().tile_count(), count);
    assert_eq!(engine.score(), 0);
}
