//! Grid and placement tests - bounds checking, occupancy, piece locking

use tui_tetris_2048::core::{Grid, GridEngine};
use tui_tetris_2048::types::Tile;

#[test]
fn new_grid_is_empty() {
    let grid = Grid::new(4, 4);
    assert_eq!(grid.tile_count(), 0);

    for row in 0..4 {
        for col in 0..4 {
            assert!(!grid.is_occupied(row, col));
            assert!(grid.is_inside(row, col));
        }
    }
}

#[test]
fn out_of_bounds_is_outside_and_unoccupied() {
    let grid = Grid::new(4, 4);

    assert!(!grid.is_inside(-1, 0));
    assert!(!grid.is_inside(0, -1));
    assert!(!grid.is_inside(4, 0));
    assert!(!grid.is_inside(0, 4));

    // Out of bounds reads answer "absent", they never fail.
    assert!(!grid.is_occupied(-1, 0));
    assert!(!grid.is_occupied(127, 127));
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.value_at(99, 0), None);
}

#[test]
fn tiles_always_match_their_cell() {
    let mut grid = Grid::new(6, 6);
    grid.put(5, 2, 2);
    grid.move_tile((5, 2), (0, 2));
    grid.put(3, 3, 8);
    grid.collapse_above(2, 3);

    for tile in grid.tiles() {
        assert_eq!(grid.value_at(tile.row, tile.col), Some(tile.value));
    }
}

#[test]
fn place_locked_piece_writes_every_tile() {
    let mut engine = GridEngine::new(6, 6);
    let tiles = [
        Tile::new(3, 1, 2),
        Tile::new(3, 2, 2),
        Tile::new(4, 1, 4),
        Tile::new(4, 2, 4),
    ];

    let game_over = engine.place_locked_piece(&tiles);

    assert!(!game_over);
    assert_eq!(engine.grid().tile_count(), 4);
    assert_eq!(engine.grid().value_at(3, 1), Some(2));
    assert_eq!(engine.grid().value_at(4, 2), Some(4));
}

#[test]
fn locking_above_the_ceiling_sets_game_over() {
    let mut engine = GridEngine::new(4, 4);
    let tiles = [Tile::new(4, 1, 2), Tile::new(3, 1, 2)];

    assert!(engine.place_locked_piece(&tiles));
    assert!(engine.is_game_over());

    // Placement is not aborted: the in-bounds tile landed.
    assert_eq!(engine.grid().value_at(3, 1), Some(2));
}

#[test]
fn game_over_never_resets() {
    let mut engine = GridEngine::new(4, 4);
    engine.place_locked_piece(&[Tile::new(9, 9, 2)]);
    assert!(engine.is_game_over());

    // A perfectly legal follow-up placement cannot clear the flag.
    assert!(engine.place_locked_piece(&[Tile::new(0, 0, 2)]));
    assert!(engine.is_game_over());
}

#[test]
fn engine_exposes_bounds_queries() {
    let mut engine = GridEngine::new(5, 3);
    engine.place_locked_piece(&[Tile::new(2, 1, 2)]);

    assert!(engine.is_inside(4, 2));
    assert!(!engine.is_inside(5, 0));
    assert!(engine.is_occupied(2, 1));
    assert!(!engine.is_occupied(2, 0));
    assert!(!engine.is_occupied(-1, -1));
}
