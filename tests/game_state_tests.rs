//! Game state tests - the falling-piece loop around the grid engine

use tui_tetris_2048::core::GameState;
use tui_tetris_2048::types::{GameAction, GRID_WIDTH};

#[test]
fn game_starts_with_an_active_piece() {
    let mut game = GameState::new(1);
    assert!(game.active().is_none());

    game.start();
    assert!(game.started());
    assert!(game.active().is_some());
    assert_eq!(game.score(), 0);
    assert!(!game.game_over());
}

#[test]
fn piece_cells_stay_inside_the_columns() {
    let mut game = GameState::new(5);
    game.start();

    // Push the piece hard against both walls; it must never leave the grid
    // horizontally.
    for _ in 0..GRID_WIDTH * 2 {
        game.apply_action(GameAction::MoveLeft);
    }
    for &(_, col) in game.active().unwrap().cells().iter() {
        assert!((0..GRID_WIDTH as i8).contains(&col));
    }

    for _ in 0..GRID_WIDTH * 2 {
        game.apply_action(GameAction::MoveRight);
    }
    for &(_, col) in game.active().unwrap().cells().iter() {
        assert!((0..GRID_WIDTH as i8).contains(&col));
    }
}

#[test]
fn gravity_pulls_the_piece_down() {
    let mut game = GameState::new(1);
    game.start();

    let before = game.active().unwrap().row;
    // One full gravity interval at level 0.
    game.tick(game.drop_interval_ms(false), false);
    let after = game.active().unwrap().row;

    assert_eq!(after, before - 1);
}

#[test]
fn soft_drop_interval_is_faster() {
    let game = GameState::new(1);
    assert!(game.drop_interval_ms(true) < game.drop_interval_ms(false));
}

#[test]
fn hard_drop_locks_tiles_into_the_grid() {
    let mut game = GameState::new(1);
    game.start();

    assert_eq!(game.engine().grid().tile_count(), 0);
    game.apply_action(GameAction::HardDrop);

    // Four minos locked (merges can only shrink the count, never to zero:
    // nothing clears on an otherwise empty grid).
    let count = game.engine().grid().tile_count();
    assert!(count >= 1 && count <= 4);

    // A new piece is already falling.
    assert!(game.active().is_some());
}

#[test]
fn identical_seeds_play_identical_games() {
    let mut a = GameState::new(777);
    let mut b = GameState::new(777);
    a.start();
    b.start();

    for step in 0..300 {
        let action = match step % 4 {
            0 => GameAction::MoveLeft,
            1 => GameAction::HardDrop,
            2 => GameAction::MoveRight,
            _ => GameAction::RotateCw,
        };
        a.apply_action(action);
        b.apply_action(action);
        a.tick(16, false);
        b.tick(16, false);
    }

    assert_eq!(a.score(), b.score());
    assert_eq!(a.game_over(), b.game_over());
    assert_eq!(a.engine().grid(), b.engine().grid());
}

#[test]
fn pause_freezes_gravity() {
    let mut game = GameState::new(1);
    game.start();

    game.apply_action(GameAction::Pause);
    let row = game.active().unwrap().row;
    game.tick(10_000, false);
    assert_eq!(game.active().unwrap().row, row);

    game.apply_action(GameAction::Pause);
    game.tick(game.drop_interval_ms(false), false);
    assert!(game.active().unwrap().row < row);
}

#[test]
fn restart_gives_a_fresh_board_with_the_same_piece_sequence() {
    let mut game = GameState::new(31);
    game.start();
    let first_kind = game.active().unwrap().kind;

    for _ in 0..50 {
        game.apply_action(GameAction::HardDrop);
    }
    game.apply_action(GameAction::Restart);

    assert_eq!(game.score(), 0);
    assert_eq!(game.engine().grid().tile_count(), 0);
    assert_eq!(game.active().unwrap().kind, first_kind);
}

#[test]
fn dropping_forever_reaches_game_over_and_stays_there() {
    let mut game = GameState::new(11);
    game.start();

    for _ in 0..2000 {
        if game.game_over() {
            break;
        }
        game.apply_action(GameAction::HardDrop);
    }

    assert!(game.game_over());
    let grid_at_death = game.engine().grid().clone();

    // Ticks and moves are inert once dead; only restart revives.
    game.tick(10_000, false);
    assert!(!game.apply_action(GameAction::MoveLeft));
    assert_eq!(game.engine().grid(), &grid_at_death);

    game.apply_action(GameAction::Restart);
    assert!(!game.game_over());
}
