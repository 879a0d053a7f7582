//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole simulation: the grid engine that settles,
//! merges and clears numbered tiles, and the falling-piece game state built
//! on top of it. It has **zero dependencies** on UI, networking, or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: The engine runs on any grid size, including tiny test grids
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: the tile matrix with bounds-safe access and position-stamped tiles
//! - [`settle`]: run-based gravity (support groups fall as a unit)
//! - [`merge`]: 2048-style vertical merge resolution with column collapse
//! - [`rows`]: full-row clearing and scoring
//! - [`engine`]: [`GridEngine`] - placement, game over, the turn-resolution fixpoint
//! - [`pieces`]: tetromino shapes and SRS rotation with wall kicks
//! - [`rng`]: seeded 7-bag piece generation and spawn tile values
//! - [`game_state`]: the falling-piece loop driving the engine
//!
//! # The turn resolution fixpoint
//!
//! Gravity, merging and row clearing interact: a merge can strand tiles in
//! the air, a row clear can enable a merge, and settling can complete a
//! row. After every piece lock the engine re-applies all three until none
//! changes the grid. Each pass shrinks something (unsupported gaps,
//! mergeable pairs, full rows), so the loop always terminates.
//!
//! # Example
//!
//! ```
//! use tetris2048_core::GridEngine;
//! use tetris2048_types::Tile;
//!
//! let mut engine = GridEngine::new(8, 8);
//! engine.place_locked_piece(&[
//!     Tile::new(5, 2, 2),
//!     Tile::new(6, 2, 2),
//! ]);
//! engine.run_turn_resolution();
//!
//! // Both tiles fell, met, and merged into a single 4.
//! assert_eq!(engine.grid().value_at(0, 2), Some(4));
//! assert_eq!(engine.score(), 4);
//! ```

pub mod engine;
pub mod game_state;
pub mod grid;
pub mod merge;
pub mod pieces;
pub mod rng;
pub mod rows;
pub mod settle;

pub use tetris2048_types as types;

// Re-export commonly used types for convenience
pub use engine::{GridEngine, ScoringPolicy};
pub use game_state::{GameState, Tetromino};
pub use grid::Grid;
pub use merge::MergeOutcome;
pub use pieces::{shape, try_rotate};
pub use rng::{PieceQueue, SimpleRng};
pub use rows::RowClearOutcome;
