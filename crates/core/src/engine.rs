//! Grid engine - owns the tile matrix and all mutation logic
//!
//! The engine is invoked once per tetromino lock event and runs gravity,
//! merging and row clearing to a fixpoint. It owns the score and the
//! terminal `game_over` flag; both are monotonic for the engine's lifetime.

use tetris2048_types::Tile;

use crate::grid::Grid;
use crate::merge::resolve_merges;
use crate::rows::resolve_full_rows;
use crate::settle;

/// Whether the engine keeps score.
///
/// The simulation is identical under both policies; `Unscored` simply
/// discards the points that merges and row clears would earn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringPolicy {
    #[default]
    Scored,
    Unscored,
}

/// The grid simulation engine.
#[derive(Debug, Clone, PartialEq)]
pub struct GridEngine {
    grid: Grid,
    score: u32,
    game_over: bool,
    scoring: ScoringPolicy,
}

impl GridEngine {
    /// Create an engine with an empty grid and scoring enabled.
    pub fn new(height: u8, width: u8) -> Self {
        Self::from_grid(Grid::new(height, width), ScoringPolicy::Scored)
    }

    /// Create an engine around an existing grid.
    pub fn from_grid(grid: Grid, scoring: ScoringPolicy) -> Self {
        Self {
            grid,
            score: 0,
            game_over: false,
            scoring,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// True iff (row, col) lies within the grid.
    pub fn is_inside(&self, row: i8, col: i8) -> bool {
        self.grid.is_inside(row, col)
    }

    /// True iff the cell holds a tile; out of bounds is never occupied.
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        self.grid.is_occupied(row, col)
    }

    fn add_points(&mut self, points: u32) {
        if self.scoring == ScoringPolicy::Scored {
            self.score = self.score.saturating_add(points);
        }
    }

    /// Place the tiles of a just-locked tetromino onto the grid.
    ///
    /// Every tile is attempted: in-bounds tiles are written into their
    /// target cells, and any tile whose target lies outside the grid (it
    /// locked above the ceiling) sets the terminal `game_over` flag without
    /// aborting the remaining placements. Returns the resulting flag.
    pub fn place_locked_piece(&mut self, tiles: &[Tile]) -> bool {
        for tile in tiles {
            if self.grid.is_inside(tile.row, tile.col) {
                self.grid.put(tile.row, tile.col, tile.value);
            } else {
                self.game_over = true;
            }
        }
        self.game_over
    }

    /// One gravity pass. Returns whether any tile moved.
    pub fn settle_pass(&mut self) -> bool {
        settle::settle_pass(&mut self.grid)
    }

    /// Run gravity to its fixpoint. Returns whether any tile moved at all.
    pub fn settle(&mut self) -> bool {
        settle::settle(&mut self.grid)
    }

    /// Resolve all vertical merges, scoring the doubled values.
    /// Returns whether any merge occurred.
    pub fn resolve_merges(&mut self) -> bool {
        self.resolve_merges_with(&mut |_| {})
    }

    /// Like [`GridEngine::resolve_merges`], notifying `on_change` after each
    /// merge so a renderer can redraw incrementally.
    pub fn resolve_merges_with(&mut self, on_change: &mut impl FnMut(&Grid)) -> bool {
        let outcome = resolve_merges(&mut self.grid, on_change);
        self.add_points(outcome.points);
        outcome.merged
    }

    /// Clear every full row, scoring the sum of the cleared values.
    /// Returns whether any row was cleared.
    pub fn resolve_full_rows(&mut self) -> bool {
        let outcome = resolve_full_rows(&mut self.grid);
        self.add_points(outcome.points);
        outcome.rows > 0
    }

    /// Run the full turn resolution protocol after a piece locks.
    ///
    /// Gravity settles to a fixpoint, then merges run (a merge can strand
    /// tiles, so control returns to gravity), then full rows clear (a clear
    /// drops tiles and can expose new merges, so control returns to gravity
    /// again). The loop terminates when one full cycle changes nothing.
    /// A no-op once the game is over.
    pub fn run_turn_resolution(&mut self) {
        self.run_turn_resolution_with(&mut |_| {});
    }

    /// Like [`GridEngine::run_turn_resolution`] with a change observer
    /// threaded through merge resolution.
    pub fn run_turn_resolution_with(&mut self, on_change: &mut impl FnMut(&Grid)) {
        if self.game_over {
            return;
        }
        loop {
            self.settle();
            if self.resolve_merges_with(on_change) {
                continue;
            }
            if self.resolve_full_rows() {
                continue;
            }
            break;
        }
    }
}
