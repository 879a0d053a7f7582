//! Game state module - the falling-piece loop around the grid engine
//!
//! Ties together the piece queue, the active tetromino and the
//! [`GridEngine`]. The state machine is the classic one: a piece spawns
//! above the playfield, gravity pulls it down one row at a time, the player
//! shifts and rotates it, and once it rests long enough it locks. Locking
//! hands the piece's tiles to the engine, which then settles, merges and
//! clears to a fixpoint before the next piece spawns.

use arrayvec::ArrayVec;

use tetris2048_types::{
    GameAction, PieceKind, Rotation, Tile, DROP_INTERVALS, DROP_INTERVAL_FLOOR_MS, GRID_HEIGHT,
    GRID_WIDTH, LOCK_DELAY_MS, LOCK_RESET_LIMIT, SCORE_PER_LEVEL, SOFT_DROP_MULTIPLIER,
};

use crate::engine::GridEngine;
use crate::pieces::{shape, try_rotate, PieceShape};
use crate::rng::PieceQueue;

/// Spawn origin: centered horizontally, one row above the visible grid so
/// pieces drop in from the top. Locking while still poking above the
/// ceiling is the game-over condition.
const SPAWN_COL: i8 = (GRID_WIDTH as i8 - 4) / 2;
const SPAWN_ROW: i8 = GRID_HEIGHT as i8;

/// The active falling piece. Every mino carries its own tile value,
/// assigned when the piece spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Grid row of the piece origin (rows grow upward).
    pub row: i8,
    /// Grid column of the piece origin.
    pub col: i8,
    /// Tile values of the four minos, in shape order.
    pub values: [u32; 4],
}

impl Tetromino {
    /// Get the shape (mino offsets) for the current rotation
    pub fn shape(&self) -> PieceShape {
        shape(self.kind, self.rotation)
    }

    /// Absolute (row, col) cells the piece occupies.
    pub fn cells(&self) -> [(i8, i8); 4] {
        let mut cells = [(0, 0); 4];
        for (slot, &(dcol, depth)) in cells.iter_mut().zip(self.shape().iter()) {
            *slot = (self.row - depth, self.col + dcol);
        }
        cells
    }

    /// The piece's minos as grid tiles at their absolute positions.
    pub fn tiles(&self) -> ArrayVec<Tile, 4> {
        let mut tiles = ArrayVec::new();
        for (&(row, col), &value) in self.cells().iter().zip(self.values.iter()) {
            tiles.push(Tile::new(row, col, value));
        }
        tiles
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    engine: GridEngine,
    active: Option<Tetromino>,
    next_kind: PieceKind,
    queue: PieceQueue,
    seed: u32,
    drop_timer_ms: u32,
    lock_timer_ms: u32,
    lock_reset_count: u8,
    paused: bool,
    started: bool,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut queue = PieceQueue::new(seed);
        let next_kind = queue.draw();

        Self {
            engine: GridEngine::new(GRID_HEIGHT, GRID_WIDTH),
            active: None,
            next_kind,
            queue,
            seed,
            drop_timer_ms: 0,
            lock_timer_ms: 0,
            lock_reset_count: 0,
            paused: false,
            started: false,
            game_over: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Terminal state: the engine flagged a lock above the ceiling, or a
    /// fresh piece had nowhere to spawn.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    /// Speed level, driven by score rather than a line counter.
    pub fn level(&self) -> u32 {
        self.engine.score() / SCORE_PER_LEVEL
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next_kind
    }

    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    /// Milliseconds per gravity row at the current level.
    pub fn drop_interval_ms(&self, soft_drop: bool) -> u32 {
        let base = DROP_INTERVALS
            .get(self.level() as usize)
            .copied()
            .unwrap_or(DROP_INTERVAL_FLOOR_MS);
        if soft_drop {
            (base / SOFT_DROP_MULTIPLIER).max(1)
        } else {
            base
        }
    }

    /// May the active piece occupy this cell? Columns are bounded on both
    /// sides and the floor below row 0 is solid, but cells above the
    /// ceiling are free - pieces drop in from up there.
    fn cell_free(&self, row: i8, col: i8) -> bool {
        if col < 0 || col >= GRID_WIDTH as i8 || row < 0 {
            return false;
        }
        !self.engine.is_occupied(row, col)
    }

    fn piece_fits(&self, piece: &Tetromino) -> bool {
        piece.cells().iter().all(|&(row, col)| self.cell_free(row, col))
    }

    /// Spawn the next piece above the playfield. A blocked spawn ends the
    /// game.
    fn spawn_piece(&mut self) -> bool {
        let kind = self.next_kind;
        let values = [
            self.queue.draw_value(),
            self.queue.draw_value(),
            self.queue.draw_value(),
            self.queue.draw_value(),
        ];
        let piece = Tetromino {
            kind,
            rotation: Rotation::North,
            row: SPAWN_ROW,
            col: SPAWN_COL,
            values,
        };

        if !self.piece_fits(&piece) {
            self.game_over = true;
            self.active = None;
            return false;
        }

        self.active = Some(piece);
        self.next_kind = self.queue.draw();
        self.drop_timer_ms = 0;
        self.lock_timer_ms = 0;
        self.lock_reset_count = 0;
        true
    }

    /// Is the active piece resting on the stack or the floor?
    pub fn is_grounded(&self) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        piece
            .cells()
            .iter()
            .any(|&(row, col)| !self.cell_free(row - 1, col))
    }

    /// Try to shift the active piece by (drow, dcol).
    fn try_move(&mut self, drow: i8, dcol: i8) -> bool {
        let Some(piece) = self.active else {
            return false;
        };

        let moved = Tetromino {
            row: piece.row + drow,
            col: piece.col + dcol,
            ..piece
        };
        if !self.piece_fits(&moved) {
            return false;
        }

        self.active = Some(moved);
        if dcol != 0 && self.is_grounded() {
            self.reset_lock_timer();
        }
        true
    }

    /// Try to rotate the active piece with SRS wall kicks.
    fn try_rotate_active(&mut self, clockwise: bool) -> bool {
        let Some(piece) = self.active else {
            return false;
        };

        // O rotates into itself.
        if piece.kind == PieceKind::O {
            return false;
        }

        let result = try_rotate(
            piece.kind,
            piece.rotation,
            piece.row,
            piece.col,
            clockwise,
            |row, col| self.cell_free(row, col),
        );

        let Some((rotation, (drow, dcol))) = result else {
            return false;
        };

        self.active = Some(Tetromino {
            rotation,
            row: piece.row + drow,
            col: piece.col + dcol,
            ..piece
        });
        self.reset_lock_timer();
        true
    }

    /// Reset the lock timer (with reset limit)
    fn reset_lock_timer(&mut self) {
        if self.lock_reset_count < LOCK_RESET_LIMIT {
            self.lock_timer_ms = 0;
            self.lock_reset_count += 1;
        }
    }

    /// Lock the active piece into the grid and resolve the turn.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        let tiles = piece.tiles();
        if self.engine.place_locked_piece(&tiles) {
            // Locked above the ceiling: the turn ends here, no settling or
            // merging happens on a dead grid.
            self.game_over = true;
            return;
        }

        self.engine.run_turn_resolution();
        self.spawn_piece();
    }

    /// Drop the active piece to its resting row and lock it immediately.
    fn hard_drop(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        while self.try_move(-1, 0) {}
        self.lock_active();
        true
    }

    /// Apply a player action. Returns whether the action had an effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if !self.started {
            return false;
        }

        match action {
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::Pause => {
                if self.game_over {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            _ if self.paused || self.game_over => false,
            GameAction::MoveLeft => self.try_move(0, -1),
            GameAction::MoveRight => self.try_move(0, 1),
            GameAction::SoftDrop => {
                self.drop_timer_ms = 0;
                self.try_move(-1, 0)
            }
            GameAction::HardDrop => self.hard_drop(),
            GameAction::RotateCw => self.try_rotate_active(true),
            GameAction::RotateCcw => self.try_rotate_active(false),
        }
    }

    /// Advance the game clock by `elapsed_ms`.
    ///
    /// `soft_drop` speeds gravity up by [`SOFT_DROP_MULTIPLIER`] while the
    /// player holds the drop key.
    pub fn tick(&mut self, elapsed_ms: u32, soft_drop: bool) {
        if !self.started || self.paused || self.game_over {
            return;
        }

        if self.active.is_none() {
            self.spawn_piece();
            return;
        }

        if self.is_grounded() {
            self.lock_timer_ms += elapsed_ms;
            if self.lock_timer_ms >= LOCK_DELAY_MS {
                self.lock_active();
                return;
            }
        } else {
            self.lock_timer_ms = 0;
        }

        self.drop_timer_ms += elapsed_ms;
        let interval = self.drop_interval_ms(soft_drop);
        while self.drop_timer_ms >= interval {
            self.drop_timer_ms -= interval;
            if !self.try_move(-1, 0) {
                break;
            }
        }
    }

    /// Restart with the original seed: same piece sequence, fresh grid.
    pub fn restart(&mut self) {
        *self = GameState::new(self.seed);
        self.start();
    }
}
