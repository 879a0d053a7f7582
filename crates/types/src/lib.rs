//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (grid simulation, game loop, terminal view).
//!
//! # Grid Dimensions
//!
//! The default playfield is 12 columns by 20 rows. Row 0 is the **bottom**
//! of the grid and row `GRID_HEIGHT - 1` is the top; a falling tile moves
//! toward row 0. The grid engine itself accepts arbitrary dimensions so the
//! simulation can be exercised on small grids in tests.
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `SOFT_DROP_MULTIPLIER` | 10 | Soft drop is 10x faster |
//! | `SOFT_DROP_GRACE_MS` | 150 | Soft drop state timeout |
//! | `LOCK_DELAY_MS` | 450 | Time before piece locks when grounded |
//! | `LOCK_RESET_LIMIT` | 15 | Max lock timer resets per piece |

/// Grid width in cells (12 columns)
pub const GRID_WIDTH: u8 = 12;

/// Grid height in cells (20 rows, row 0 at the bottom)
pub const GRID_HEIGHT: u8 = 20;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Soft drop speed multiplier (10x normal gravity)
pub const SOFT_DROP_MULTIPLIER: u32 = 10;

/// Soft drop state timeout for terminals without key-release events
pub const SOFT_DROP_GRACE_MS: u32 = 150;

/// Lock delay when a piece is grounded (450ms)
pub const LOCK_DELAY_MS: u32 = 450;

/// Maximum number of lock timer resets per piece (15)
pub const LOCK_RESET_LIMIT: u8 = 15;

/// Drop intervals by level (milliseconds per row)
///
/// Index 0 = Level 0, Index 8 = Level 8+
pub const DROP_INTERVALS: [u32; 9] = [1000, 800, 650, 500, 400, 320, 250, 200, 160];

/// Drop interval used beyond the end of [`DROP_INTERVALS`]
pub const DROP_INTERVAL_FLOOR_MS: u32 = 120;

/// Score needed to advance one level
///
/// Unlike classic Tetris there is no line counter driving the level; merge
/// and row-clear points push the speed up instead.
pub const SCORE_PER_LEVEL: u32 = 300;

/// A freshly spawned mino carries value 4 with probability 1/FOUR_TILE_ODDS,
/// value 2 otherwise.
pub const FOUR_TILE_ODDS: u32 = 4;

/// A single numbered tile on the grid.
///
/// A tile knows the cell it occupies; the grid keeps `row`/`col` in sync
/// with the cell the tile is stored under whenever a tile moves. `value`
/// is always a positive power of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub row: i8,
    pub col: i8,
    pub value: u32,
}

impl Tile {
    pub fn new(row: i8, col: i8, value: u32) -> Self {
        debug_assert!(value.is_power_of_two());
        Self { row, col, value }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(Tile)`: Cell holding a numbered tile
///
/// Used internally by the grid as a flat array of cells.
pub type Cell = Option<Tile>;

/// The seven tetromino piece kinds
///
/// Shapes follow the standard Tetris pieces; every mino of a spawned piece
/// carries its own tile value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in bag order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Rotation states following the Super Rotation System (SRS)
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90° or 270°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// Game actions applied to the falling piece or the game lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Drop piece one row down
    SoftDrop,
    /// Instantly drop piece to its resting position and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Toggle pause state
    Pause,
    /// Restart the game (when game over or at any time)
    Restart,
}
