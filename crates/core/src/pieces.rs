//! Pieces module - tetromino shapes and SRS rotation
//!
//! Implements the Standard Rotation System (SRS) with wall kick tables.
//! Reference: https://tetris.wiki/SRS
//!
//! Offsets are `(dcol, depth)` relative to the piece origin, where `depth`
//! counts rows *below* the origin row. The grid's rows grow upward (row 0
//! is the floor), so a mino's absolute cell is
//! `(origin_row - depth, origin_col + dcol)`.

use tetris2048_types::{PieceKind, Rotation};

/// Offset of a single mino relative to the piece origin: (dcol, depth).
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the piece origin.
pub type PieceShape = [MinoOffset; 4];

/// Get the shape (mino offsets) for a piece kind and rotation.
pub fn shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    use PieceKind::*;
    use Rotation::*;

    match (kind, rotation) {
        (I, North) => [(0, 1), (1, 1), (2, 1), (3, 1)],
        (I, East) => [(2, 0), (2, 1), (2, 2), (2, 3)],
        (I, South) => [(0, 2), (1, 2), (2, 2), (3, 2)],
        (I, West) => [(1, 0), (1, 1), (1, 2), (1, 3)],

        // O ignores rotation.
        (O, _) => [(1, 0), (2, 0), (1, 1), (2, 1)],

        (T, North) => [(1, 0), (0, 1), (1, 1), (2, 1)],
        (T, East) => [(1, 0), (1, 1), (2, 1), (1, 2)],
        (T, South) => [(0, 1), (1, 1), (2, 1), (1, 2)],
        (T, West) => [(1, 0), (0, 1), (1, 1), (1, 2)],

        (S, North) => [(1, 0), (2, 0), (0, 1), (1, 1)],
        (S, East) => [(1, 0), (1, 1), (2, 1), (2, 2)],
        (S, South) => [(1, 1), (2, 1), (0, 2), (1, 2)],
        (S, West) => [(0, 0), (0, 1), (1, 1), (1, 2)],

        (Z, North) => [(0, 0), (1, 0), (1, 1), (2, 1)],
        (Z, East) => [(2, 0), (1, 1), (2, 1), (1, 2)],
        (Z, South) => [(0, 1), (1, 1), (1, 2), (2, 2)],
        (Z, West) => [(1, 0), (0, 1), (1, 1), (0, 2)],

        (J, North) => [(0, 0), (0, 1), (1, 1), (2, 1)],
        (J, East) => [(1, 0), (2, 0), (1, 1), (1, 2)],
        (J, South) => [(0, 1), (1, 1), (2, 1), (2, 2)],
        (J, West) => [(1, 0), (1, 1), (0, 2), (1, 2)],

        (L, North) => [(2, 0), (0, 1), (1, 1), (2, 1)],
        (L, East) => [(1, 0), (1, 1), (1, 2), (2, 2)],
        (L, South) => [(0, 1), (1, 1), (2, 1), (0, 2)],
        (L, West) => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}

/// SRS wall kick data.
///
/// Each entry is a `(dcol, drow)` offset to try when the basic rotation
/// fails, already expressed in rows-grow-upward coordinates. Order:
/// 0 = unkicked rotation, 1-4 = wall kicks.
pub type KickTable = [[(i8, i8); 5]; 8];

/// Kick table for a piece kind, indexed by [`kick_index`].
fn kick_table(kind: PieceKind) -> &'static KickTable {
    match kind {
        PieceKind::O => &O_KICKS,
        PieceKind::I => &I_KICKS,
        _ => &JLSTZ_KICKS,
    }
}

/// O piece has no kicks (always rotates in place).
const O_KICKS: KickTable = [[(0, 0); 5]; 8];

/// JLSTZ kick table (shared by J, L, S, T, Z).
const JLSTZ_KICKS: KickTable = [
    // N->E (clockwise)
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // N->W (counter-clockwise)
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // E->N (counter-clockwise)
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // E->S (clockwise)
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // S->E (counter-clockwise)
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // S->W (clockwise)
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // W->S (counter-clockwise)
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // W->N (clockwise)
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
];

/// I piece kick table (different from JLSTZ).
const I_KICKS: KickTable = [
    // N->E
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    // N->W
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // E->N
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // E->S
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // S->E
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
    // S->W
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // W->S
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    // W->N
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
];

/// Kick table row for a rotation transition.
fn kick_index(from: Rotation, clockwise: bool) -> usize {
    match (from, clockwise) {
        (Rotation::North, true) => 0,
        (Rotation::North, false) => 1,
        (Rotation::East, false) => 2,
        (Rotation::East, true) => 3,
        (Rotation::South, false) => 4,
        (Rotation::South, true) => 5,
        (Rotation::West, false) => 6,
        (Rotation::West, true) => 7,
    }
}

/// Try to rotate a piece with wall kicks.
///
/// `cell_free` answers whether the piece may occupy an absolute
/// `(row, col)` cell. Returns the new rotation and the `(drow, dcol)` kick
/// that was applied to the origin, or None if every kick fails.
pub fn try_rotate(
    kind: PieceKind,
    rotation: Rotation,
    origin_row: i8,
    origin_col: i8,
    clockwise: bool,
    cell_free: impl Fn(i8, i8) -> bool,
) -> Option<(Rotation, (i8, i8))> {
    let new_rotation = if clockwise {
        rotation.rotate_cw()
    } else {
        rotation.rotate_ccw()
    };

    let new_shape = shape(kind, new_rotation);
    let kicks = &kick_table(kind)[kick_index(rotation, clockwise)];

    for &(dcol, drow) in kicks.iter() {
        let row = origin_row + drow;
        let col = origin_col + dcol;

        let fits = new_shape
            .iter()
            .all(|&(mc, depth)| cell_free(row - depth, col + mc));

        if fits {
            return Some((new_rotation, (drow, dcol)));
        }
    }

    None
}
