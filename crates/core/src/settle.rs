//! Settling module - run-based gravity
//!
//! After a piece locks (or a merge or row clear removes support), tiles fall
//! straight down within their columns. Tiles do not fall independently:
//! a maximal horizontal run of contiguous occupied cells in a row is a
//! *support group* and falls as a unit, by the minimum free distance of its
//! members. An isolated tile is a run of length one and falls onto whatever
//! is beneath it.
//!
//! One [`settle_pass`] scans every row once; callers repeat it until it
//! reports no movement. Each pass strictly reduces the total height of
//! unsupported tiles, so the fixpoint is reached in bounded time.

use crate::grid::Grid;

/// One gravity pass over the whole grid.
///
/// Rows are scanned top to bottom; row 0 rests on the floor and is never a
/// fall source. Within a row, columns are scanned left to right and each
/// maximal run of occupied cells drops by the minimum fall distance of its
/// members. Returns whether any tile moved.
pub fn settle_pass(grid: &mut Grid) -> bool {
    let mut moved = false;

    for row in (1..grid.height() as i8).rev() {
        let mut col: i8 = 0;
        while col < grid.width() as i8 {
            if !grid.is_occupied(row, col) {
                col += 1;
                continue;
            }

            // Maximal run [start, end) of horizontally adjacent tiles.
            let start = col;
            while col < grid.width() as i8 && grid.is_occupied(row, col) {
                col += 1;
            }
            let end = col;

            if drop_run(grid, row, start, end) {
                moved = true;
            }
        }
    }

    moved
}

/// Repeat [`settle_pass`] until the grid is stable.
///
/// Returns whether any tile moved at all. At the fixpoint every occupied
/// cell either sits at row 0 or has an occupied cell directly beneath it.
pub fn settle(grid: &mut Grid) -> bool {
    let mut moved = false;
    while settle_pass(grid) {
        moved = true;
    }
    moved
}

/// Drop the run `[start, end)` in `row` by the minimum fall distance of its
/// members. A run touching support anywhere does not move.
fn drop_run(grid: &mut Grid, row: i8, start: i8, end: i8) -> bool {
    let mut distance = i8::MAX;
    for col in start..end {
        distance = distance.min(grid.fall_distance(row, col));
        if distance == 0 {
            return false;
        }
    }

    // Target cells are empty: distance is bounded by every member's own
    // free column below.
    for col in start..end {
        grid.move_tile((row, col), (row - distance, col));
    }
    true
}
