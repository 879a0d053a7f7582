//! Merge module - 2048-style vertical merging
//!
//! Within each column, a tile and the tile directly above it merge when
//! their values are equal: the lower tile doubles, the upper tile is
//! removed, and the doubled value is worth that many points. If a tile sat
//! two rows above the merge point, the column above the new gap collapses
//! down one row immediately so the stack stays contiguous.
//!
//! A merge can enable another merge lower in the same column, so after any
//! merge the column scan restarts from the bottom rather than continuing
//! upward. The restart is expressed as a labelled loop instead of rewinding
//! a scan index.

use crate::grid::Grid;

/// Result of one merge resolution over the whole grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeOutcome {
    /// Whether any pair merged.
    pub merged: bool,
    /// Points earned: the sum of the doubled values produced.
    pub points: u32,
}

/// Resolve all vertical merges, column by column.
///
/// `on_change` fires after every single merge with the grid in its updated
/// state; renderers can hook it for incremental redraws. Pass a no-op
/// closure when no observer is needed.
pub fn resolve_merges(grid: &mut Grid, on_change: &mut impl FnMut(&Grid)) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();

    for col in 0..grid.width() as i8 {
        'rescan: loop {
            for row in 0..(grid.height() as i8 - 1) {
                let Some(lower) = grid.value_at(row, col) else {
                    continue;
                };
                let Some(upper) = grid.value_at(row + 1, col) else {
                    continue;
                };
                if lower != upper {
                    continue;
                }

                let doubled = lower * 2;
                grid.put(row, col, doubled);
                grid.take(row + 1, col);
                outcome.points += doubled;
                outcome.merged = true;

                // An out-of-range neighbor above the top row counts as
                // absent, so no guard is needed here.
                if grid.is_occupied(row + 2, col) {
                    grid.collapse_above(row + 1, col);
                }

                on_change(grid);
                continue 'rescan;
            }
            break;
        }
    }

    outcome
}
