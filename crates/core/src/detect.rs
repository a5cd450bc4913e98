//! Match detector - finds runs of at least three identical candies
//!
//! Detection is a first-match-wins linear scan. The scan order is part of the
//! game rules because it decides which runs a resolution pass collects:
//!
//! - rows ascending, starting at the cursor row;
//! - within each row, columns ascending, starting at the cursor column
//!   (the cursor column applies to every scanned row, not only the first);
//! - the first qualifying run is returned immediately.
//!
//! Runs are maximal: a cell whose predecessor on the axis holds the same candy
//! is not a run start, so a run of 5 is reported once as length 5 and never
//! again as a suffix of length 4 or 3.

use crate::grid::Grid;
use crate::types::{Axis, Candy, Position, Run, MIN_RUN_LENGTH};

/// Find the first column run (extending downward) at or after `from`.
pub fn find_column_run(grid: &Grid, from: Position) -> Option<Run> {
    find_run(grid, from, Axis::Column)
}

/// Find the first row run (extending rightward) at or after `from`.
pub fn find_row_run(grid: &Grid, from: Position) -> Option<Run> {
    find_run(grid, from, Axis::Row)
}

/// Find the first run along `axis` at or after `from` in scan order.
///
/// A cursor row or column of 0 behaves as 1.
pub fn find_run(grid: &Grid, from: Position, axis: Axis) -> Option<Run> {
    let reach = MIN_RUN_LENGTH - 1;
    // Last row/column a run along `axis` can start from.
    let (last_row, last_col) = match axis {
        Axis::Column => (grid.height().checked_sub(reach)?, grid.width()),
        Axis::Row => (grid.height(), grid.width().checked_sub(reach)?),
    };

    let first_row = from.row.max(1);
    let first_col = from.column.max(1);

    for row in first_row..=last_row {
        for column in first_col..=last_col {
            let pos = Position::new(row, column);
            let Some(candy) = grid.candy(pos) else {
                continue;
            };
            if continues_run(grid, pos, axis, candy) {
                continue;
            }

            let length = run_length(grid, pos, axis, candy);
            if length >= MIN_RUN_LENGTH {
                return Some(Run::new(pos, axis, length));
            }
        }
    }

    None
}

/// Whether any run exists anywhere in the grid.
pub fn has_run(grid: &Grid) -> bool {
    find_column_run(grid, Position::ORIGIN).is_some()
        || find_row_run(grid, Position::ORIGIN).is_some()
}

/// Number of consecutive cells equal to `candy` starting at `pos` along `axis`.
fn run_length(grid: &Grid, pos: Position, axis: Axis, candy: Candy) -> u8 {
    let mut length = 1u8;
    while grid.candy(axis.step(pos, length)) == Some(candy) {
        length += 1;
    }
    length
}

/// Whether the cell before `pos` on `axis` holds the same candy.
fn continues_run(grid: &Grid, pos: Position, axis: Axis, candy: Candy) -> bool {
    let prev = match axis {
        Axis::Column => pos.row.checked_sub(1).map(|r| Position::new(r, pos.column)),
        Axis::Row => pos.column.checked_sub(1).map(|c| Position::new(pos.row, c)),
    };
    prev.and_then(|p| grid.candy(p)) == Some(candy)
}
