//! Gravity - drops candies into the empty cells below them

use crate::grid::Grid;
use crate::types::Position;

/// Let every column settle: candies contiguous at the bottom, empties on top.
///
/// Each column is scanned from the bottom row upward; an empty cell is swapped
/// with the nearest candy above it. Returns whether anything moved, which makes
/// the operation's idempotence directly observable.
pub fn apply_gravity(grid: &mut Grid) -> bool {
    let mut moved = false;

    for column in 1..=grid.width() {
        for row in (1..=grid.height()).rev() {
            let pos = Position::new(row, column);
            if grid.candy(pos).is_some() {
                continue;
            }

            let above = (1..row)
                .rev()
                .map(|r| Position::new(r, column))
                .find(|&p| grid.candy(p).is_some());

            match above {
                Some(src) => {
                    grid.swap(src, pos);
                    moved = true;
                }
                // Nothing left above this cell in the column.
                None => break,
            }
        }
    }

    moved
}
