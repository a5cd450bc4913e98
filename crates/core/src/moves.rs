//! Move applicator - validates and applies one swap between neighbors
//!
//! A move goes through `AwaitingInput -> Validating -> (Applied | Rejected)`.
//! Validation always precedes mutation: a rejected move leaves the grid
//! bit-for-bit unchanged.

use crate::error::{EngineError, MoveError};
use crate::grid::Grid;
use crate::types::{Direction, Position};

/// A raw move request as typed by the player.
///
/// Fields are unvalidated. Malformed input is represented by zeros and `'\0'`,
/// which fail validation like any other bad value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveRequest {
    pub row: u32,
    pub column: u32,
    pub direction: char,
}

impl MoveRequest {
    pub fn new(row: u32, column: u32, direction: char) -> Self {
        Self {
            row,
            column,
            direction,
        }
    }
}

/// A validated swap between `from` and its neighbor `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub direction: Direction,
}

/// Where a move request is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MovePhase {
    #[default]
    AwaitingInput,
    Validating(MoveRequest),
    Applied(Move),
    Rejected(MoveError),
}

impl MovePhase {
    /// Advance one step. Only `Validating` moves; the other phases are returned as-is.
    pub fn advance(self, grid: &mut Grid) -> MovePhase {
        match self {
            MovePhase::Validating(request) => match apply_move(grid, request) {
                Ok(mv) => MovePhase::Applied(mv),
                Err(err) => MovePhase::Rejected(err),
            },
            other => other,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, MovePhase::Applied(_) | MovePhase::Rejected(_))
    }

    /// Advance until terminal and return the outcome.
    ///
    /// A phase still awaiting input is validated as an empty request, so it
    /// ends up rejected.
    pub fn complete(self, grid: &mut Grid) -> Result<Move, MoveError> {
        match self {
            MovePhase::AwaitingInput => {
                MovePhase::Validating(MoveRequest::default()).complete(grid)
            }
            MovePhase::Validating(_) => self.advance(grid).complete(grid),
            MovePhase::Applied(mv) => Ok(mv),
            MovePhase::Rejected(err) => Err(err),
        }
    }
}

/// Check a request against the grid without touching it.
///
/// - The direction must be one of the four letters, else `InvalidDirection`.
/// - The cell and its neighbor in that direction must both be inside the
///   grid, else `InvalidPosition`.
pub fn validate_move(grid: &Grid, request: MoveRequest) -> Result<Move, MoveError> {
    let direction = Direction::from_letter(request.direction)
        .ok_or(MoveError::InvalidDirection(request.direction))?;

    let invalid = MoveError::InvalidPosition {
        row: request.row,
        column: request.column,
    };

    let from = match (u8::try_from(request.row), u8::try_from(request.column)) {
        (Ok(row), Ok(column)) => Position::new(row, column),
        _ => return Err(invalid),
    };
    if !grid.contains(from) {
        return Err(invalid);
    }

    let to = direction
        .offset(from)
        .filter(|&p| grid.contains(p))
        .ok_or(invalid)?;

    Ok(Move {
        from,
        to,
        direction,
    })
}

/// Validate a request and swap the two cells.
///
/// The grid must be dense between moves; a grid with an empty cell is an
/// engine fault reported as `GridNotDense`, and nothing is swapped.
pub fn apply_move(grid: &mut Grid, request: MoveRequest) -> Result<Move, MoveError> {
    let mv = validate_move(grid, request)?;

    if !grid.is_dense() {
        return Err(EngineError::GridNotDense.into());
    }

    grid.swap(mv.from, mv.to);
    Ok(mv)
}
