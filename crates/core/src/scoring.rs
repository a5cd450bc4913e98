//! Scoring module - turn score and multiplier accumulation
//!
//! Rules:
//! - Every cell of a removed run is worth `POINTS_PER_CELL` (10).
//! - `turn_score` sums the cell points of every run over every cascade pass.
//! - `multiplier` counts the runs (column runs + row runs) over every pass.
//! - At the end of the move the total grows by `turn_score * multiplier`.
//! - A pass that removes nothing contributes nothing (and ends the cascade).

use crate::types::{Run, POINTS_PER_CELL};

/// Points for removing a run of `length` cells.
pub fn run_score(length: u8) -> u32 {
    (length as u32).saturating_mul(POINTS_PER_CELL)
}

/// Points for a set of runs removed in one pass.
pub fn runs_score<'a>(runs: impl IntoIterator<Item = &'a Run>) -> u32 {
    runs.into_iter()
        .fold(0u32, |acc, run| acc.saturating_add(run_score(run.length)))
}

/// Score accumulated by the move in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnState {
    pub turn_score: u32,
    pub multiplier: u32,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new move.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add one cascade pass: its cell points and its run count.
    pub fn add_pass(&mut self, points: u32, runs: u32) {
        self.turn_score = self.turn_score.saturating_add(points);
        self.multiplier = self.multiplier.saturating_add(runs);
    }

    /// Amount this move adds to the total score.
    pub fn total_gain(&self) -> u32 {
        self.turn_score.saturating_mul(self.multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Axis, Position};

    #[test]
    fn test_run_score_is_length_times_points() {
        assert_eq!(run_score(3), 30);
        assert_eq!(run_score(4), 40);
        assert_eq!(run_score(7), 70);
    }

    #[test]
    fn test_runs_score_sums_every_run() {
        let runs = [
            Run::new(Position::new(1, 1), Axis::Column, 3),
            Run::new(Position::new(4, 2), Axis::Row, 5),
        ];
        assert_eq!(runs_score(&runs), 80);

        let none: [Run; 0] = [];
        assert_eq!(runs_score(&none), 0);
    }

    #[test]
    fn test_two_pass_cascade() {
        let mut turn = TurnState::new();
        turn.add_pass(30, 1);
        turn.add_pass(40, 1);
        assert_eq!(turn.turn_score, 70);
        assert_eq!(turn.multiplier, 2);
        assert_eq!(turn.total_gain(), 140);
    }

    #[test]
    fn test_no_runs_means_no_gain() {
        let mut turn = TurnState::new();
        turn.add_pass(0, 0);
        assert_eq!(turn.total_gain(), 0);

        turn.add_pass(30, 1);
        turn.reset();
        assert_eq!(turn, TurnState::default());
    }

    #[test]
    fn test_saturates_instead_of_overflowing() {
        let mut turn = TurnState::new();
        turn.add_pass(u32::MAX, 2);
        turn.add_pass(10, 1);
        assert_eq!(turn.turn_score, u32::MAX);
        assert_eq!(turn.total_gain(), u32::MAX);
    }
}
