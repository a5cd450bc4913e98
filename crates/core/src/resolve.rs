//! Resolver (cascade engine) - detect, remove, drop, refill until stable
//!
//! One *generation pass* collects every column run and every row run the
//! detector reports, then removes them all. Collection finishes before any
//! removal, so a candy shared by a row run and a column run is cleared once.
//!
//! Full resolution repeats `pass -> gravity -> refill` and stops after the first
//! pass that finds no run. Each pass that finds runs is one cascade and feeds
//! the [`TurnState`].
//!
//! The board bootstrap uses the same pass with the loop shape turned around:
//! `fill -> pass -> gravity` while the grid still has empty cells, and no score.

use arrayvec::ArrayVec;
use tracing::{debug, trace, warn};

use crate::alphabet::CandyAlphabet;
use crate::detect::find_run;
use crate::error::EngineError;
use crate::gravity::apply_gravity;
use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::scoring::{runs_score, TurnState};
use crate::types::{Axis, Position, Run, MAX_RUNS_PER_AXIS};

/// Safety bound on passes per resolution.
///
/// Only a degenerate random source (e.g. one that always draws the same candy)
/// can reach it.
pub const MAX_PASSES: u32 = 10_000;

/// Runs of one axis found in one pass, in discovery order.
pub type RunList = ArrayVec<Run, MAX_RUNS_PER_AXIS>;

/// Everything one generation pass removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassRuns {
    pub column_runs: RunList,
    pub row_runs: RunList,
}

impl PassRuns {
    pub fn is_empty(&self) -> bool {
        self.column_runs.is_empty() && self.row_runs.is_empty()
    }

    /// Column runs plus row runs.
    pub fn run_count(&self) -> u32 {
        (self.column_runs.len() + self.row_runs.len()) as u32
    }

    /// Cell points of every run in the pass.
    pub fn score(&self) -> u32 {
        runs_score(self.runs())
    }

    /// Column runs first, then row runs.
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.column_runs.iter().chain(self.row_runs.iter())
    }
}

/// Outcome of resolving a grid after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolution {
    pub turn: TurnState,
    /// Passes that removed at least one run.
    pub cascades: u32,
}

/// Collect every run along `axis` with an advancing cursor.
///
/// After each find the cursor moves to the run's anchor row, one column right
/// of its anchor. The cursor column only grows, so a pass collects at most one
/// run per starting column.
pub fn collect_runs(grid: &Grid, axis: Axis) -> RunList {
    let mut runs = RunList::new();
    let mut cursor = Position::ORIGIN;

    while let Some(run) = find_run(grid, cursor, axis) {
        if runs.try_push(run).is_err() {
            break;
        }
        cursor = Position::new(run.anchor.row, run.anchor.column + 1);
    }

    runs
}

/// Detect and remove one generation of runs.
pub fn resolve_one_pass(grid: &mut Grid) -> PassRuns {
    let pass = PassRuns {
        column_runs: collect_runs(grid, Axis::Column),
        row_runs: collect_runs(grid, Axis::Row),
    };

    for run in pass.runs() {
        grid.clear_run(run);
    }

    if !pass.is_empty() {
        trace!(
            columns = pass.column_runs.len(),
            rows = pass.row_runs.len(),
            "removed runs"
        );
    }
    pass
}

/// Resolve cascades until a pass finds nothing, accumulating the turn score.
pub fn resolve_fully(
    grid: &mut Grid,
    alphabet: &CandyAlphabet,
    rng: &mut impl RandomSource,
) -> Result<Resolution, EngineError> {
    let mut resolution = Resolution::default();

    loop {
        let pass = resolve_one_pass(grid);
        apply_gravity(grid);
        grid.fill(alphabet, rng);

        if pass.is_empty() {
            break;
        }

        resolution.cascades += 1;
        resolution.turn.add_pass(pass.score(), pass.run_count());
        debug!(
            cascade = resolution.cascades,
            points = pass.score(),
            runs = pass.run_count(),
            "cascade pass"
        );

        if resolution.cascades >= MAX_PASSES {
            warn!(passes = MAX_PASSES, "cascade did not settle");
            return Err(EngineError::CascadeLimit(MAX_PASSES));
        }
    }

    Ok(resolution)
}

/// Fill an empty grid into a dense grid with no runs.
///
/// Loops `fill -> pass -> gravity` while any cell is empty. Returns the number
/// of rounds it took.
pub fn bootstrap(
    grid: &mut Grid,
    alphabet: &CandyAlphabet,
    rng: &mut impl RandomSource,
) -> Result<u32, EngineError> {
    let mut rounds = 0u32;

    while grid.has_empty() {
        if rounds >= MAX_PASSES {
            warn!(rounds, "bootstrap did not settle");
            return Err(EngineError::CascadeLimit(MAX_PASSES));
        }
        grid.fill(alphabet, rng);
        resolve_one_pass(grid);
        apply_gravity(grid);
        rounds += 1;
    }

    debug!(rounds, "grid bootstrapped");
    Ok(rounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::has_run;
    use crate::rng::{ScriptedSource, SimpleRng};

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_row_run_removal_then_gravity() {
        let mut g = grid(&["123", "444", "231"]);
        let pass = resolve_one_pass(&mut g);

        assert!(pass.column_runs.is_empty());
        assert_eq!(
            pass.row_runs.as_slice(),
            &[Run::new(Position::new(2, 1), Axis::Row, 3)]
        );
        assert_eq!(g.to_string(), "123\n...\n231");

        apply_gravity(&mut g);
        assert_eq!(g.to_string(), "...\n123\n231");
    }

    #[test]
    fn test_crossing_runs_are_cleared_once() {
        // Plus shape: column run and row run share the center cell.
        let mut g = grid(&["212", "111", "313"]);
        let pass = resolve_one_pass(&mut g);
        assert_eq!(pass.column_runs.len(), 1);
        assert_eq!(pass.row_runs.len(), 1);
        assert_eq!(pass.score(), 60);
        assert_eq!(g.to_string(), "2.2\n...\n3.3");
    }

    #[test]
    fn test_pass_collects_runs_in_discovery_order() {
        let mut g = grid(&["1234", "1234", "1234", "4321"]);
        let pass = resolve_one_pass(&mut g);
        let anchors: Vec<_> = pass.column_runs.iter().map(|r| r.anchor).collect();
        assert_eq!(
            anchors,
            vec![
                Position::new(1, 1),
                Position::new(1, 2),
                Position::new(1, 3),
                Position::new(1, 4)
            ]
        );
        assert!(pass.row_runs.is_empty());
        assert_eq!(g.to_string(), "....\n....\n....\n4321");
    }

    #[test]
    fn test_two_pass_cascade_scores_70_times_2() {
        let mut g = grid(&["1234", "5342", "5423", "5234"]);
        let alphabet = CandyAlphabet::new(5).unwrap();
        // Refill column 1 with three '1's (forming a run of 4), then a harmless mix.
        let mut rng = ScriptedSource::new(vec![0, 0, 0, 1, 2, 1, 2]);

        let res = resolve_fully(&mut g, &alphabet, &mut rng).unwrap();
        assert_eq!(res.cascades, 2);
        assert_eq!(res.turn.turn_score, 70);
        assert_eq!(res.turn.multiplier, 2);
        assert_eq!(res.turn.total_gain(), 140);
        assert_eq!(g.to_string(), "2234\n3342\n2423\n3234");
        assert_eq!(rng.draws(), 7);
    }

    #[test]
    fn test_stable_grid_resolves_to_nothing() {
        let mut g = grid(&["1212", "2121", "1212"]);
        let before = g;
        let alphabet = CandyAlphabet::new(3).unwrap();
        let res = resolve_fully(&mut g, &alphabet, &mut SimpleRng::new(1)).unwrap();
        assert_eq!(res, Resolution::default());
        assert_eq!(g, before);
    }

    #[test]
    fn test_resolve_fully_reaches_fixed_point() {
        let alphabet = CandyAlphabet::new(3).unwrap();
        for seed in 1..20 {
            let mut rng = SimpleRng::new(seed);
            let mut g = Grid::new(8, 8).unwrap();
            g.fill(&alphabet, &mut rng);

            resolve_fully(&mut g, &alphabet, &mut rng).unwrap();
            assert!(g.is_dense());
            let mut check = g;
            assert!(resolve_one_pass(&mut check).is_empty(), "seed {}", seed);
        }
    }

    #[test]
    fn test_bootstrap_produces_dense_run_free_grid() {
        for candies in 3..=7 {
            let alphabet = CandyAlphabet::new(candies).unwrap();
            let mut rng = SimpleRng::new(candies as u32 * 31);
            let mut g = Grid::new(10, 12).unwrap();
            let rounds = bootstrap(&mut g, &alphabet, &mut rng).unwrap();
            assert!(rounds >= 1);
            assert!(g.is_dense());
            assert!(!has_run(&g));
        }
    }

    #[test]
    fn test_degenerate_source_hits_cascade_limit() {
        let alphabet = CandyAlphabet::new(3).unwrap();
        let mut rng = ScriptedSource::new(vec![0]);
        let mut g = Grid::new(5, 5).unwrap();
        assert_eq!(
            bootstrap(&mut g, &alphabet, &mut rng),
            Err(EngineError::CascadeLimit(MAX_PASSES))
        );
    }
}
