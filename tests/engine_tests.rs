//! Engine tests - resolution properties through the public facade

use tui_crush::core::{
    apply_gravity, apply_move, bootstrap, find_row_run, has_run, resolve_fully, resolve_one_pass,
    CandyAlphabet, Grid, MoveError, MoveRequest, RandomSource, Resolution, ScriptedSource,
    SimpleRng,
};
use tui_crush::types::{Axis, Position, Run, POINTS_PER_CELL};

fn grid(rows: &[&str]) -> Grid {
    Grid::from_rows(rows).unwrap()
}

#[test]
fn test_row_run_found_from_origin_then_removed_and_dropped() {
    let mut g = grid(&["123", "555", "312"]);

    let run = find_row_run(&g, Position::new(1, 1)).unwrap();
    assert_eq!(run, Run::new(Position::new(2, 1), Axis::Row, 3));

    resolve_one_pass(&mut g);
    assert_eq!(g.row(2).unwrap(), &[None, None, None]);

    apply_gravity(&mut g);
    assert_eq!(g.to_string(), "...\n123\n312");
}

#[test]
fn test_run_scores_ten_points_per_cell() {
    for length in 3..=7u8 {
        let row: String = std::iter::repeat('4').take(length as usize).collect();
        let mut g = grid(&[row.as_str()]);
        let pass = resolve_one_pass(&mut g);
        assert_eq!(pass.run_count(), 1);
        assert_eq!(pass.score(), length as u32 * POINTS_PER_CELL);
    }
}

#[test]
fn test_invalid_direction_leaves_grid_unchanged() {
    let mut g = grid(&["123", "456", "712"]);
    let before = g;
    assert_eq!(
        apply_move(&mut g, MoveRequest::new(2, 2, 'x')),
        Err(MoveError::InvalidDirection('x'))
    );
    assert_eq!(g, before);

    assert_eq!(
        apply_move(&mut g, MoveRequest::new(1, 3, 'D')),
        Err(MoveError::InvalidPosition { row: 1, column: 3 })
    );
    assert_eq!(g, before);
}

#[test]
fn test_move_without_run_scores_nothing() {
    let mut g = grid(&["1212", "3434", "1212"]);
    apply_move(&mut g, MoveRequest::new(1, 1, 'd')).unwrap();

    let alphabet = CandyAlphabet::new(4).unwrap();
    let res = resolve_fully(&mut g, &alphabet, &mut SimpleRng::new(3)).unwrap();
    assert_eq!(res, Resolution::default());
    assert_eq!(res.turn.multiplier, 0);
    assert_eq!(res.turn.turn_score, 0);
}

#[test]
fn test_two_pass_cascade_after_a_move() {
    // Swapping (1,1) down lines up column 1 as 5,5,5; the scripted refill drops
    // three 1s onto the 1 now at the bottom of that column.
    let mut g = grid(&["5234", "1342", "5423", "5234"]);
    apply_move(&mut g, MoveRequest::new(1, 1, 'S')).unwrap();
    assert_eq!(g.to_string(), "1234\n5342\n5423\n5234");

    let alphabet = CandyAlphabet::new(5).unwrap();
    let mut rng = ScriptedSource::new(vec![0, 0, 0, 1, 2, 1, 2]);
    let res = resolve_fully(&mut g, &alphabet, &mut rng).unwrap();

    assert_eq!(res.cascades, 2);
    assert_eq!(res.turn.turn_score, 30 + 40);
    assert_eq!(res.turn.multiplier, 2);
    assert_eq!(res.turn.total_gain(), 140);
}

#[test]
fn test_bootstrap_over_legal_sizes() {
    for (width, height, candies) in [(5, 5, 3), (15, 20, 7), (10, 10, 5), (7, 13, 4), (15, 5, 3)] {
        let alphabet = CandyAlphabet::new(candies).unwrap();
        let mut g = Grid::new(width, height).unwrap();
        let mut rng = SimpleRng::new(width as u32 * 100 + height as u32);
        bootstrap(&mut g, &alphabet, &mut rng).unwrap();

        assert!(g.is_dense(), "{}x{}", width, height);
        assert!(!has_run(&g), "{}x{}", width, height);
        assert!(g
            .cells()
            .iter()
            .all(|c| c.map(|c| alphabet.contains(c)).unwrap_or(false)));
    }
}

#[test]
fn test_gravity_is_idempotent_on_random_holes() {
    let alphabet = CandyAlphabet::new(5).unwrap();
    let mut rng = SimpleRng::new(2024);

    for _ in 0..50 {
        let mut g = Grid::new(9, 11).unwrap();
        g.fill(&alphabet, &mut rng);
        for row in 1..=11 {
            for column in 1..=9 {
                if rng.next_range(3) == 0 {
                    g.set(Position::new(row, column), None);
                }
            }
        }
        let holes = g.empty_count();

        apply_gravity(&mut g);
        let once = g;
        assert!(!apply_gravity(&mut g));
        assert_eq!(g, once);
        assert_eq!(g.empty_count(), holes);

        // Empties sit on top of every column.
        for column in 1..=9 {
            let mut seen_candy = false;
            for row in 1..=11 {
                let filled = g.candy(Position::new(row, column)).is_some();
                assert!(!(seen_candy && !filled), "hole under a candy in column {}", column);
                seen_candy |= filled;
            }
        }
    }
}

#[test]
fn test_resolve_fully_leaves_no_run() {
    let alphabet = CandyAlphabet::new(4).unwrap();
    for seed in 100..130 {
        let mut rng = SimpleRng::new(seed);
        let mut g = Grid::new(10, 10).unwrap();
        g.fill(&alphabet, &mut rng);

        let res = resolve_fully(&mut g, &alphabet, &mut rng).unwrap();
        assert!(g.is_dense());
        let mut check = g;
        assert!(resolve_one_pass(&mut check).is_empty(), "seed {}", seed);
        assert_eq!(res.turn.total_gain(), res.turn.turn_score * res.turn.multiplier);
    }
}
