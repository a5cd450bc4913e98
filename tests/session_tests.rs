//! Session tests - whole games driven through parsed move lines

use tui_crush::core::{has_run, MoveError, Session, SimpleRng};
use tui_crush::input::parse_move_line;
use tui_crush::types::GameConfig;

/// Every legal move line for a grid, rightward and downward swaps only.
fn all_moves(config: &GameConfig) -> Vec<String> {
    let mut lines = Vec::new();
    for row in 1..=config.height {
        for column in 1..=config.width {
            if column < config.width {
                lines.push(format!("{} {} d", row, column));
            }
            if row < config.height {
                lines.push(format!("{} {} s", row, column));
            }
        }
    }
    lines
}

/// Play until the moves run out. Returns the accepted lines.
fn play_out(session: &mut Session) -> Vec<String> {
    let mut accepted = Vec::new();
    let candidates = all_moves(session.config());
    let mut i = 0;
    while !session.is_over() {
        let line = &candidates[i % candidates.len()];
        i += 1;
        match session.play(parse_move_line(line)) {
            Ok(report) => {
                assert!(session.grid().is_dense());
                assert!(!has_run(session.grid()));
                assert_eq!(report.total_score, session.total_score());
                accepted.push(line.clone());
            }
            Err(MoveError::NoChange) => {}
            Err(err) => panic!("unexpected error for {:?}: {}", line, err),
        }
    }
    accepted
}

#[test]
fn test_full_game_consumes_every_move() {
    let config = GameConfig {
        max_moves: 25,
        ..GameConfig::default()
    };
    let mut session = Session::new(config, SimpleRng::new(77)).unwrap();
    let accepted = play_out(&mut session);

    assert_eq!(accepted.len(), 25);
    assert_eq!(session.moves_left(), 0);
    let snap = session.snapshot();
    assert!(snap.game_over);
    assert_eq!(snap.moves_played(), 25);
    assert_eq!(
        session.play(parse_move_line("1 1 d")),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_same_seed_replays_the_same_game() {
    let config = GameConfig {
        width: 8,
        height: 9,
        candy_count: 4,
        max_moves: 30,
    };
    let mut a = Session::new(config, SimpleRng::new(9001)).unwrap();
    let mut b = Session::new(config, SimpleRng::new(9001)).unwrap();
    assert_eq!(a.grid(), b.grid());

    let lines_a = play_out(&mut a);
    let lines_b = play_out(&mut b);
    assert_eq!(lines_a, lines_b);
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.total_score(), b.total_score());
}

#[test]
fn test_total_is_sum_of_turn_gains() {
    let config = GameConfig {
        candy_count: 3,
        max_moves: 40,
        ..GameConfig::default()
    };
    let mut session = Session::new(config, SimpleRng::new(5)).unwrap();
    let mut sum = 0;
    for line in all_moves(&config).iter().cycle() {
        if session.is_over() {
            break;
        }
        if let Ok(report) = session.play(parse_move_line(line)) {
            assert_eq!(
                report.gained,
                report.resolution.turn.turn_score * report.resolution.turn.multiplier
            );
            assert_eq!(session.last_turn(), report.resolution.turn);
            sum += report.gained;
        }
    }
    assert_eq!(session.total_score(), sum);
}

#[test]
fn test_malformed_lines_are_rejected_without_cost() {
    let mut session = Session::new(GameConfig::default(), SimpleRng::new(1)).unwrap();
    let before = *session.grid();

    for line in ["", "hello", "1 1", "1 1 q", "0 0 w", "11 1 s", "1 10 d", "1 1 w", "1 1 a"] {
        let err = session.play(parse_move_line(line)).unwrap_err();
        assert!(err.is_recoverable(), "{:?}", line);
        assert!(
            matches!(
                err,
                MoveError::InvalidDirection(_) | MoveError::InvalidPosition { .. }
            ),
            "{:?} gave {:?}",
            line,
            err
        );
    }

    assert_eq!(*session.grid(), before);
    assert_eq!(session.moves_left(), 20);
    assert_eq!(session.total_score(), 0);
}
