//! Key mapping from terminal events to line-editing actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press does to the line being typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    Insert(char),
    Backspace,
    Submit,
    Cancel,
}

/// Map keyboard input to a line action.
///
/// Releases are ignored, as are control chords other than the ones listed here.
pub fn handle_key_event(key: KeyEvent) -> Option<LineAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Enter => Some(LineAction::Submit),
        KeyCode::Backspace | KeyCode::Delete => Some(LineAction::Backspace),
        KeyCode::Esc => Some(LineAction::Cancel),

        // Arrow keys type the direction letter, so `2 3` + Right is a full move.
        KeyCode::Up => Some(LineAction::Insert('w')),
        KeyCode::Left => Some(LineAction::Insert('a')),
        KeyCode::Down => Some(LineAction::Insert('s')),
        KeyCode::Right => Some(LineAction::Insert('d')),

        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
        KeyCode::Char(c) if !c.is_control() => Some(LineAction::Insert(c)),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d'))
}
