//! Parsers for submitted lines.
//!
//! Move lines never fail to parse. A missing or malformed field becomes `0`
//! (row/column) or `'\0'` (direction) and is rejected later by move
//! validation, which reports what was wrong.

use tui_crush_core::MoveRequest;
use tui_crush_settings::{SettingKey, SettingsError};

use crate::types::Direction;

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    Rules,
    Settings,
    Quit,
}

/// Parse a menu line: `1`..`4` or the entry name.
pub fn parse_menu_choice(line: &str) -> Option<MenuChoice> {
    match line.trim().to_lowercase().as_str() {
        "1" | "play" | "p" => Some(MenuChoice::Play),
        "2" | "rules" | "r" => Some(MenuChoice::Rules),
        "3" | "settings" | "s" => Some(MenuChoice::Settings),
        "4" | "quit" | "q" => Some(MenuChoice::Quit),
        _ => None,
    }
}

/// Parse `<row> <column> <direction>`.
///
/// The direction is a single letter (kept as typed, validation decides) or
/// one of the words `up`, `down`, `left`, `right`.
///
/// ```
/// use tui_crush_input::parse_move_line;
///
/// let request = parse_move_line("3 7 left");
/// assert_eq!((request.row, request.column, request.direction), (3, 7, 'A'));
///
/// let bad = parse_move_line("x 2");
/// assert_eq!((bad.row, bad.column, bad.direction), (0, 2, '\0'));
/// ```
pub fn parse_move_line(line: &str) -> MoveRequest {
    let mut fields = line.split_whitespace();
    let row = number_field(fields.next());
    let column = number_field(fields.next());
    let direction = fields.next().map(direction_field).unwrap_or('\0');
    MoveRequest::new(row, column, direction)
}

fn number_field(field: Option<&str>) -> u32 {
    field.and_then(|f| f.parse().ok()).unwrap_or(0)
}

fn direction_field(field: &str) -> char {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => Direction::from_word(field)
            .map(|d| d.letter())
            .unwrap_or('\0'),
    }
}

/// Parse `<name> <value>` from the settings screen and check the range.
pub fn parse_settings_command(line: &str) -> Result<(SettingKey, u32), SettingsError> {
    let mut fields = line.split_whitespace();
    let key: SettingKey = fields.next().unwrap_or("").parse()?;
    let raw = fields.next().unwrap_or("");
    let value = raw.parse::<u32>().map_err(|_| SettingsError::InvalidValue {
        key: key.name(),
        value: raw.to_owned(),
    })?;
    Ok((key, key.validate(value)?))
}
