//! Terminal input module.
//!
//! The game is line-oriented: the player types a move such as `3 4 d` and
//! presses Enter. This crate maps `crossterm` key events into line-editing
//! actions, keeps the line being typed, and parses submitted lines into move
//! requests and settings changes. It never touches the grid.

pub mod line;
pub mod map;
pub mod parse;

pub use tui_crush_types as types;

pub use line::{LineEditor, LineEvent, MAX_LINE_LEN};
pub use map::{handle_key_event, should_quit, LineAction};
pub use parse::{parse_menu_choice, parse_move_line, parse_settings_command, MenuChoice};
