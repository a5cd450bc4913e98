//! Terminal rendering module.
//!
//! Everything is drawn into a [`FrameBuffer`] first and then flushed by the
//! [`TerminalRenderer`], which only rewrites cells that changed since the last
//! frame. Views are pure functions of their input and can be unit-tested
//! without a terminal.
//!
//! - [`game_view`]: the board, the score panel and the prompt
//! - [`screens`]: full-screen text pages (menu, rules, settings, final score)

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screens;

pub use tui_crush_core as core;
pub use tui_crush_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{candy_color, AnchorY, GameView, PromptView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screens::TextScreen;
