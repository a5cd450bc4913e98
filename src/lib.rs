//! NumberCrush (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so the binary, the
//! integration tests and the benchmarks share one import path:
//! `tui_crush::{core, input, settings, term, types}`.

pub mod app;

pub use tui_crush_core as core;
pub use tui_crush_input as input;
pub use tui_crush_settings as settings;
pub use tui_crush_term as term;
pub use tui_crush_types as types;
