//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the grid resolution engine and the game rules.
//! It has **zero dependencies** on terminal, files, or input parsing, making it:
//!
//! - **Deterministic**: Same seed (or scripted source) produces identical games
//! - **Testable**: Every rule is exercised by unit tests next to its code
//! - **Portable**: Can run in any environment (terminal, headless, benchmarks)
//! - **Allocation-free**: Fixed-capacity grid storage and run lists
//!
//! # Module Structure
//!
//! - [`grid`]: bounded playing field, fill and run removal
//! - [`alphabet`]: the candy symbols a session draws from
//! - [`detect`]: first-match-wins run detection along rows and columns
//! - [`gravity`]: drops candies into empty cells below them
//! - [`resolve`]: generation passes, full cascade resolution and bootstrap
//! - [`moves`]: move validation and the neighbor swap
//! - [`scoring`]: turn score and multiplier accumulation
//! - [`session`]: one game, from bootstrap to the last move
//! - [`rng`]: injectable random sources
//!
//! # Game Rules
//!
//! - **Runs**: 3+ identical candies in a row or column
//! - **Cascade**: detect, remove, drop, refill; repeat until a pass finds nothing
//! - **Scoring**: 10 points per removed cell; the turn score is multiplied by the
//!   number of runs removed during the move
//! - **Moves**: a fixed budget; the game ends when it reaches zero
//!
//! # Example
//!
//! ```
//! use tui_crush_core::{MoveRequest, Session, SimpleRng};
//! use tui_crush_types::GameConfig;
//!
//! let mut session = Session::new(GameConfig::default(), SimpleRng::new(12345)).unwrap();
//! assert!(session.grid().is_dense());
//!
//! // An out-of-range move is rejected without consuming a turn.
//! assert!(session.play(MoveRequest::new(0, 0, 'W')).is_err());
//! assert_eq!(session.moves_left(), 20);
//! ```

pub mod alphabet;
pub mod detect;
pub mod error;
pub mod gravity;
pub mod grid;
pub mod moves;
pub mod resolve;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use tui_crush_types as types;

// Re-export commonly used types for convenience
pub use alphabet::CandyAlphabet;
pub use detect::{find_column_run, find_row_run, has_run};
pub use error::{EngineError, MoveError};
pub use gravity::apply_gravity;
pub use grid::Grid;
pub use moves::{apply_move, validate_move, Move, MovePhase, MoveRequest};
pub use resolve::{bootstrap, resolve_fully, resolve_one_pass, PassRuns, Resolution};
pub use rng::{RandomSource, ScriptedSource, SimpleRng};
pub use scoring::TurnState;
pub use session::{Session, TurnReport};
pub use snapshot::SessionSnapshot;
