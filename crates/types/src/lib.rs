//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, settings, input parsing).
//!
//! # Grid Dimensions
//!
//! The playing field is a `height x width` interior addressed by 1-based
//! `(row, column)` pairs. Row 1 is the top row, column 1 the leftmost column.
//!
//! | Setting | Range | Default |
//! |---------|-------|---------|
//! | Width | 5..=15 | 10 |
//! | Height | 5..=20 | 10 |
//! | Candies | 3..=7 | 5 |
//! | Moves | 1..=999 | 20 |
//!
//! # Scoring Constants
//!
//! - `POINTS_PER_CELL`: 10 points for every cell of a cleared run
//! - `MIN_RUN_LENGTH`: 3 identical symbols make a run
//!
//! # Examples
//!
//! ```
//! use tui_crush_types::{Candy, Direction, Position, GameConfig};
//!
//! let candy = Candy::new(3).unwrap();
//! assert_eq!(candy.symbol(), '3');
//!
//! let dir = Direction::from_letter('w').unwrap();
//! assert_eq!(dir, Direction::Up);
//! assert_eq!(dir.offset(Position::new(2, 2)), Some(Position::new(1, 2)));
//!
//! let config = GameConfig::default();
//! assert!(config.is_valid());
//! ```

/// Largest supported interior width.
pub const MAX_WIDTH: u8 = 15;

/// Largest supported interior height.
pub const MAX_HEIGHT: u8 = 20;

/// Capacity of the flat cell storage.
pub const MAX_CELLS: usize = (MAX_WIDTH as usize) * (MAX_HEIGHT as usize);

/// Upper bound on runs of one axis found in a single pass.
///
/// Runs on one axis are disjoint and at least `MIN_RUN_LENGTH` long.
pub const MAX_RUNS_PER_AXIS: usize = MAX_CELLS / MIN_RUN_LENGTH as usize;

/// Shortest sequence of identical symbols that counts as a run.
pub const MIN_RUN_LENGTH: u8 = 3;

/// Points awarded for each cell of a removed run.
pub const POINTS_PER_CELL: u32 = 10;

/// Number of distinct candy symbols available ('1'..='7').
pub const MAX_CANDIES: u8 = 7;

pub const MIN_GRID_WIDTH: u8 = 5;
pub const MIN_GRID_HEIGHT: u8 = 5;
pub const MIN_CANDIES: u8 = 3;
pub const MIN_MOVES: u32 = 1;
pub const MAX_MOVES: u32 = 999;

pub const DEFAULT_WIDTH: u8 = 10;
pub const DEFAULT_HEIGHT: u8 = 10;
pub const DEFAULT_CANDIES: u8 = 5;
pub const DEFAULT_MAX_MOVES: u32 = 20;

/// A candy symbol, one of the digits '1'..='7'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Candy(u8);

impl Candy {
    /// Create a candy from its digit value (1..=7).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_crush_types::Candy;
    ///
    /// assert!(Candy::new(1).is_some());
    /// assert!(Candy::new(7).is_some());
    /// assert!(Candy::new(0).is_none());
    /// assert!(Candy::new(8).is_none());
    /// ```
    pub fn new(digit: u8) -> Option<Self> {
        if (1..=MAX_CANDIES).contains(&digit) {
            Some(Self(digit))
        } else {
            None
        }
    }

    /// Parse a candy from its display character.
    pub fn from_symbol(ch: char) -> Option<Self> {
        ch.to_digit(10).and_then(|d| Self::new(d as u8))
    }

    /// Digit value (1..=7).
    pub fn digit(&self) -> u8 {
        self.0
    }

    /// Display character ('1'..='7').
    pub fn symbol(&self) -> char {
        (b'0' + self.0) as char
    }
}

/// A cell of the grid
///
/// - `None`: Empty cell (cleared, waiting for gravity and refill)
/// - `Some(Candy)`: Cell holding a candy
pub type Cell = Option<Candy>;

/// A 1-based `(row, column)` address inside the grid interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub row: u8,
    pub column: u8,
}

impl Position {
    pub const fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Scan cursor starting point (before the first interior cell).
    pub const ORIGIN: Position = Position { row: 0, column: 0 };
}

/// Axis a run extends along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Run extends downward from its anchor.
    Column,
    /// Run extends rightward from its anchor.
    Row,
}

impl Axis {
    /// Position `n` steps from `anchor` along this axis.
    pub fn step(&self, anchor: Position, n: u8) -> Position {
        match self {
            Axis::Column => Position::new(anchor.row + n, anchor.column),
            Axis::Row => Position::new(anchor.row, anchor.column + n),
        }
    }
}

/// A maximal sequence of at least three identical candies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub anchor: Position,
    pub axis: Axis,
    pub length: u8,
}

impl Run {
    pub fn new(anchor: Position, axis: Axis, length: u8) -> Self {
        Self {
            anchor,
            axis,
            length,
        }
    }

    /// Iterate over every position covered by this run.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.length).map(move |n| self.axis.step(self.anchor, n))
    }
}

/// Swap direction for a move
///
/// The vocabulary is a fixed interface contract (case-insensitive):
///
/// | Letter | Word | Direction |
/// |--------|------|-----------|
/// | `W` | `up` | Up |
/// | `A` | `left` | Left |
/// | `S` | `down` | Down |
/// | `D` | `right` | Right |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parse a direction from its letter
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_crush_types::Direction;
    ///
    /// assert_eq!(Direction::from_letter('W'), Some(Direction::Up));
    /// assert_eq!(Direction::from_letter('a'), Some(Direction::Left));
    /// assert_eq!(Direction::from_letter('x'), None);
    /// ```
    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'W' => Some(Direction::Up),
            'A' => Some(Direction::Left),
            'S' => Some(Direction::Down),
            'D' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Parse a direction from a letter or a full word (case-insensitive).
    pub fn from_word(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "w" | "up" => Some(Direction::Up),
            "a" | "left" => Some(Direction::Left),
            "s" | "down" => Some(Direction::Down),
            "d" | "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Canonical upper-case letter.
    pub fn letter(&self) -> char {
        match self {
            Direction::Up => 'W',
            Direction::Left => 'A',
            Direction::Down => 'S',
            Direction::Right => 'D',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Neighbor of `pos` in this direction, or `None` when it would leave row/column 1.
    ///
    /// Upper bounds are checked by the grid, which knows its dimensions.
    pub fn offset(&self, pos: Position) -> Option<Position> {
        match self {
            Direction::Up => pos.row.checked_sub(1).map(|r| Position::new(r, pos.column)),
            Direction::Down => pos.row.checked_add(1).map(|r| Position::new(r, pos.column)),
            Direction::Left => pos
                .column
                .checked_sub(1)
                .map(|c| Position::new(pos.row, c)),
            Direction::Right => pos
                .column
                .checked_add(1)
                .map(|c| Position::new(pos.row, c)),
        }
        .filter(|p| p.row >= 1 && p.column >= 1)
    }
}

/// Session configuration read once at game start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    pub candy_count: u8,
    pub max_moves: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            candy_count: DEFAULT_CANDIES,
            max_moves: DEFAULT_MAX_MOVES,
        }
    }
}

impl GameConfig {
    /// Check every field against its legal range.
    pub fn is_valid(&self) -> bool {
        (MIN_GRID_WIDTH..=MAX_WIDTH).contains(&self.width)
            && (MIN_GRID_HEIGHT..=MAX_HEIGHT).contains(&self.height)
            && (MIN_CANDIES..=MAX_CANDIES).contains(&self.candy_count)
            && (MIN_MOVES..=MAX_MOVES).contains(&self.max_moves)
    }
}
