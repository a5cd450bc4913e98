use crate::types::GameConfig;

/// Errors that indicate the engine was driven outside its invariants.
///
/// These are not player mistakes: a session that hits one should be ended.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("grid dimensions {width}x{height} outside 1..={max_width}x1..={max_height}")]
    InvalidDimensions {
        width: u8,
        height: u8,
        max_width: u8,
        max_height: u8,
    },

    #[error("candy count {0} outside 1..=7")]
    InvalidCandyCount(u8),

    #[error("grid contains an empty cell between moves")]
    GridNotDense,

    #[error("candy '{symbol}' at ({row}, {column}) is not in the alphabet")]
    ForeignCandy { row: u8, column: u8, symbol: char },

    #[error("grid did not settle after {0} passes")]
    CascadeLimit(u32),

    #[error("invalid game configuration: {0:?}")]
    InvalidConfig(GameConfig),
}

/// Reasons a move request is rejected.
///
/// Every variant except `Engine` is recoverable: the grid is untouched and
/// the player is prompted again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid direction {0:?} (use W, A, S or D)")]
    InvalidDirection(char),

    #[error("invalid position ({row}, {column})")]
    InvalidPosition { row: u32, column: u32 },

    #[error("swap does not change the grid")]
    NoChange,

    #[error("no moves left")]
    GameOver,

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

impl MoveError {
    /// Whether the player can simply try again.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, MoveError::Engine(_))
    }
}
