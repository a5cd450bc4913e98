use crate::grid::Grid;

/// Everything the display needs, copied out of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub grid: Grid,
    pub total_score: u32,
    /// Turn score of the last move played.
    pub turn_score: u32,
    /// Multiplier of the last move played.
    pub multiplier: u32,
    pub moves_left: u32,
    pub max_moves: u32,
    pub candy_count: u8,
    pub game_over: bool,
}

impl SessionSnapshot {
    /// Moves already played.
    pub fn moves_played(&self) -> u32 {
        self.max_moves.saturating_sub(self.moves_left)
    }
}
