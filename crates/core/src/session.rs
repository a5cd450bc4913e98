//! Session module - one game from bootstrap to the last move
//!
//! The session owns the grid, the alphabet and the random source, and is the
//! only place that mutates them. Each call to [`Session::play`] runs a full
//! turn: apply the swap, resolve every cascade, update the score, consume a move.

use tracing::{debug, info, instrument};

use crate::alphabet::CandyAlphabet;
use crate::error::{EngineError, MoveError};
use crate::grid::Grid;
use crate::moves::{Move, MovePhase, MoveRequest};
use crate::resolve::{bootstrap, resolve_fully, Resolution};
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::TurnState;
use crate::snapshot::SessionSnapshot;
use crate::types::GameConfig;

/// Result of one accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub mv: Move,
    pub resolution: Resolution,
    /// `turn_score * multiplier`, added to the total.
    pub gained: u32,
    pub total_score: u32,
    pub moves_left: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session<R = SimpleRng> {
    config: GameConfig,
    grid: Grid,
    alphabet: CandyAlphabet,
    rng: R,
    total_score: u32,
    last_turn: TurnState,
    moves_left: u32,
}

impl<R: RandomSource> Session<R> {
    /// Start a game: validate the config and bootstrap a dense, run-free grid.
    #[instrument(skip(rng))]
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, EngineError> {
        if !config.is_valid() {
            return Err(EngineError::InvalidConfig(config));
        }

        let alphabet = CandyAlphabet::new(config.candy_count)?;
        let mut grid = Grid::new(config.width, config.height)?;
        bootstrap(&mut grid, &alphabet, &mut rng)?;

        info!(
            width = config.width,
            height = config.height,
            candies = config.candy_count,
            moves = config.max_moves,
            "session started"
        );

        Ok(Self {
            config,
            grid,
            alphabet,
            rng,
            total_score: 0,
            last_turn: TurnState::new(),
            moves_left: config.max_moves,
        })
    }

    /// Start a game on a prepared grid (no bootstrap).
    ///
    /// The grid must be dense and hold only candies of the alphabet.
    /// Dimensions are not checked against the settings ranges, which lets
    /// tests use small grids.
    pub fn from_grid(
        grid: Grid,
        candy_count: u8,
        max_moves: u32,
        rng: R,
    ) -> Result<Self, EngineError> {
        let alphabet = CandyAlphabet::new(candy_count)?;
        if !grid.is_dense() {
            return Err(EngineError::GridNotDense);
        }
        let width = grid.width() as usize;
        for (i, cell) in grid.cells().iter().enumerate() {
            if let Some(candy) = cell.filter(|&c| !alphabet.contains(c)) {
                return Err(EngineError::ForeignCandy {
                    row: (i / width) as u8 + 1,
                    column: (i % width) as u8 + 1,
                    symbol: candy.symbol(),
                });
            }
        }

        let config = GameConfig {
            width: grid.width(),
            height: grid.height(),
            candy_count,
            max_moves,
        };

        Ok(Self {
            config,
            grid,
            alphabet,
            rng,
            total_score: 0,
            last_turn: TurnState::new(),
            moves_left: max_moves,
        })
    }

    /// Play one move.
    ///
    /// Rejected moves (bad input, a swap of two identical candies, no moves
    /// left) leave the session untouched and do not consume a move.
    #[instrument(skip(self), fields(moves_left = self.moves_left))]
    pub fn play(&mut self, request: MoveRequest) -> Result<TurnReport, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let before = self.grid;
        let mv = MovePhase::Validating(request).complete(&mut self.grid)?;
        if self.grid == before {
            debug!("swap of identical candies ignored");
            return Err(MoveError::NoChange);
        }

        let resolution = resolve_fully(&mut self.grid, &self.alphabet, &mut self.rng)?;
        let gained = resolution.turn.total_gain();

        self.last_turn = resolution.turn;
        self.total_score = self.total_score.saturating_add(gained);
        self.moves_left -= 1;

        debug!(
            turn_score = resolution.turn.turn_score,
            multiplier = resolution.turn.multiplier,
            cascades = resolution.cascades,
            gained,
            "move resolved"
        );
        if self.is_over() {
            info!(score = self.total_score, "game over");
        }

        Ok(TurnReport {
            mv,
            resolution,
            gained,
            total_score: self.total_score,
            moves_left: self.moves_left,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn alphabet(&self) -> &CandyAlphabet {
        &self.alphabet
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Turn score and multiplier of the last accepted move.
    pub fn last_turn(&self) -> TurnState {
        self.last_turn
    }

    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    pub fn is_over(&self) -> bool {
        self.moves_left == 0
    }

    /// Write the display state into an existing snapshot.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.grid = self.grid;
        out.total_score = self.total_score;
        out.turn_score = self.last_turn.turn_score;
        out.multiplier = self.last_turn.multiplier;
        out.moves_left = self.moves_left;
        out.max_moves = self.config.max_moves;
        out.candy_count = self.config.candy_count;
        out.game_over = self.is_over();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            grid: self.grid,
            total_score: self.total_score,
            turn_score: self.last_turn.turn_score,
            multiplier: self.last_turn.multiplier,
            moves_left: self.moves_left,
            max_moves: self.config.max_moves,
            candy_count: self.config.candy_count,
            game_over: self.is_over(),
        }
    }
}
