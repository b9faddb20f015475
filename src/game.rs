//! Game session: board, turn order and outcome for one game
//!
//! A session is an ordinary value owned by its caller. Any number of
//! independent games can run side by side, and the AI engine is passed in
//! per call rather than stored here.

use rand::Rng;
use tracing::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::engine::{AIEngine, Difficulty, MoveResult};
use crate::error::GameError;
use crate::rules::{is_legal_move, outcome_after_move, GameOutcome};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase", tag = "type")]
pub enum GameMode {
    /// Player vs Player (hotseat)
    #[default]
    PvP,
    /// Player vs computer
    PvE { ai_color: Stone },
}

impl GameMode {
    /// Human plays Black and moves first
    pub const VS_COMPUTER: GameMode = GameMode::PvE {
        ai_color: Stone::White,
    };

    pub fn ai_color(self) -> Option<Stone> {
        match self {
            GameMode::PvE { ai_color } => Some(ai_color),
            GameMode::PvP => None,
        }
    }
}

/// One game in progress (or finished)
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    mode: GameMode,
    difficulty: Difficulty,
    current_turn: Stone,
    outcome: GameOutcome,
    last_move: Option<Pos>,
    move_count: usize,
}

impl GameSession {
    /// Start a game on the standard 15x15 board
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self::from_board(Board::new(), mode, difficulty)
    }

    pub fn with_board_size(size: usize, mode: GameMode, difficulty: Difficulty) -> Result<Self, GameError> {
        Ok(Self::from_board(Board::with_size(size)?, mode, difficulty))
    }

    fn from_board(board: Board, mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            board,
            mode,
            difficulty,
            current_turn: Stone::Black,
            outcome: GameOutcome::InProgress,
            last_move: None,
            move_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    pub fn outcome(&self) -> &GameOutcome {
        &self.outcome
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        !self.outcome.is_over()
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.is_active() && self.mode.ai_color() == Some(self.current_turn)
    }

    /// Check if a human may place a stone now
    pub fn is_human_turn(&self) -> bool {
        self.is_active() && !self.is_ai_turn()
    }

    /// Start over with an empty board of the same size
    pub fn reset(&mut self) {
        let size = self.board.size();
        // Size was validated when the board was first built
        self.board = Board::with_size(size).unwrap_or_default();
        self.current_turn = Stone::Black;
        self.outcome = GameOutcome::InProgress;
        self.last_move = None;
        self.move_count = 0;
        info!(mode = ?self.mode, difficulty = self.difficulty.name(), "new game");
    }

    /// Switch mode. Restarts the game.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    /// Switch difficulty. Restarts the game so both sides start even.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.reset();
    }

    /// Place a stone for the side to move.
    ///
    /// Rejects moves after the game has ended, off the board, or onto an
    /// occupied cell. On success the turn passes to the other side unless
    /// the move ended the game.
    pub fn play(&mut self, pos: Pos) -> Result<&GameOutcome, GameError> {
        if !self.is_active() {
            return Err(GameError::GameOver);
        }
        if !self.board.in_bounds(pos) {
            return Err(GameError::OutOfBounds {
                pos,
                size: self.board.size(),
            });
        }
        if !is_legal_move(&self.board, pos) {
            return Err(GameError::CellOccupied(pos));
        }

        let color = self.current_turn;
        self.board.place_stone(pos, color);
        self.last_move = Some(pos);
        self.move_count += 1;
        debug!(side = color.name(), %pos, move_count = self.move_count, "stone placed");

        self.outcome = outcome_after_move(&self.board, pos, color);
        match &self.outcome {
            GameOutcome::InProgress => self.current_turn = color.opponent(),
            GameOutcome::Won { winner, line } => {
                info!(winner = winner.name(), line_len = line.len(), "game won");
            }
            GameOutcome::Draw => info!("board full, game drawn"),
        }
        Ok(&self.outcome)
    }

    /// Place a stone on behalf of a human player; refused during the AI's turn.
    pub fn play_human(&mut self, pos: Pos) -> Result<&GameOutcome, GameError> {
        if self.is_ai_turn() {
            return Err(GameError::NotYourTurn);
        }
        self.play(pos)
    }

    /// Let `engine` choose and play the AI side's move.
    ///
    /// The engine's difficulty is synced to the session's before it runs.
    pub fn play_ai<R: Rng>(&mut self, engine: &mut AIEngine<R>) -> Result<MoveResult, GameError> {
        if !self.is_active() {
            return Err(GameError::GameOver);
        }
        if !self.is_ai_turn() {
            return Err(GameError::NotYourTurn);
        }

        engine.set_difficulty(self.difficulty);
        let result = engine.select_move(&self.board, self.current_turn);
        let pos = result.best_move.ok_or(GameError::NoMoveAvailable)?;
        self.play(pos)?;
        Ok(result)
    }

    /// Status line for the presentational shell
    pub fn status_message(&self) -> String {
        match &self.outcome {
            GameOutcome::Won { winner, .. } => format!("{} Wins!", winner.name()),
            GameOutcome::Draw => "Draw!".to_string(),
            GameOutcome::InProgress => match self.mode {
                GameMode::PvE { .. } if self.is_ai_turn() => "Computer thinking...".to_string(),
                GameMode::PvE { .. } => format!("Your Turn ({})", self.current_turn.name()),
                GameMode::PvP => {
                    let player = if self.current_turn == Stone::Black { 1 } else { 2 };
                    format!("Player {} ({})'s Turn", player, self.current_turn.name())
                }
            },
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default(), Difficulty::default())
    }
}
