//! Game state management for the Gomoku GUI
//!
//! Wraps a [`GameSession`] together with the AI engine and the small
//! amount of presentation state the window needs. The AI plays on the
//! UI thread once its configured delay has passed.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::config::GameConfig;
use crate::engine::{AIEngine, Difficulty, MoveResult};
use crate::error::GameError;
use crate::game::{GameMode, GameSession};
use crate::Pos;

/// Main game state
pub struct GameState {
    pub session: GameSession,
    engine: AIEngine,
    ai_delay: Duration,
    /// When the current AI turn began, if it is the AI's turn
    ai_turn_started: Option<Instant>,
    pub last_ai_result: Option<MoveResult>,
    pub message: Option<String>,
}

impl GameState {
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        Ok(Self {
            session: config.new_session()?,
            engine: config.new_engine(),
            ai_delay: Duration::from_millis(config.ai_delay_ms),
            ai_turn_started: None,
            last_ai_result: None,
            message: None,
        })
    }

    /// Start a fresh game with the current mode and difficulty
    pub fn new_game(&mut self) {
        self.session.reset();
        self.clear_transient();
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        if self.session.mode() != mode {
            self.session.set_mode(mode);
            self.clear_transient();
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.session.difficulty() != difficulty {
            self.session.set_difficulty(difficulty);
            self.clear_transient();
        }
    }

    fn clear_transient(&mut self) {
        self.ai_turn_started = None;
        self.last_ai_result = None;
        self.message = None;
    }

    /// Check if the AI is waiting to move
    pub fn is_ai_thinking(&self) -> bool {
        self.session.is_ai_turn()
    }

    /// Attempt to place a stone for the human side
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), GameError> {
        self.session.play_human(pos)?;
        self.message = None;
        Ok(())
    }

    /// Let the AI move if it is its turn and the delay has elapsed.
    ///
    /// Returns `true` when a stone was placed.
    pub fn poll_ai(&mut self, now: Instant) -> bool {
        if !self.session.is_ai_turn() {
            self.ai_turn_started = None;
            return false;
        }

        let started = *self.ai_turn_started.get_or_insert(now);
        if now.saturating_duration_since(started) < self.ai_delay {
            return false;
        }
        self.ai_turn_started = None;

        match self.session.play_ai(&mut self.engine) {
            Ok(result) => {
                debug!(reason = ?result.reason, best_move = ?result.best_move, "AI played");
                self.last_ai_result = Some(result);
                true
            }
            Err(err) => {
                warn!(%err, "AI could not move");
                self.message = Some(err.to_string());
                false
            }
        }
    }

    /// Time left before the AI plays, while it is waiting
    pub fn ai_wait_remaining(&self, now: Instant) -> Option<Duration> {
        let started = self.ai_turn_started?;
        Some(self.ai_delay.saturating_sub(now.saturating_duration_since(started)))
    }
}
