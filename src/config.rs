use std::path::Path;

use tracing::warn;

use crate::board::{Stone, BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::engine::{AIEngine, Difficulty};
use crate::error::{ConfigError, GameError};
use crate::game::{GameMode, GameSession};

/// Longest accepted AI "thinking" delay
pub const MAX_AI_DELAY_MS: u64 = 10_000;

/// Application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board side length
    pub board_size: usize,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Pause before the AI plays, purely cosmetic
    pub ai_delay_ms: u64,
    /// Fixed RNG seed for reproducible AI play
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: BOARD_SIZE,
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            ai_delay_ms: 500,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate that all values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Validation(format!(
                "board_size must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        if self.ai_delay_ms > MAX_AI_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "ai_delay_ms must be <= {MAX_AI_DELAY_MS}, got {}",
                self.ai_delay_ms
            )));
        }
        if let GameMode::PvE { ai_color } = self.mode {
            if ai_color == Stone::Empty {
                return Err(ConfigError::Validation(
                    "mode.ai_color must be black or white".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Fresh session with the configured board, mode and difficulty
    pub fn new_session(&self) -> Result<GameSession, GameError> {
        GameSession::with_board_size(self.board_size, self.mode, self.difficulty)
    }

    /// AI engine, seeded when a seed is configured
    pub fn new_engine(&self) -> AIEngine {
        match self.seed {
            Some(seed) => AIEngine::seeded(self.difficulty, seed),
            None => AIEngine::new(self.difficulty),
        }
    }
}
