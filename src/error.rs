use std::path::PathBuf;

use crate::board::Pos;

/// Errors raised when a move or a board cannot be accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board size {size} is outside the supported range {min}..={max}")]
    InvalidBoardSize { size: usize, min: usize, max: usize },

    #[error("position {pos} is outside the {size}x{size} board")]
    OutOfBounds { pos: Pos, size: usize },

    #[error("cell {0} is already occupied")]
    CellOccupied(Pos),

    #[error("game is over")]
    GameOver,

    #[error("not your turn")]
    NotYourTurn,

    #[error("no legal move left for the computer")]
    NoMoveAvailable,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
