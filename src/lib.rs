//! Freestyle Gomoku engine with a heuristic opponent
//!
//! - 15x15 board by default
//! - 5-in-a-row to win (overlines allowed)
//! - Black moves first, sides alternate, no passes
//! - A full board without a five is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Move legality, win detection and game outcome
//! - [`eval`]: Line patterns and per-cell heuristic scores
//! - [`search`]: Best-move scan over empty cells
//! - [`engine`]: AI decision policy per difficulty
//! - [`game`]: Game session owned by the caller
//! - [`config`]: TOML configuration
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Difficulty, GameMode, GameSession, Pos};
//!
//! let mut game = GameSession::new(GameMode::VS_COMPUTER, Difficulty::Medium);
//! let mut engine = AIEngine::seeded(Difficulty::Medium, 7);
//!
//! game.play_human(Pos::new(7, 7)).unwrap();
//! let reply = game.play_ai(&mut engine).unwrap();
//! println!("AI plays at {:?} ({:?})", reply.best_move, reply.reason);
//! ```
//!
//! # Move Priority
//!
//! 1. Easy only: 30% chance of a random move
//! 2. Immediate winning move
//! 3. Block the opponent's immediate win
//! 4. Hard only: block a strong opponent threat
//! 5. Best heuristic cell

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{apply_move, create_empty_board, Board, Pos, Stone, BOARD_SIZE};
pub use config::GameConfig;
pub use engine::{select_move, AIEngine, Difficulty, MoveReason, MoveResult};
pub use error::{ConfigError, GameError};
pub use game::{GameMode, GameSession};
pub use rules::{check_win, GameOutcome, WinningLine};
