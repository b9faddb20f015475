//! Evaluation module for Gomoku positions
//!
//! Scores empty cells by local pattern matching:
//! - Line windows of four cells either side, per axis
//! - Tiered pattern scores (five, fours, threes, twos)
//! - Positional penalty (distance from centre)

pub mod heuristic;
pub mod patterns;

pub use heuristic::{center_distance, evaluate_position, line_window};
pub use patterns::{score_window, LineWindow, PatternScore, Symbol};
