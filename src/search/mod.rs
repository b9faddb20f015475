//! Move search for the Gomoku AI
//!
//! One-ply only: every empty cell is scored with the heuristic and the
//! best is kept. Ties are broken at random.

pub mod best_move;

pub use best_move::{find_best_move, random_move, ScoredMove};
