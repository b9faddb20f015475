//! AI move selection
//!
//! The engine picks one move per call, following a fixed priority:
//!
//! 1. **Random mistake** (easy only): with probability 0.3, play anywhere
//! 2. **Immediate win**: complete our own five
//! 3. **Block**: occupy the cell where the opponent would complete five
//! 4. **Strategic block** (hard only): take the opponent's best cell when
//!    its threat is large and ours is not larger
//! 5. **Strategic**: play our own best-scoring cell
//!
//! There is no look-ahead beyond one ply; all strength comes from the
//! per-cell heuristic in [`crate::eval`].
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, Pos, Stone};
//!
//! let mut board = Board::new();
//! for x in 0..4 {
//!     board.place_stone(Pos::new(x, 1), Stone::White);
//! }
//!
//! let mut engine = AIEngine::seeded(Difficulty::Medium, 42);
//! let result = engine.select_move(&board, Stone::White);
//! assert_eq!(result.best_move, Some(Pos::new(4, 1)));
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::search::{find_best_move, random_move, ScoredMove};

/// Probability that an easy engine ignores strategy for one move
pub const EASY_MISTAKE_RATE: f64 = 0.3;

/// Opponent score above which a hard engine considers blocking early
pub const STRATEGIC_BLOCK_THRESHOLD: i32 = 4000;

/// AI strength setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Which rule of the decision policy produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveReason {
    /// Easy-mode random move
    RandomMistake,
    /// Completes five in a row
    ImmediateWin,
    /// Blocks the opponent's five
    BlockWin,
    /// Hard-mode pre-emptive block of a strong opponent threat
    StrategicBlock,
    /// Best heuristic cell for the engine's own side
    Strategic,
    /// Board is full
    NoMove,
}

impl MoveReason {
    pub fn label(self) -> &'static str {
        match self {
            MoveReason::RandomMistake => "Random",
            MoveReason::ImmediateWin => "Winning move",
            MoveReason::BlockWin => "Block five",
            MoveReason::StrategicBlock => "Block threat",
            MoveReason::Strategic => "Best cell",
            MoveReason::NoMove => "No move",
        }
    }
}

/// Result of a move selection.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move, `None` only when the board is full
    pub best_move: Option<Pos>,
    /// Heuristic score behind the decision (`PatternScore::FIVE` for wins
    /// and forced blocks, 0 for random moves)
    pub score: i32,
    pub reason: MoveReason,
    /// Time taken in microseconds
    pub time_us: u64,
}

impl MoveResult {
    #[inline]
    fn from_scored(mv: ScoredMove, reason: MoveReason, start: Instant) -> Self {
        Self {
            best_move: Some(mv.pos),
            score: mv.score,
            reason,
            time_us: start.elapsed().as_micros() as u64,
        }
    }

    #[inline]
    fn random(pos: Option<Pos>, start: Instant) -> Self {
        Self {
            best_move: pos,
            score: 0,
            reason: if pos.is_some() {
                MoveReason::RandomMistake
            } else {
                MoveReason::NoMove
            },
            time_us: start.elapsed().as_micros() as u64,
        }
    }

    #[inline]
    fn no_move(start: Instant) -> Self {
        Self {
            best_move: None,
            score: 0,
            reason: MoveReason::NoMove,
            time_us: start.elapsed().as_micros() as u64,
        }
    }
}

/// Heuristic Gomoku opponent.
///
/// Owns its random source so that a seeded engine replays the same game.
pub struct AIEngine<R: Rng = StdRng> {
    difficulty: Difficulty,
    rng: R,
}

impl AIEngine<StdRng> {
    /// Create an engine seeded from OS entropy
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, StdRng::from_entropy())
    }

    /// Create a deterministic engine
    #[must_use]
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> AIEngine<R> {
    #[must_use]
    pub fn with_rng(difficulty: Difficulty, rng: R) -> Self {
        Self { difficulty, rng }
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Choose a move for `color`.
    ///
    /// Returns a result with `best_move == None` only when no empty cell
    /// is left; callers treat that as a drawn game.
    #[must_use]
    pub fn select_move(&mut self, board: &Board, color: Stone) -> MoveResult {
        debug_assert!(color != Stone::Empty);
        let start = Instant::now();
        let result = self.decide(board, color, start);
        debug!(
            difficulty = self.difficulty.name(),
            side = color.name(),
            reason = ?result.reason,
            score = result.score,
            best_move = ?result.best_move,
            time_us = result.time_us,
            "AI move selected"
        );
        result
    }

    fn decide(&mut self, board: &Board, color: Stone, start: Instant) -> MoveResult {
        // 1. Easy: occasional random move
        if self.difficulty == Difficulty::Easy && self.rng.gen_bool(EASY_MISTAKE_RATE) {
            return MoveResult::random(random_move(board, &mut self.rng), start);
        }

        // 2. Our own immediate win
        let Some(own) = find_best_move(board, color, &mut self.rng) else {
            return MoveResult::no_move(start);
        };
        if own.is_win() {
            return MoveResult::from_scored(own, MoveReason::ImmediateWin, start);
        }

        // 3. Opponent's immediate win must be blocked
        let opponent = color.opponent();
        let threat = find_best_move(board, opponent, &mut self.rng);
        if let Some(threat) = threat.filter(ScoredMove::is_win) {
            return MoveResult::from_scored(threat, MoveReason::BlockWin, start);
        }

        // 4. Hard: block a strong threat unless our own play is stronger
        if self.difficulty == Difficulty::Hard {
            if let Some(threat) = threat {
                if threat.score > STRATEGIC_BLOCK_THRESHOLD && own.score < threat.score {
                    return MoveResult::from_scored(threat, MoveReason::StrategicBlock, start);
                }
            }
        }

        // 5. Best cell for ourselves
        MoveResult::from_scored(own, MoveReason::Strategic, start)
    }
}

/// One-shot move selection with a caller-supplied random source.
pub fn select_move<R: Rng>(board: &Board, difficulty: Difficulty, ai_side: Stone, rng: R) -> Option<Pos> {
    AIEngine::with_rng(difficulty, rng).select_move(board, ai_side).best_move
}
