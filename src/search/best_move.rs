//! Best-move search over all empty cells

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate_position, PatternScore};

/// A candidate move with its heuristic score for the side that would play it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub pos: Pos,
    pub score: i32,
}

impl ScoredMove {
    /// The move completes five in a row
    #[inline]
    pub fn is_win(&self) -> bool {
        self.score == PatternScore::FIVE
    }
}

/// Find the highest-scoring empty cell for `color`.
///
/// A winning cell is returned as soon as the scan is done, taking the
/// first one in row-major order. Otherwise ties for the top score are
/// broken uniformly at random. Returns `None` on a full board.
pub fn find_best_move<R: Rng + ?Sized>(board: &Board, color: Stone, rng: &mut R) -> Option<ScoredMove> {
    let mut best_score = i32::MIN;
    let mut moves: Vec<Pos> = Vec::new();

    for pos in board.empty_cells() {
        let score = evaluate_position(board, pos, color);
        if score > best_score {
            best_score = score;
            moves.clear();
            moves.push(pos);
        } else if score == best_score {
            moves.push(pos);
        }
    }

    if best_score == PatternScore::FIVE {
        return moves.first().map(|&pos| ScoredMove { pos, score: best_score });
    }

    moves
        .choose(rng)
        .map(|&pos| ScoredMove { pos, score: best_score })
}

/// Pick a random empty cell. An empty board gets the centre.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Pos> {
    if board.is_board_empty() {
        return Some(board.center());
    }
    let empty: Vec<Pos> = board.empty_cells().collect();
    empty.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_empty_board_picks_center() {
        let board = Board::new();
        let best = find_best_move(&board, Stone::White, &mut rng()).unwrap();
        assert_eq!(best.pos, Pos::new(7, 7));
        assert!(!best.is_win());
    }

    #[test]
    fn test_winning_cell_found() {
        let mut board = Board::new();
        for x in 0..4 {
            board.place_stone(Pos::new(x, 1), Stone::White);
        }
        let best = find_best_move(&board, Stone::White, &mut rng()).unwrap();
        assert_eq!(best.pos, Pos::new(4, 1));
        assert!(best.is_win());
    }

    #[test]
    fn test_first_winning_cell_in_row_major_order() {
        let mut board = Board::new();
        // Open four in the middle of row 5: both (3, 5) and (8, 5) win
        for x in 4..8 {
            board.place_stone(Pos::new(x, 5), Stone::Black);
        }
        for seed in 0..10 {
            let mut r = StdRng::seed_from_u64(seed);
            let best = find_best_move(&board, Stone::Black, &mut r).unwrap();
            assert_eq!(best.pos, Pos::new(3, 5));
        }
    }

    #[test]
    fn test_ties_broken_among_top_cells() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        let mut seen = std::collections::HashSet::new();
        for seed in 0..40 {
            let mut r = StdRng::seed_from_u64(seed);
            let best = find_best_move(&board, Stone::White, &mut r).unwrap();
            let score = evaluate_position(&board, best.pos, Stone::White);
            assert_eq!(score, best.score);
            seen.insert(best.pos);
        }
        // Symmetric position: several cells share the top score
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::with_size(5).unwrap();
        let cells: Vec<Pos> = board.empty_cells().collect();
        for (i, pos) in cells.into_iter().enumerate() {
            board.place_stone(pos, if i % 2 == 0 { Stone::Black } else { Stone::White });
        }
        assert!(find_best_move(&board, Stone::White, &mut rng()).is_none());
        assert!(random_move(&board, &mut rng()).is_none());
    }

    #[test]
    fn test_random_move_is_empty_cell() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        let mut r = rng();
        for _ in 0..50 {
            let pos = random_move(&board, &mut r).unwrap();
            assert!(board.is_empty(pos));
        }
        assert_eq!(random_move(&Board::new(), &mut r), Some(Pos::new(7, 7)));
    }
}
