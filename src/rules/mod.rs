//! Game rules for freestyle Gomoku
//!
//! - Move legality (in bounds, empty cell)
//! - Win condition (5+ in a row)
//! - Game outcome, including the draw on a full board

pub mod win;

pub use win::{check_win, WinningLine, WIN_LENGTH};

use crate::board::{Board, Pos, Stone};

/// State of a game after a move
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GameOutcome {
    #[default]
    InProgress,
    Won {
        winner: Stone,
        line: WinningLine,
    },
    /// Board exhausted with no five-in-a-row
    Draw,
}

impl GameOutcome {
    #[inline]
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(&self) -> Option<Stone> {
        match self {
            GameOutcome::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<&[Pos]> {
        match self {
            GameOutcome::Won { line, .. } => Some(line),
            _ => None,
        }
    }
}

/// A move is legal when its cell is on the board and empty.
/// Whether the game is still running is the session's concern.
#[inline]
pub fn is_legal_move(board: &Board, pos: Pos) -> bool {
    board.in_bounds(pos) && board.is_empty(pos)
}

/// Outcome after `color` has just played `pos` on `board`.
pub fn outcome_after_move(board: &Board, pos: Pos, color: Stone) -> GameOutcome {
    if let Some(line) = check_win(board, pos, color) {
        GameOutcome::Won { winner: color, line }
    } else if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_legal_move() {
        let mut board = Board::new();
        assert!(is_legal_move(&board, Pos::new(0, 0)));
        board.place_stone(Pos::new(0, 0), Stone::Black);
        assert!(!is_legal_move(&board, Pos::new(0, 0)));
        assert!(!is_legal_move(&board, Pos::new(15, 0)));
    }

    #[test]
    fn test_outcome_in_progress() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        let outcome = outcome_after_move(&board, Pos::new(7, 7), Stone::Black);
        assert_eq!(outcome, GameOutcome::InProgress);
        assert!(!outcome.is_over());
    }

    #[test]
    fn test_outcome_won() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, 1), Stone::White);
        }
        let outcome = outcome_after_move(&board, Pos::new(2, 1), Stone::White);
        assert_eq!(outcome.winner(), Some(Stone::White));
        assert_eq!(outcome.winning_line().map(<[Pos]>::len), Some(5));
        assert!(outcome.is_over());
    }

    #[test]
    fn test_outcome_draw_on_full_board() {
        // 5x5 filled in a pattern with no five-in-a-row:
        // rows alternate B B W W B / W W B B W shifted so no column or
        // diagonal gets five either.
        let rows: [[Stone; 5]; 5] = {
            use Stone::{Black as B, White as W};
            [
                [B, B, W, W, B],
                [W, W, B, B, W],
                [B, B, W, W, B],
                [W, W, B, B, W],
                [B, B, W, W, B],
            ]
        };
        let mut board = Board::with_size(5).unwrap();
        for (y, row) in rows.iter().enumerate() {
            for (x, &stone) in row.iter().enumerate() {
                board.place_stone(Pos::new(x as u8, y as u8), stone);
            }
        }
        let last = Pos::new(4, 4);
        assert_eq!(outcome_after_move(&board, last, Stone::Black), GameOutcome::Draw);
    }
}
