//! Win condition checking for freestyle Gomoku
//!
//! Five or more stones in a row win. Overlines count, as in plain
//! Gomoku (not Renju).

use crate::board::{Axis, Board, Pos, Stone};
use tracing::trace;

/// Stones needed in a row to win
pub const WIN_LENGTH: usize = 5;

/// Contiguous same-color cells that completed the win, ordered from the
/// negative end of the axis to the positive end.
pub type WinningLine = Vec<Pos>;

/// Check whether the stone just played at `pos` completes a line of five.
///
/// The board must already hold `color` at `pos`. Axes are checked in the
/// fixed order horizontal, vertical, `\`, `/` and the first axis reaching
/// five is returned, so a move completing two lines reports only one.
/// The returned line holds every contiguous stone on that axis and may be
/// longer than five.
pub fn check_win(board: &Board, pos: Pos, color: Stone) -> Option<WinningLine> {
    debug_assert!(board.in_bounds(pos), "{pos} is off the board");
    debug_assert!(color != Stone::Empty);
    debug_assert_eq!(board.get(pos), color, "move must be applied before check_win");

    for axis in Axis::ALL {
        let line = line_through(board, pos, axis, color);
        if line.len() >= WIN_LENGTH {
            trace!(?axis, len = line.len(), "five in a row");
            return Some(line);
        }
    }
    None
}

/// Count consecutive `color` stones from `pos` (exclusive) along `(dx, dy)`,
/// stopping at the edge or the first non-matching cell.
fn run_length(board: &Board, pos: Pos, dx: i32, dy: i32, color: Stone) -> usize {
    (1..)
        .map(|i| pos.offset(dx, dy, i))
        .take_while(|&(x, y)| board.get_signed(x, y) == Some(color))
        .count()
}

/// The maximal run of `color` through `pos` on one axis
fn line_through(board: &Board, pos: Pos, axis: Axis, color: Stone) -> WinningLine {
    let (dx, dy) = axis.delta();
    let back = run_length(board, pos, -dx, -dy, color) as i32;
    let forward = run_length(board, pos, dx, dy, color) as i32;

    (-back..=forward)
        .map(|i| {
            let (x, y) = pos.offset(dx, dy, i);
            Pos::new(x as u8, y as u8)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, cells: &[(u8, u8)], color: Stone) {
        for &(x, y) in cells {
            board.place_stone(Pos::new(x, y), color);
        }
    }

    #[test]
    fn test_five_horizontal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, 0), Stone::Black);
        }
        let line = check_win(&board, Pos::new(4, 0), Stone::Black).unwrap();
        assert_eq!(line.len(), 5);
        assert_eq!(line[0], Pos::new(0, 0));
        assert_eq!(line[4], Pos::new(4, 0));
    }

    #[test]
    fn test_five_vertical() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(0, i), Stone::White);
        }
        assert!(check_win(&board, Pos::new(0, 4), Stone::White).is_some());
    }

    #[test]
    fn test_five_diagonal_down() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, i), Stone::Black);
        }
        let line = check_win(&board, Pos::new(4, 4), Stone::Black).unwrap();
        assert_eq!(line, (0..5).map(|i| Pos::new(i, i)).collect::<Vec<_>>());
    }

    #[test]
    fn test_five_diagonal_up() {
        let mut board = Board::new();
        // From (4, 8) up to (8, 4)
        for i in 0..5 {
            board.place_stone(Pos::new(4 + i, 8 - i), Stone::White);
        }
        let line = check_win(&board, Pos::new(6, 6), Stone::White).unwrap();
        assert_eq!(line.len(), 5);
        assert!(line.contains(&Pos::new(4, 8)));
        assert!(line.contains(&Pos::new(8, 4)));
    }

    #[test]
    fn test_lone_stone_no_win() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::Black);
        assert!(check_win(&board, Pos::new(0, 0), Stone::Black).is_none());
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(Pos::new(i, 9), Stone::Black);
        }
        assert!(check_win(&board, Pos::new(3, 9), Stone::Black).is_none());
    }

    #[test]
    fn test_overline_wins_with_all_cells() {
        let mut board = Board::new();
        for i in 2..9 {
            board.place_stone(Pos::new(i, 5), Stone::Black);
        }
        let line = check_win(&board, Pos::new(5, 5), Stone::Black).unwrap();
        assert_eq!(line.len(), 7);
    }

    #[test]
    fn test_opponent_stone_breaks_line() {
        let mut board = Board::new();
        place_all(&mut board, &[(0, 3), (1, 3), (3, 3), (4, 3), (5, 3)], Stone::Black);
        board.place_stone(Pos::new(2, 3), Stone::White);
        assert!(check_win(&board, Pos::new(3, 3), Stone::Black).is_none());
    }

    #[test]
    fn test_same_line_from_any_trigger() {
        let mut board = Board::new();
        for i in 3..8 {
            board.place_stone(Pos::new(10, i), Stone::White);
        }
        let expected = check_win(&board, Pos::new(10, 3), Stone::White).unwrap();
        for i in 4..8 {
            assert_eq!(check_win(&board, Pos::new(10, i), Stone::White).unwrap(), expected);
        }
    }

    #[test]
    fn test_horizontal_reported_before_vertical() {
        let mut board = Board::new();
        // Cross through (7, 7): horizontal and vertical both complete
        for i in 5..10 {
            board.place_stone(Pos::new(i, 7), Stone::Black);
        }
        for i in 5..10 {
            if i != 7 {
                board.place_stone(Pos::new(7, i), Stone::Black);
            }
        }
        let line = check_win(&board, Pos::new(7, 7), Stone::Black).unwrap();
        assert!(line.iter().all(|p| p.y == 7), "horizontal axis is checked first");
    }

    #[test]
    fn test_five_at_corner() {
        let mut board = Board::new();
        for i in 10..15 {
            board.place_stone(Pos::new(i, i), Stone::White);
        }
        assert!(check_win(&board, Pos::new(14, 14), Stone::White).is_some());
        assert!(check_win(&board, Pos::new(12, 12), Stone::White).is_some());
    }
}
