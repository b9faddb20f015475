//! Per-cell heuristic evaluation
//!
//! An empty cell is scored for a side as if that side had just played
//! there: each of the four axes contributes the score of its 9-cell
//! window, and cells nearer the centre are preferred through a small
//! distance penalty. Nothing is written to the board.

use crate::board::{Axis, Board, Pos, Stone};

use super::patterns::{score_window, LineWindow, PatternScore, Symbol, WINDOW_LEN, WINDOW_REACH};

/// Build the window along `axis` centred on `pos`, with the centre
/// treated as a `color` stone.
pub fn line_window(board: &Board, pos: Pos, axis: Axis, color: Stone) -> LineWindow {
    let (dx, dy) = axis.delta();
    let mut window = [Symbol::Empty; WINDOW_LEN];

    for (slot, i) in window.iter_mut().zip(-WINDOW_REACH..=WINDOW_REACH) {
        if i == 0 {
            *slot = Symbol::Own;
            continue;
        }
        let (x, y) = pos.offset(dx, dy, i);
        *slot = match board.get_signed(x, y) {
            None => Symbol::Wall,
            Some(Stone::Empty) => Symbol::Empty,
            Some(s) if s == color => Symbol::Own,
            Some(_) => Symbol::Opp,
        };
    }
    window
}

/// Manhattan distance from `pos` to the geometric centre of the board.
///
/// Computed in doubled coordinates so even-sized boards (whose centre
/// falls between cells) stay in integer arithmetic.
#[inline]
pub fn center_distance(board: &Board, pos: Pos) -> i32 {
    let span = board.size() as i32 - 1;
    let dx = (2 * i32::from(pos.x) - span).abs();
    let dy = (2 * i32::from(pos.y) - span).abs();
    (dx + dy) / 2
}

/// Evaluate an empty cell for `color`.
///
/// Returns [`PatternScore::FIVE`] as soon as any axis completes five;
/// otherwise the sum of the four axis scores minus the distance from
/// the centre.
#[must_use]
pub fn evaluate_position(board: &Board, pos: Pos, color: Stone) -> i32 {
    debug_assert!(board.in_bounds(pos));
    debug_assert!(color != Stone::Empty);

    let mut total = 0;
    for axis in Axis::ALL {
        let score = score_window(&line_window(board, pos, axis, color));
        if score == PatternScore::FIVE {
            return PatternScore::FIVE;
        }
        total += score;
    }
    total - center_distance(board, pos)
}
