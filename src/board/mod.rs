//! Board representation for Gomoku

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Default board size (15x15)
pub const BOARD_SIZE: usize = 15;
/// Smallest board on which five-in-a-row is still possible
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest supported board (bitboards hold 19x19 = 361 cells)
pub const MAX_BOARD_SIZE: usize = 19;
pub const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE; // 361

/// Stone colors. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Display name used in status messages
    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::White => "White",
            Stone::Empty => "Empty",
        }
    }
}

/// Position on the board: `x` is the column, `y` the row.
///
/// Field order makes the derived ordering row-major, which is also the
/// order every board scan visits cells in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub y: u8,
    pub x: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!((x as usize) < MAX_BOARD_SIZE && (y as usize) < MAX_BOARD_SIZE);
        Self { x, y }
    }

    /// Step `dist` cells along `(dx, dy)`, returning signed coordinates
    /// that may fall outside the board.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, dist: i32) -> (i32, i32) {
        (i32::from(self.x) + dx * dist, i32::from(self.y) + dy * dist)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four line axes, in the fixed order every scan uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right (`\`)
    DiagonalDown,
    /// Bottom-left to top-right (`/`)
    DiagonalUp,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDown,
        Axis::DiagonalUp,
    ];

    /// Unit step `(dx, dy)` in the positive direction of the axis
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
            Axis::DiagonalDown => (1, 1),
            Axis::DiagonalUp => (1, -1),
        }
    }
}

/// Create an empty `size` x `size` board
pub fn create_empty_board(size: usize) -> Result<Board, crate::error::GameError> {
    Board::with_size(size)
}

/// Return a copy of `board` with `stone` placed at `pos`.
///
/// The caller is responsible for rejecting illegal moves first; see
/// [`crate::rules::is_legal_move`].
#[must_use]
pub fn apply_move(board: &Board, pos: Pos, stone: Stone) -> Board {
    let mut next = board.clone();
    next.place_stone(pos, stone);
    next
}
