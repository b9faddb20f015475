//! Board structure

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::GameError;

/// Square game board. The side length is fixed for the lifetime of the
/// board; a new game starts from a new board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
}

impl Board {
    /// Create an empty standard 15x15 board
    pub fn new() -> Self {
        Self {
            size: BOARD_SIZE as u8,
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Create an empty board with the given side length
    pub fn with_size(size: usize) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::InvalidBoardSize {
                size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self {
            size: size as u8,
            black: Bitboard::new(),
            white: Bitboard::new(),
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Check signed coordinates against the board bounds
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let n = i32::from(self.size);
        x >= 0 && x < n && y >= 0 && y < n
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!(self.in_bounds(pos), "{pos} outside {0}x{0} board", self.size);
        pos.y as usize * self.size() + pos.x as usize
    }

    #[inline]
    fn pos_at(&self, idx: usize) -> Pos {
        Pos::new((idx % self.size()) as u8, (idx / self.size()) as u8)
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        let idx = self.index(pos);
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Get the stone at signed coordinates, `None` when off the board
    #[inline]
    pub fn get_signed(&self, x: i32, y: i32) -> Option<Stone> {
        if self.contains(x, y) {
            Some(self.get(Pos::new(x as u8, y as u8)))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        let idx = self.index(pos);
        !self.black.get(idx) && !self.white.get(idx)
    }

    /// Place a stone. The cell must be in bounds and empty; the game
    /// session checks both before calling.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.is_empty(pos), "{pos} is already occupied");
        let idx = self.index(pos);
        match stone {
            Stone::Black => self.black.set(idx),
            Stone::White => self.white.set(idx),
            Stone::Empty => {}
        }
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Positions holding the given color, row-major
    pub fn positions(&self, stone: Stone) -> Vec<Pos> {
        self.stones(stone)
            .map(|bb| bb.iter_ones().map(|idx| self.pos_at(idx)).collect())
            .unwrap_or_default()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.size() * self.size()
    }

    /// Check if board has no stones
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// True when no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.cell_count()
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let occupied = self.black | self.white;
        (0..self.cell_count())
            .filter(move |&idx| !occupied.get(idx))
            .map(|idx| self.pos_at(idx))
    }

    /// Centre cell, rounded down on even boards
    #[inline]
    pub fn center(&self) -> Pos {
        let c = self.size / 2;
        Pos::new(c, c)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
