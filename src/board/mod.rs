//! Board representation for Five in a Row

pub mod board;

#[cfg(test)]
mod tests;

use crate::error::{GameError, Result};

// Re-exports
pub use board::Board;

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;

/// Piece owners. Black is the first player (X), White the second (O).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get opponent
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }
}

/// Content of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Stone(Player),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Owner of the piece in this cell, if any
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Stone(player) => Some(player),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Stone(player)
    }
}

/// Position on the board
///
/// `Pos::new` does not validate; the board rejects positions outside the
/// grid with [`GameError::OutOfRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Build a position from signed coordinates, rejecting anything off the board.
    pub fn try_new(row: i32, col: i32) -> Result<Self> {
        if Self::is_valid(row, col) {
            Ok(Self::new(row as u8, col as u8))
        } else {
            Err(GameError::OutOfRange { row, col })
        }
    }

    #[inline]
    pub fn in_bounds(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major order: the enumeration order of every search in the crate.
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
