//! Board structure with last-move tracking

use std::fmt;

use super::{Cell, Player, Pos, BOARD_SIZE};
use crate::error::{GameError, Result};

/// Game board: a fixed 15x15 grid plus the most recently placed piece.
///
/// Pieces are never removed one by one; the only way back to an empty cell is
/// [`Board::clear`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    last_move: Option<Pos>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            last_move: None,
        }
    }

    /// Get the cell at position
    pub fn get(&self, pos: Pos) -> Result<Cell> {
        check_bounds(pos)?;
        Ok(self.cells[pos.row as usize][pos.col as usize])
    }

    /// Place a piece and record it as the last move.
    ///
    /// Fails without touching the board when the position is off the grid or
    /// already taken.
    pub fn place(&mut self, pos: Pos, player: Player) -> Result<()> {
        if !self.get(pos)?.is_empty() {
            return Err(GameError::OccupiedCell {
                row: pos.row as i32,
                col: pos.col as i32,
            });
        }
        self.put(pos, player);
        Ok(())
    }

    /// Unchecked placement used by the engine on cells it enumerated as empty.
    #[inline]
    pub(crate) fn put(&mut self, pos: Pos, player: Player) {
        debug_assert!(pos.in_bounds());
        self.cells[pos.row as usize][pos.col as usize] = Cell::Stone(player);
        self.last_move = Some(pos);
    }

    /// Raw cell access for the line scanners; indices must be on the board.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Position of the most recently placed piece
    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// True if at least one cell is still empty (false means a draw unless someone won)
    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().flatten().any(|c| c.is_empty())
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        self.last_move = None;
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..BOARD_SIZE).flat_map(move |r| {
            (0..BOARD_SIZE).filter_map(move |c| {
                self.cells[r][c]
                    .is_empty()
                    .then(|| Pos::new(r as u8, c as u8))
            })
        })
    }

    /// Total pieces on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stone_count() == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain-text grid: `X` for Black, `O` for White, `.` for empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..BOARD_SIZE {
            write!(f, "{:>3}", c)?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{:>3}", r)?;
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Stone(Player::Black) => 'X',
                    Cell::Stone(Player::White) => 'O',
                };
                write!(f, "{:>3}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[inline]
fn check_bounds(pos: Pos) -> Result<()> {
    if pos.in_bounds() {
        Ok(())
    } else {
        Err(GameError::OutOfRange {
            row: pos.row as i32,
            col: pos.col as i32,
        })
    }
}
