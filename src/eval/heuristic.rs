//! Heuristic evaluation of non-terminal boards
//!
//! Every line of the board (rows, columns and both diagonal orientations) is
//! scanned once per owner. Along a line the scanner keeps the length of the
//! current run and how many of its ends are closed. The line boundary and
//! opponent pieces close an end; an empty cell leaves it open. Each finished
//! run is scored with [`consecutive_score`].
//!
//! The final value is the ratio `White score / Black score`, so higher values
//! favour White whichever side is to move. The side-to-move flag only changes
//! how urgent each owner's runs are rated.

use crate::board::{Board, Cell, Player, BOARD_SIZE};

use super::patterns::consecutive_score;

/// Scores a board for the search.
pub trait Evaluator {
    /// `White score / Black score`, with a zero Black score treated as 1.
    fn evaluate(&self, board: &Board, black_to_move: bool) -> f64;
}

/// Run-length evaluator over all rows, columns and diagonals.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunEvaluator;

impl Evaluator for RunEvaluator {
    #[inline]
    fn evaluate(&self, board: &Board, black_to_move: bool) -> f64 {
        evaluate(board, black_to_move)
    }
}

/// Evaluate the board as a White-over-Black ratio.
#[must_use]
pub fn evaluate(board: &Board, black_to_move: bool) -> f64 {
    let black = owner_score(board, Player::Black, black_to_move) as f64;
    let white = owner_score(board, Player::White, black_to_move) as f64;
    let black = if black == 0.0 { 1.0 } else { black };
    white / black
}

/// Total run score of one owner over every line family.
#[must_use]
pub fn owner_score(board: &Board, owner: Player, black_to_move: bool) -> i64 {
    evaluate_rows(board, owner, black_to_move)
        + evaluate_columns(board, owner, black_to_move)
        + evaluate_diagonals(board, owner, black_to_move)
}

/// Rows, left to right
#[must_use]
pub fn evaluate_rows(board: &Board, owner: Player, black_to_move: bool) -> i64 {
    let mut scan = RunScanner::new(owner, black_to_move);
    for r in 0..BOARD_SIZE {
        scan.line((0..BOARD_SIZE).map(|c| board.at(r, c)));
    }
    scan.score
}

/// Columns, top to bottom
#[must_use]
pub fn evaluate_columns(board: &Board, owner: Player, black_to_move: bool) -> i64 {
    let mut scan = RunScanner::new(owner, black_to_move);
    for c in 0..BOARD_SIZE {
        scan.line((0..BOARD_SIZE).map(|r| board.at(r, c)));
    }
    scan.score
}

/// Both diagonal orientations, including the short corner diagonals
#[must_use]
pub fn evaluate_diagonals(board: &Board, owner: Player, black_to_move: bool) -> i64 {
    let n = BOARD_SIZE as i32;
    let mut scan = RunScanner::new(owner, black_to_move);

    // Anti-diagonals (row + col = k), walked downward from the top-right end
    for k in 0..=2 * (n - 1) {
        let first = (k - n + 1).max(0);
        let last = k.min(n - 1);
        scan.line((first..=last).map(|r| board.at(r as usize, (k - r) as usize)));
    }

    // Main diagonals (row - col = k), walked downward from the top-left end
    for k in (1 - n)..n {
        let first = k.max(0);
        let last = (n + k - 1).min(n - 1);
        scan.line((first..=last).map(|r| board.at(r as usize, (r - k) as usize)));
    }

    scan.score
}

/// Running state of a line scan for one owner
struct RunScanner {
    owner: Player,
    mover_turn: bool,
    count: u32,
    blocks: u32,
    score: i64,
}

impl RunScanner {
    fn new(owner: Player, black_to_move: bool) -> Self {
        Self {
            owner,
            mover_turn: (owner == Player::Black) == black_to_move,
            count: 0,
            blocks: 2,
            score: 0,
        }
    }

    /// Scan one line; the line start counts as a closed end.
    fn line(&mut self, cells: impl Iterator<Item = Cell>) {
        self.count = 0;
        self.blocks = 2;
        for cell in cells {
            self.push(cell);
        }
        if self.count > 0 {
            self.flush();
        }
    }

    #[inline]
    fn push(&mut self, cell: Cell) {
        match cell.owner() {
            Some(p) if p == self.owner => self.count += 1,
            None => {
                if self.count > 0 {
                    // Open trailing end
                    self.blocks -= 1;
                    self.flush();
                }
                self.blocks = 1;
            }
            Some(_) => {
                if self.count > 0 {
                    self.flush();
                }
                self.blocks = 2;
            }
        }
    }

    #[inline]
    fn flush(&mut self) {
        self.score += consecutive_score(self.count, self.blocks, self.mover_turn);
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    fn board_with(cells: &[(u8, u8)], player: Player) -> Board {
        let mut board = Board::new();
        for &(r, c) in cells {
            board.place(Pos::new(r, c), player).unwrap();
        }
        board
    }

    #[test]
    fn test_evaluate_empty_board() {
        let board = Board::new();
        assert_eq!(evaluate(&board, true), 0.0);
        assert_eq!(owner_score(&board, Player::Black, true), 0);
    }

    #[test]
    fn test_evaluate_rows() {
        let mut board = Board::new();
        for r in 0..15 {
            for c in 0..3 {
                board.place(Pos::new(r, c), Player::Black).unwrap();
            }
        }
        // Every row: three against the edge, open on the right, Black to move
        assert_eq!(evaluate_rows(&board, Player::Black, true), 150);
    }

    #[test]
    fn test_evaluate_columns() {
        let mut board = Board::new();
        for c in 0..15 {
            for r in 0..3 {
                board.place(Pos::new(r, c), Player::White).unwrap();
            }
        }
        assert_eq!(evaluate_columns(&board, Player::White, false), 150);
    }

    #[test]
    fn test_evaluate_main_diagonal() {
        let board = board_with(&[(1, 1), (2, 2), (3, 3)], Player::Black);
        // Open three (50000 or 200) plus three singles on the anti-diagonals
        assert_eq!(evaluate_diagonals(&board, Player::Black, true), 50_003);
        assert_eq!(evaluate_diagonals(&board, Player::Black, false), 203);
    }

    #[test]
    fn test_evaluate_anti_diagonal() {
        let board = board_with(&[(2, 13), (3, 12), (4, 11)], Player::Black);
        assert_eq!(evaluate_diagonals(&board, Player::Black, true), 50_003);
        assert_eq!(evaluate_diagonals(&board, Player::Black, false), 203);
    }

    #[test]
    fn test_opponent_closes_run() {
        let mut board = board_with(&[(0, 5), (0, 6), (0, 7)], Player::Black);
        board.place(Pos::new(0, 4), Player::White).unwrap();
        board.place(Pos::new(0, 8), Player::White).unwrap();
        // Both ends closed: dead three
        assert_eq!(evaluate_rows(&board, Player::Black, true), 0);

        let mut board = board_with(&[(0, 5), (0, 6), (0, 7)], Player::Black);
        board.place(Pos::new(0, 4), Player::White).unwrap();
        assert_eq!(evaluate_rows(&board, Player::Black, true), 10);
    }

    #[test]
    fn test_run_against_far_edge() {
        let board = board_with(&[(6, 12), (6, 13), (6, 14)], Player::White);
        // Leading empty opens one end, the trailing edge adds nothing
        assert_eq!(evaluate_rows(&board, Player::White, false), 10);
    }

    #[test]
    fn test_corner_single_scores_nothing_on_one_cell_diagonal() {
        let board = board_with(&[(0, 14)], Player::Black);
        // Anti-diagonal k=14 is long and open below; main diagonal k=-14 is one cell
        assert_eq!(evaluate_diagonals(&board, Player::Black, true), 1);
    }

    #[test]
    fn test_evaluate_ratio() {
        let shape = [(1, 1), (1, 2), (1, 3), (2, 1), (2, 2)];

        let board = board_with(&shape, Player::Black);
        assert_eq!(evaluate(&board, true), 0.0);

        let board = board_with(&shape, Player::White);
        assert!((evaluate(&board, false) - 50_047.0).abs() < 0.1);
        assert_eq!(RunEvaluator.evaluate(&board, false), evaluate(&board, false));
    }

    #[test]
    fn test_evaluate_divides_by_black() {
        let mut board = Board::new();
        board.place(Pos::new(7, 7), Player::Black).unwrap();
        board.place(Pos::new(7, 8), Player::White).unwrap();
        let black = owner_score(&board, Player::Black, true) as f64;
        let white = owner_score(&board, Player::White, true) as f64;
        assert!(black > 0.0);
        assert_eq!(evaluate(&board, true), white / black);
    }
}
