//! Win condition checking anchored at the last move
//!
//! A board can only have become won by its most recent placement, so instead
//! of scanning the whole grid the detector looks at the four lines through the
//! last move, and on each line only at the five-cell spans that contain it.
//! Spans that would run off the board are skipped by index arithmetic.

use crate::board::{Board, Player, Pos, BOARD_SIZE};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Pieces needed in a line to win
pub const WIN_LENGTH: i32 = 5;

/// Decides whether a board is won.
pub trait WinDetector {
    /// Owner of a winning line through the board's last move, if any.
    fn winner(&self, board: &Board) -> Option<Player>;
}

/// Five-in-a-row detector looking only at spans through the last move.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchoredWinDetector;

impl WinDetector for AnchoredWinDetector {
    #[inline]
    fn winner(&self, board: &Board) -> Option<Player> {
        check_winner(board)
    }
}

/// Check for a winner through the last move.
///
/// Returns `None` on a board with no last move.
pub fn check_winner(board: &Board) -> Option<Player> {
    find_winning_line(board).map(|(player, _)| player)
}

/// Find the first winning five-cell span through the last move.
///
/// Directions are tried horizontal, vertical, SE, SW; within a direction the
/// span starting furthest back is tried first.
pub fn find_winning_line(board: &Board) -> Option<(Player, [Pos; 5])> {
    let anchor = board.last_move()?;
    let owner = board.at(anchor.row as usize, anchor.col as usize).owner()?;

    for (dr, dc) in DIRECTIONS {
        for back in (0..WIN_LENGTH).rev() {
            let start_r = anchor.row as i32 - dr * back;
            let start_c = anchor.col as i32 - dc * back;
            let end_r = start_r + dr * (WIN_LENGTH - 1);
            let end_c = start_c + dc * (WIN_LENGTH - 1);
            // A straight span is on the board iff both of its ends are
            if !Pos::is_valid(start_r, start_c) || !Pos::is_valid(end_r, end_c) {
                continue;
            }

            let mut line = [anchor; 5];
            let mut complete = true;
            for (i, slot) in line.iter_mut().enumerate() {
                let r = (start_r + dr * i as i32) as usize;
                let c = (start_c + dc * i as i32) as usize;
                debug_assert!(r < BOARD_SIZE && c < BOARD_SIZE);
                if board.at(r, c).owner() != Some(owner) {
                    complete = false;
                    break;
                }
                *slot = Pos::new(r as u8, c as u8);
            }
            if complete {
                return Some((owner, line));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, cells: &[(u8, u8)], player: Player) {
        for &(r, c) in cells {
            board.place(Pos::new(r, c), player).unwrap();
        }
    }

    #[test]
    fn test_main_diagonal_win_on_fifth_piece() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place(Pos::new(i, i), Player::Black).unwrap();
            if i < 4 {
                assert_eq!(check_winner(&board), None);
            } else {
                assert_eq!(check_winner(&board), Some(Player::Black));
            }
        }
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        place_all(&mut board, &[(9, 0), (9, 1), (9, 3), (9, 4)], Player::Black);
        assert_eq!(check_winner(&board), None);
        // Filling the gap last: the anchor sits in the middle of the span
        board.place(Pos::new(9, 2), Player::Black).unwrap();
        assert_eq!(check_winner(&board), Some(Player::Black));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        place_all(&mut board, &[(0, 9), (1, 9), (2, 9), (3, 9), (4, 9)], Player::White);
        assert_eq!(AnchoredWinDetector.winner(&board), Some(Player::White));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let mut board = Board::new();
        // Diagonal from (4, 8) to (8, 4)
        for i in 0..5 {
            board.place(Pos::new(4 + i, 8 - i), Player::White).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Player::White));
    }

    #[test]
    fn test_win_ending_at_last_column() {
        let mut board = Board::new();
        place_all(&mut board, &[(3, 10), (3, 11), (3, 12), (3, 13), (3, 14)], Player::Black);
        assert_eq!(check_winner(&board), Some(Player::Black));

        // Same line, anchor at the far end of the row
        let mut board = Board::new();
        place_all(&mut board, &[(3, 10), (3, 11), (3, 12), (3, 13)], Player::Black);
        board.place(Pos::new(3, 14), Player::Black).unwrap();
        let (_, line) = find_winning_line(&board).unwrap();
        assert_eq!(line[0], Pos::new(3, 10));
        assert_eq!(line[4], Pos::new(3, 14));
    }

    #[test]
    fn test_anti_diagonal_win_touching_top_right_corner() {
        let mut board = Board::new();
        // (0,14) .. (4,10); last piece on the corner itself
        place_all(&mut board, &[(4, 10), (3, 11), (2, 12), (1, 13), (0, 14)], Player::White);
        assert_eq!(check_winner(&board), Some(Player::White));
    }

    #[test]
    fn test_anti_diagonal_win_touching_bottom_left_corner() {
        let mut board = Board::new();
        place_all(&mut board, &[(10, 4), (11, 3), (12, 2), (13, 1), (14, 0)], Player::Black);
        assert_eq!(check_winner(&board), Some(Player::Black));
    }

    #[test]
    fn test_diagonal_win_at_bottom_right_corner() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place(Pos::new(10 + i, 10 + i), Player::White).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Player::White));
    }

    #[test]
    fn test_short_diagonal_near_corner_never_wins() {
        let mut board = Board::new();
        // The SW diagonal through (0,3) only has four cells
        place_all(&mut board, &[(3, 0), (2, 1), (1, 2), (0, 3)], Player::Black);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        for i in 0..6 {
            board.place(Pos::new(7, i), Player::Black).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Player::Black));
    }

    #[test]
    fn test_mixed_line_not_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 0), (7, 1), (7, 3), (7, 4)], Player::Black);
        board.place(Pos::new(7, 2), Player::White).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_only_lines_through_last_move_count() {
        let mut board = Board::new();
        place_all(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)], Player::Black);
        // A later move elsewhere moves the anchor away from the five
        board.place(Pos::new(10, 10), Player::White).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_on_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert!(find_winning_line(&board).is_none());
    }
}
