//! Game rules for Five in a Row
//!
//! Five or more same-owner pieces in a horizontal, vertical or diagonal line
//! win. A full board without a winner is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, find_winning_line, AnchoredWinDetector, WinDetector, WIN_LENGTH};
