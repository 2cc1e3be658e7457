//! Five in a Row engine
//!
//! A two-player game on a 15x15 board: the first player to line up five
//! pieces horizontally, vertically or diagonally wins. A full board without
//! a five is a draw.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Grid state and the last-move marker
//! - [`rules`]: Five-in-a-row detection anchored at the last move
//! - [`eval`]: Run-length heuristic evaluation
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: Move selection for the automated player
//! - [`game`]: Turn order, outcomes and game modes
//! - [`ui`]: egui front-end
//!
//! # Quick Start
//!
//! ```
//! use five_in_a_row::{Board, MoveSelector, Player, Pos};
//!
//! let mut board = Board::new();
//! board.place(Pos::new(7, 7), Player::Black).unwrap();
//!
//! // AI responds as White
//! let mut selector = MoveSelector::new();
//! let pos = selector.select_move(&mut board, Player::White, 1).unwrap();
//! println!("AI plays at ({}, {})", pos.row, pos.col);
//! ```
//!
//! # Move Selection
//!
//! 1. Immediate winning move (no search)
//! 2. Minimax over every empty cell, row-major, with fail-hard alpha-beta cutoffs

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use engine::{MoveResult, MoveSelector, SearchConfig, SearchType};
pub use error::GameError;
pub use game::{Game, GameMode, MoveOutcome, Outcome, Phase};
