//! Error type shared by the board, the engine and the game driver

use thiserror::Error;

/// Every failure the crate can report.
///
/// All of them are validation failures: a call that returns an error has not
/// mutated any board or game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("position ({row}, {col}) is outside the board (rows and columns must be between 0 and 14)")]
    OutOfRange { row: i32, col: i32 },
    #[error("position ({row}, {col}) is already occupied")]
    OccupiedCell { row: i32, col: i32 },
    #[error("search depth must be positive, got {0}")]
    InvalidDepth(i32),
    #[error("no empty cell left on the board")]
    BoardFull,
    #[error("the game is over")]
    GameOver,
    #[error("the game has not started")]
    NotStarted,
    #[error("it is not a human player's turn")]
    NotYourTurn,
}

pub type Result<T> = std::result::Result<T, GameError>;
