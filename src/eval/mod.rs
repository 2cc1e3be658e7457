//! Evaluation module for Five in a Row positions
//!
//! This module provides run recognition and scoring for board positions.
//! The evaluation considers:
//! - Runs of one to five pieces along every line
//! - How many ends of each run are closed
//! - Whether the run's owner is the side to move

pub mod heuristic;
pub mod patterns;

pub use heuristic::{
    evaluate, evaluate_columns, evaluate_diagonals, evaluate_rows, owner_score, Evaluator,
    RunEvaluator,
};
pub use patterns::{consecutive_score, PatternScore};
