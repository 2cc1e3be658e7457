//! Search module for the Five in a Row AI
//!
//! Contains the depth-bounded minimax search with alpha-beta pruning.

pub mod alphabeta;

pub use alphabeta::{
    EvalResult, RootResult, Search, SearchStats, Searcher, SCORE_CEILING, SCORE_FLOOR,
};
