//! Depth-bounded minimax with alpha-beta pruning
//!
//! Scores are the evaluator's White-over-Black ratio, so White is the
//! maximizing side: a maximizing node places White pieces, a minimizing node
//! places Black pieces. Every empty cell is a candidate, tried in row-major
//! order, and each child works on its own clone of the parent board.
//!
//! Pruning is fail-hard: a child that reaches the opposite bound is returned
//! as-is, without looking at its remaining siblings. At the root,
//! [`Searcher::search_root`] also reports which cell that child was played on.
//!
//! # Example
//!
//! ```
//! use five_in_a_row::board::{Board, Player, Pos};
//! use five_in_a_row::search::{Searcher, SCORE_CEILING, SCORE_FLOOR};
//!
//! let mut board = Board::new();
//! for col in 0..4 {
//!     board.place(Pos::new(0, col), Player::Black).unwrap();
//! }
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.minimax(1, &board, false, SCORE_FLOOR, SCORE_CEILING);
//! assert_eq!(result.pos, Some(Pos::new(0, 4)));
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::board::{Board, Player, Pos};
use crate::eval::{Evaluator, PatternScore, RunEvaluator};

/// Lowest score a search window starts from
pub const SCORE_FLOOR: f64 = -1.0;
/// Highest score a search window starts from
pub const SCORE_CEILING: f64 = PatternScore::FIVE as f64;

/// Score of a node, with the move that leads to it.
///
/// Leaves carry no move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalResult {
    pub score: f64,
    pub pos: Option<Pos>,
}

impl EvalResult {
    #[inline]
    pub fn leaf(score: f64) -> Self {
        Self { score, pos: None }
    }

    #[inline]
    pub fn with_move(score: f64, pos: Pos) -> Self {
        Self {
            score,
            pos: Some(pos),
        }
    }
}

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, leaves included
    pub nodes: u64,
    /// Nodes scored directly by the evaluator
    pub leaves: u64,
    /// Alpha and beta cutoffs
    pub cutoffs: u64,
}

/// Outcome of a search started at the root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult {
    /// What [`Search::minimax`] returns for the root
    pub best: EvalResult,
    /// Root cell whose child reached the opposite bound, if the root was cut off.
    ///
    /// `best` is then that child's result and carries no move of its own.
    pub cutoff_move: Option<Pos>,
}

/// A game-tree search over a board.
pub trait Search {
    /// Best scored move for the side given by `maximizing`, within `[alpha, beta]`.
    fn minimax(
        &mut self,
        depth: u32,
        board: &Board,
        maximizing: bool,
        alpha: f64,
        beta: f64,
    ) -> EvalResult;

    /// Same as [`minimax`](Search::minimax), also reporting a root cutoff cell.
    fn search_root(
        &mut self,
        depth: u32,
        board: &Board,
        maximizing: bool,
        alpha: f64,
        beta: f64,
    ) -> RootResult {
        RootResult {
            best: self.minimax(depth, board, maximizing, alpha, beta),
            cutoff_move: None,
        }
    }

    /// Statistics accumulated since the last reset
    fn stats(&self) -> SearchStats;

    fn reset_stats(&mut self);
}

/// Alpha-beta searcher over board clones.
///
/// An optional stop flag is polled before each child; once it is raised every
/// node returns the best result it has so far.
#[derive(Debug, Clone, Default)]
pub struct Searcher<E = RunEvaluator> {
    evaluator: E,
    stats: SearchStats,
    stop: Option<Arc<AtomicBool>>,
}

impl Searcher<RunEvaluator> {
    pub fn new() -> Self {
        Self::with_evaluator(RunEvaluator)
    }
}

impl<E: Evaluator> Searcher<E> {
    pub fn with_evaluator(evaluator: E) -> Self {
        Self {
            evaluator,
            stats: SearchStats::default(),
            stop: None,
        }
    }

    /// Attach a flag another thread can raise to abandon the search.
    #[must_use]
    pub fn with_stop_flag(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = Some(stop);
        self
    }

    #[inline]
    fn is_stopped(&self) -> bool {
        self.stop
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Minimax with alpha-beta pruning.
    ///
    /// `depth == 0` and full boards are leaves, scored with the side to move
    /// being the one that would place next.
    pub fn minimax(
        &mut self,
        depth: u32,
        board: &Board,
        maximizing: bool,
        alpha: f64,
        beta: f64,
    ) -> EvalResult {
        self.node(depth, board, maximizing, alpha, beta).best
    }

    /// Root entry point: a cutoff at the root still names the cell that caused it.
    pub fn search_root(
        &mut self,
        depth: u32,
        board: &Board,
        maximizing: bool,
        alpha: f64,
        beta: f64,
    ) -> RootResult {
        self.node(depth, board, maximizing, alpha, beta)
    }

    fn node(
        &mut self,
        depth: u32,
        board: &Board,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
    ) -> RootResult {
        self.stats.nodes += 1;

        if depth == 0 || !board.has_empty_cell() {
            self.stats.leaves += 1;
            return RootResult {
                best: EvalResult::leaf(self.evaluator.evaluate(board, !maximizing)),
                cutoff_move: None,
            };
        }

        let (piece, mut best) = if maximizing {
            (Player::White, EvalResult::leaf(SCORE_FLOOR))
        } else {
            (Player::Black, EvalResult::leaf(SCORE_CEILING))
        };

        for pos in board.empty_cells() {
            if self.is_stopped() {
                break;
            }
            let mut child_board = board.clone();
            child_board.put(pos, piece);
            let child = self.minimax(depth - 1, &child_board, !maximizing, alpha, beta);

            let cut = if maximizing {
                alpha = alpha.max(child.score);
                child.score >= beta
            } else {
                beta = beta.min(child.score);
                child.score <= alpha
            };
            if cut {
                self.stats.cutoffs += 1;
                return RootResult {
                    best: child,
                    cutoff_move: Some(pos),
                };
            }

            let better = if maximizing {
                child.score > best.score
            } else {
                child.score < best.score
            };
            if better {
                best = EvalResult::with_move(child.score, pos);
            }
        }

        RootResult {
            best,
            cutoff_move: None,
        }
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }
}

impl<E: Evaluator> Search for Searcher<E> {
    fn minimax(
        &mut self,
        depth: u32,
        board: &Board,
        maximizing: bool,
        alpha: f64,
        beta: f64,
    ) -> EvalResult {
        Searcher::minimax(self, depth, board, maximizing, alpha, beta)
    }

    fn search_root(
        &mut self,
        depth: u32,
        board: &Board,
        maximizing: bool,
        alpha: f64,
        beta: f64,
    ) -> RootResult {
        Searcher::search_root(self, depth, board, maximizing, alpha, beta)
    }

    fn stats(&self) -> SearchStats {
        Searcher::stats(self)
    }

    fn reset_stats(&mut self) {
        Searcher::reset_stats(self)
    }
}
