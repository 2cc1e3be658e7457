//! Move selection for the automated player
//!
//! One automated move goes through two phases:
//!
//! 1. **Immediate win**: every empty cell is tried for the mover; the first
//!    one (row-major) that completes five is played without searching.
//! 2. **Minimax**: otherwise the alpha-beta search runs over the full
//!    `[-1, 1e8]` window and its move is played. When the root itself is cut
//!    off the search has no best move, and the root cell that caused the
//!    cutoff is played instead. Only if neither exists does the selector fall
//!    back to the first empty cell.
//!
//! The root of the search enumerates the opponent's placements (Black to
//! move searches as the maximizer, which places White pieces, and vice
//! versa), so the mover takes the square the opponent values most.
//!
//! # Example
//!
//! ```
//! use five_in_a_row::{Board, MoveSelector, Player, Pos};
//!
//! let mut board = Board::new();
//! for col in 0..4 {
//!     board.place(Pos::new(0, col), Player::Black).unwrap();
//! }
//!
//! let mut selector = MoveSelector::new();
//! let pos = selector.select_move(&mut board, Player::Black, 1).unwrap();
//! assert_eq!(pos, Pos::new(0, 4));
//! ```

use std::time::Instant;

use log::{debug, info, warn};

use crate::board::{Board, Player, Pos};
use crate::error::{GameError, Result};
use crate::rules::{AnchoredWinDetector, WinDetector};
use crate::search::{Search, Searcher, SCORE_CEILING, SCORE_FLOOR};

/// Search depth setting. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    depth: u32,
}

impl SearchConfig {
    pub const DEFAULT_DEPTH: u32 = 3;

    /// Fails with [`GameError::InvalidDepth`] for `depth <= 0`.
    pub fn new(depth: i32) -> Result<Self> {
        if depth <= 0 {
            return Err(GameError::InvalidDepth(depth));
        }
        Ok(Self {
            depth: depth as u32,
        })
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: Self::DEFAULT_DEPTH,
        }
    }
}

/// Which phase produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Completes five right away
    ImmediateWin,
    /// Chosen by the alpha-beta search
    Minimax,
    /// The root was cut off; the cell whose reply reached the bound is played
    RootCutoff,
    /// The search returned no move; first empty cell played instead
    Fallback,
}

/// A played automated move with search statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    pub pos: Pos,
    /// Search score of the move; `None` when no search ran
    pub score: Option<f64>,
    pub search_type: SearchType,
    /// Nodes searched
    pub nodes: u64,
    pub time_ms: u64,
}

/// Picks and plays moves for an automated player.
#[derive(Debug, Clone, Default)]
pub struct MoveSelector<S = Searcher, W = AnchoredWinDetector> {
    searcher: S,
    detector: W,
}

impl MoveSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(Searcher::new(), AnchoredWinDetector)
    }
}

impl<S: Search, W: WinDetector> MoveSelector<S, W> {
    pub fn with_parts(searcher: S, detector: W) -> Self {
        Self { searcher, detector }
    }

    /// Choose a move for `mover`, play it on `board` and return where it went.
    ///
    /// Fails with [`GameError::InvalidDepth`] for `depth <= 0` and with
    /// [`GameError::BoardFull`] when there is nowhere to play; the board is
    /// left untouched in both cases.
    pub fn select_move(&mut self, board: &mut Board, mover: Player, depth: i32) -> Result<Pos> {
        let config = SearchConfig::new(depth)?;
        Ok(self.select_move_with_stats(board, mover, config)?.pos)
    }

    /// Same as [`select_move`](Self::select_move) with a validated depth,
    /// returning search statistics as well.
    pub fn select_move_with_stats(
        &mut self,
        board: &mut Board,
        mover: Player,
        config: SearchConfig,
    ) -> Result<MoveResult> {
        let start = Instant::now();

        if !board.has_empty_cell() {
            return Err(GameError::BoardFull);
        }

        let result = if let Some(pos) = self.find_immediate_win(board, mover) {
            MoveResult {
                pos,
                score: None,
                search_type: SearchType::ImmediateWin,
                nodes: 0,
                time_ms: elapsed_ms(start),
            }
        } else {
            self.searcher.reset_stats();
            let root = self.searcher.search_root(
                config.depth(),
                board,
                mover == Player::Black,
                SCORE_FLOOR,
                SCORE_CEILING,
            );
            let best = root.best;
            let stats = self.searcher.stats();
            debug!(
                "minimax depth {} for {}: score {} nodes {} leaves {} cutoffs {}",
                config.depth(),
                mover.name(),
                best.score,
                stats.nodes,
                stats.leaves,
                stats.cutoffs
            );

            let (pos, search_type) = match (best.pos, root.cutoff_move) {
                (Some(pos), _) => (pos, SearchType::Minimax),
                (None, Some(pos)) => {
                    debug!("root cutoff at ({}, {})", pos.row, pos.col);
                    (pos, SearchType::RootCutoff)
                }
                (None, None) => {
                    let pos = board.empty_cells().next().ok_or(GameError::BoardFull)?;
                    warn!(
                        "search returned no move for {}, playing first empty cell ({}, {})",
                        mover.name(),
                        pos.row,
                        pos.col
                    );
                    (pos, SearchType::Fallback)
                }
            };
            MoveResult {
                pos,
                score: Some(best.score),
                search_type,
                nodes: stats.nodes,
                time_ms: elapsed_ms(start),
            }
        };

        board.place(result.pos, mover)?;
        info!(
            "{} plays ({}, {}) [{:?}, {}ms]",
            mover.name(),
            result.pos.row,
            result.pos.col,
            result.search_type,
            result.time_ms
        );
        Ok(result)
    }

    /// First empty cell (row-major) where `mover` would complete five.
    pub fn find_immediate_win(&self, board: &Board, mover: Player) -> Option<Pos> {
        board.empty_cells().find(|&pos| {
            let mut probe = board.clone();
            probe.put(pos, mover);
            self.detector.winner(&probe) == Some(mover)
        })
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
