//! Run scores for Five in a Row evaluation
//!
//! A run is a maximal stretch of one owner's pieces along a line. Its value
//! depends on its length, on how many of its ends are closed, and on whether
//! its owner is the side to move.

/// Run scores used by the evaluator
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - already won
    pub const FIVE: i64 = 100_000_000;
    /// Longer than five; the game should have ended before this is seen
    pub const OVERLINE: i64 = 2 * Self::FIVE;

    /// Four with the owner to move: the next move wins
    pub const FOUR_TO_MOVE: i64 = 1_000_000;
    /// Open four, opponent to move: two ends cannot both be blocked
    pub const OPEN_FOUR: i64 = Self::FOUR_TO_MOVE / 4;
    /// Closed four, opponent to move: blocked next move
    pub const CLOSED_FOUR: i64 = 200;

    /// Open three with the owner to move: becomes an open four
    pub const OPEN_THREE_TO_MOVE: i64 = 50_000;
    pub const OPEN_THREE: i64 = 200;
    pub const CLOSED_THREE_TO_MOVE: i64 = 10;
    pub const CLOSED_THREE: i64 = 5;

    pub const OPEN_TWO_TO_MOVE: i64 = 7;
    pub const OPEN_TWO: i64 = 5;
    pub const CLOSED_TWO: i64 = 3;

    pub const SINGLE: i64 = 1;
}

/// Score of one run.
///
/// # Arguments
/// * `count` - Length of the run
/// * `blocks` - Closed ends (0, 1 or 2)
/// * `mover_turn` - Whether the run's owner is the side to move
///
/// A run closed on both ends and shorter than five can never win and is worth nothing.
#[must_use]
pub fn consecutive_score(count: u32, blocks: u32, mover_turn: bool) -> i64 {
    if blocks >= 2 && count < 5 {
        return 0;
    }
    match (count, blocks, mover_turn) {
        (0, _, _) => 0,
        (1, _, _) => PatternScore::SINGLE,
        (2, 0, true) => PatternScore::OPEN_TWO_TO_MOVE,
        (2, 0, false) => PatternScore::OPEN_TWO,
        (2, _, _) => PatternScore::CLOSED_TWO,
        (3, 0, true) => PatternScore::OPEN_THREE_TO_MOVE,
        (3, 0, false) => PatternScore::OPEN_THREE,
        (3, _, true) => PatternScore::CLOSED_THREE_TO_MOVE,
        (3, _, false) => PatternScore::CLOSED_THREE,
        (4, _, true) => PatternScore::FOUR_TO_MOVE,
        (4, 0, false) => PatternScore::OPEN_FOUR,
        (4, _, false) => PatternScore::CLOSED_FOUR,
        (5, _, _) => PatternScore::FIVE,
        _ => PatternScore::OVERLINE,
    }
}
