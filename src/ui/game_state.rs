//! Game state management for the GUI
//!
//! Wraps a [`Game`] and runs engine moves on a worker thread so the window
//! keeps repainting while the search runs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use log::error;

use crate::engine::{MoveResult, MoveSelector};
use crate::error::Result;
use crate::game::{Game, GameMode, MoveOutcome, Outcome, Phase};
use crate::rules::AnchoredWinDetector;
use crate::search::Searcher;
use crate::{Board, Pos};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Result<MoveResult>>,
        start_time: Instant,
        /// Raised to make the worker give up
        stop: Arc<AtomicBool>,
    },
}

/// Main GUI state
pub struct GameState {
    pub game: Game,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
        }
    }

    /// Start a fresh game in the current mode
    pub fn new_game(&mut self) {
        self.cancel_ai();
        self.last_ai_result = None;
        self.message = None;
        if let Err(e) = self.game.start() {
            self.message = Some(e.to_string());
        }
    }

    /// Switch mode; the board is cleared until New Game is pressed
    pub fn set_mode(&mut self, mode: GameMode) {
        self.cancel_ai();
        self.game.set_mode(mode);
        self.message = Some("Press New Game to start".to_string());
    }

    pub fn abort(&mut self) {
        self.cancel_ai();
        match self.game.abort() {
            Ok(outcome) => self.message = Some(outcome_text(outcome)),
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Stop a running worker and forget its move.
    pub fn cancel_ai(&mut self) {
        if let AiState::Thinking { stop, .. } = &self.ai_state {
            stop.store(true, Ordering::Relaxed);
        }
        self.ai_state = AiState::Idle;
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place a piece for a human player
    pub fn try_place(&mut self, pos: Pos) {
        if self.is_ai_thinking() {
            self.message = Some("AI is thinking".to_string());
            return;
        }
        match self.game.play_human(pos) {
            Ok(played) => self.after_move(played),
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn after_move(&mut self, played: MoveOutcome) {
        self.message = played.outcome.map(outcome_text);
    }

    /// Start AI thinking if it is the engine's turn
    pub fn start_ai_thinking(&mut self) {
        if !self.game.is_ai_turn() || self.is_ai_thinking() {
            return;
        }
        let Phase::ToMove(player) = self.game.phase() else {
            return;
        };

        let mut board: Board = self.game.board().clone();
        let config = self.game.config();
        let (tx, rx) = channel();
        let stop = Arc::new(AtomicBool::new(false));
        let searcher = Searcher::new().with_stop_flag(Arc::clone(&stop));

        thread::spawn(move || {
            let mut selector = MoveSelector::with_parts(searcher, AnchoredWinDetector);
            let result = selector.select_move_with_stats(&mut board, player, config);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
            stop,
        };
    }

    /// Check if AI has finished thinking and play its move
    pub fn check_ai_result(&mut self) {
        let received = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    error!("AI worker exited without a move");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };
        self.ai_state = AiState::Idle;

        let committed = received.and_then(|result| {
            let played = self.game.commit_move(result.pos)?;
            self.last_ai_result = Some(result);
            Ok(played)
        });
        match committed {
            Ok(played) => self.after_move(played),
            Err(e) => {
                error!("AI move rejected: {e}");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}

pub fn outcome_text(outcome: Outcome) -> String {
    match outcome {
        Outcome::Win(player) => format!("{} wins!", player.name()),
        Outcome::Draw => "A tie!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SearchConfig;
    use crate::Player;

    fn wait_for_ai(state: &mut GameState) {
        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_ai_thinking() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
            state.check_ai_result();
        }
    }

    #[test]
    fn test_ai_reply_in_background() {
        let game = Game::new(GameMode::HumanVsAi, SearchConfig::new(1).unwrap());
        let mut state = GameState::new(game);
        state.new_game();

        state.try_place(Pos::new(7, 7));
        assert!(state.game.is_ai_turn());
        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        wait_for_ai(&mut state);

        assert!(!state.is_ai_thinking());
        assert_eq!(state.game.step(), 2);
        assert_eq!(state.game.phase(), Phase::ToMove(Player::Black));
        assert!(state.last_ai_result.is_some());
    }

    #[test]
    fn test_new_game_stops_the_worker() {
        let game = Game::new(GameMode::HumanVsAi, SearchConfig::new(3).unwrap());
        let mut state = GameState::new(game);
        state.new_game();
        state.try_place(Pos::new(7, 7));
        state.start_ai_thinking();

        let stop = match &state.ai_state {
            AiState::Thinking { stop, .. } => Arc::clone(stop),
            AiState::Idle => panic!("AI should be thinking"),
        };
        assert!(!stop.load(Ordering::Relaxed));

        state.new_game();
        assert!(stop.load(Ordering::Relaxed));
        assert!(!state.is_ai_thinking());
        assert_eq!(state.game.step(), 0);
    }

    #[test]
    fn test_messages_for_rejected_moves() {
        let game = Game::new(GameMode::HumanVsHuman, SearchConfig::default());
        let mut state = GameState::new(game);
        state.try_place(Pos::new(0, 0));
        assert_eq!(state.message.as_deref(), Some("the game has not started"));

        state.new_game();
        state.try_place(Pos::new(0, 0));
        state.try_place(Pos::new(0, 0));
        assert_eq!(
            state.message.as_deref(),
            Some("position (0, 0) is already occupied")
        );
    }

    #[test]
    fn test_abort_message() {
        let game = Game::new(GameMode::HumanVsHuman, SearchConfig::default());
        let mut state = GameState::new(game);
        state.new_game();
        state.abort();
        assert_eq!(state.message.as_deref(), Some("White wins!"));
    }
}
