//! Game flow around the engine
//!
//! A game moves through `NotStarted -> ToMove(Black) <-> ToMove(White) ->
//! Finished`. Every placement, human or automated, goes through the same
//! bookkeeping: step counter, move history, then a win check anchored at the
//! new piece and a draw check when the board is full.

use log::info;

use crate::board::{Board, Player, Pos};
use crate::engine::{MoveResult, MoveSelector, SearchConfig};
use crate::error::{GameError, Result};
use crate::rules::{check_winner, find_winning_line};

/// Who controls each side. Humans play Black against the AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum GameMode {
    #[default]
    HumanVsHuman,
    HumanVsAi,
    AiVsAi,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsAi => "Human vs AI",
            GameMode::AiVsAi => "AI vs AI",
        }
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    ToMove(Player),
    Finished(Outcome),
}

/// Result of one placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub pos: Pos,
    pub player: Player,
    /// 1-based move number
    pub step: u32,
    /// Set when this move ended the game
    pub outcome: Option<Outcome>,
}

/// A single game: live board, mode, search depth and turn state.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    mode: GameMode,
    config: SearchConfig,
    phase: Phase,
    step: u32,
    history: Vec<(Pos, Player)>,
    selector: MoveSelector,
}

impl Game {
    /// AI vs AI games open on the centre point
    pub const OPENING_MOVE: Pos = Pos::new(7, 7);

    pub fn new(mode: GameMode, config: SearchConfig) -> Self {
        Self {
            board: Board::new(),
            mode,
            config,
            phase: Phase::NotStarted,
            step: 0,
            history: Vec::new(),
            selector: MoveSelector::new(),
        }
    }

    /// Clear the board and give Black the move.
    pub fn start(&mut self) -> Result<()> {
        self.reset();
        self.phase = Phase::ToMove(Player::Black);
        info!("new game: {}, depth {}", self.mode.label(), self.config.depth());
        if self.mode == GameMode::AiVsAi {
            self.commit_move(Self::OPENING_MOVE)?;
        }
        Ok(())
    }

    /// Back to `NotStarted` with an empty board.
    pub fn reset(&mut self) {
        self.board.clear();
        self.phase = Phase::NotStarted;
        self.step = 0;
        self.history.clear();
    }

    /// Place a piece for a human player.
    pub fn play_human(&mut self, pos: Pos) -> Result<MoveOutcome> {
        self.side_to_move()?;
        if self.is_ai_turn() {
            return Err(GameError::NotYourTurn);
        }
        self.commit_move(pos)
    }

    /// Let the engine choose and play a move for the side to move.
    pub fn play_ai(&mut self) -> Result<(MoveOutcome, MoveResult)> {
        let player = self.side_to_move()?;
        let result = self
            .selector
            .select_move_with_stats(&mut self.board, player, self.config)?;
        Ok((self.record(result.pos, player), result))
    }

    /// Play engine moves until the game ends.
    pub fn play_out(&mut self) -> Result<Outcome> {
        loop {
            if let Phase::Finished(outcome) = self.phase {
                return Ok(outcome);
            }
            self.play_ai()?;
        }
    }

    /// Place a piece for the side to move, whoever chose the square.
    pub fn commit_move(&mut self, pos: Pos) -> Result<MoveOutcome> {
        let player = self.side_to_move()?;
        self.board.place(pos, player)?;
        Ok(self.record(pos, player))
    }

    /// The side to move forfeits.
    pub fn abort(&mut self) -> Result<Outcome> {
        let player = self.side_to_move()?;
        let outcome = Outcome::Win(player.opponent());
        self.phase = Phase::Finished(outcome);
        info!("{} aborts, {} wins", player.name(), player.opponent().name());
        Ok(outcome)
    }

    fn record(&mut self, pos: Pos, player: Player) -> MoveOutcome {
        self.step += 1;
        self.history.push((pos, player));

        let outcome = if check_winner(&self.board) == Some(player) {
            Some(Outcome::Win(player))
        } else if !self.board.has_empty_cell() {
            Some(Outcome::Draw)
        } else {
            None
        };

        self.phase = match outcome {
            Some(outcome) => {
                info!("game over after {} moves: {:?}", self.step, outcome);
                Phase::Finished(outcome)
            }
            None => Phase::ToMove(player.opponent()),
        };

        MoveOutcome {
            pos,
            player,
            step: self.step,
            outcome,
        }
    }

    fn side_to_move(&self) -> Result<Player> {
        match self.phase {
            Phase::NotStarted => Err(GameError::NotStarted),
            Phase::Finished(_) => Err(GameError::GameOver),
            Phase::ToMove(player) => Ok(player),
        }
    }

    /// True when the side to move is engine-controlled.
    pub fn is_ai_turn(&self) -> bool {
        match (self.mode, self.phase) {
            (GameMode::AiVsAi, Phase::ToMove(_)) => true,
            (GameMode::HumanVsAi, Phase::ToMove(player)) => player == Player::White,
            _ => false,
        }
    }

    /// Cells of the winning five, for highlighting
    pub fn winning_line(&self) -> Option<[Pos; 5]> {
        match self.phase {
            Phase::Finished(Outcome::Win(_)) => find_winning_line(&self.board).map(|(_, line)| line),
            _ => None,
        }
    }

    /// Change the mode; the current game is dropped.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    pub fn set_depth(&mut self, depth: i32) -> Result<()> {
        self.config = SearchConfig::new(depth)?;
        Ok(())
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Moves played so far, oldest first
    pub fn history(&self) -> &[(Pos, Player)] {
        &self.history
    }

    /// Move number of the piece at `pos`, if one was played there
    pub fn step_at(&self, pos: Pos) -> Option<u32> {
        self.history
            .iter()
            .position(|&(p, _)| p == pos)
            .map(|i| i as u32 + 1)
    }
}
