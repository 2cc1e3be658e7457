//! GUI module for the Five in a Row game
//!
//! A thin egui/eframe front-end over [`crate::game::Game`].

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::FiveInARowApp;
pub use game_state::{outcome_text, AiState, GameState};
