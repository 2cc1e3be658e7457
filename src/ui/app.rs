//! Main application for the Five in a Row GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;
use crate::game::{Game, GameMode, Outcome, Phase};

/// Every empty cell is searched, so each extra ply multiplies the work by about 200
const MAX_UI_DEPTH: i32 = 4;
/// Depths above this get a slowness warning
const SLOW_DEPTH: i32 = 3;

/// Main application
pub struct FiveInARowApp {
    state: GameState,
    board_view: BoardView,
    /// Depth shown on the slider; applied to the game when changed
    depth: i32,
}

impl FiveInARowApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, game: Game) -> Self {
        let depth = game.config().depth() as i32;
        Self {
            state: GameState::new(game),
            board_view: BoardView::default(),
            depth,
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game").clicked() {
                        self.state.new_game();
                        ui.close_menu();
                    }
                    if ui.button("Abort").clicked() {
                        self.state.abort();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Mode", |ui| {
                    for mode in [GameMode::HumanVsHuman, GameMode::HumanVsAi, GameMode::AiVsAi] {
                        if ui
                            .radio(self.state.game.mode() == mode, mode.label())
                            .clicked()
                        {
                            self.state.set_mode(mode);
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("Help", |ui| {
                    ui.label("First select a mode, then start a New Game.");
                    ui.label("The AI uses minimax with alpha-beta pruning.");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(self.state.game.mode().label());
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("FIVE IN A ROW").size(20.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_settings_card(ui);
                ui.add_space(10.0);
                self.render_ai_card(ui);

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, &msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let (headline, status, color) = match self.state.game.phase() {
                Phase::NotStarted => ("Not started".to_string(), "Press New Game", TEXT_MUTED),
                Phase::ToMove(player) => {
                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", STATUS_BUSY)
                    } else if self.state.game.is_ai_turn() {
                        ("AI to move", STATUS_BUSY)
                    } else {
                        ("Your turn", STATUS_OK)
                    };
                    (format!("{} to move", player.name()), status.0, status.1)
                }
                Phase::Finished(Outcome::Win(player)) => {
                    (format!("{} wins", player.name()), "Game over", WIN_HIGHLIGHT)
                }
                Phase::Finished(Outcome::Draw) => ("Draw".to_string(), "Game over", WIN_HIGHLIGHT),
            };

            ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
            ui.label(RichText::new(status).size(12.0).color(color));
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.game.step()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_settings_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SEARCH DEPTH").size(10.0).color(TEXT_MUTED));
            let slider = ui.add(egui::Slider::new(&mut self.depth, 1..=MAX_UI_DEPTH));
            if slider.changed() {
                if let Err(e) = self.state.game.set_depth(self.depth) {
                    self.state.message = Some(e.to_string());
                }
            }
            if self.depth > SLOW_DEPTH {
                ui.label(
                    RichText::new("Very slow: a move can take minutes")
                        .size(10.0)
                        .color(STATUS_BUSY),
                );
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("New Game").clicked() {
                    self.state.new_game();
                }
                if ui.button("Abort").clicked() {
                    self.state.abort();
                }
            });
        });
    }

    fn render_ai_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                ui.label(
                    RichText::new(format!("{:.2}s", elapsed.as_secs_f32()))
                        .size(22.0)
                        .color(STATUS_BUSY),
                );
            }

            match &self.state.last_ai_result {
                Some(result) => {
                    ui.label(
                        RichText::new(format!("{:?}", result.search_type))
                            .size(11.0)
                            .strong()
                            .color(STATUS_OK),
                    );
                    if let Some(score) = result.score {
                        ui.label(RichText::new(format!("Score: {score:.6}")).size(10.0).color(TEXT_SECONDARY));
                    }
                    ui.label(
                        RichText::new(format!("{} nodes, {}ms", result.nodes, result.time_ms))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.label(
                        RichText::new(format!("→ ({}, {})", result.pos.row, result.pos.col))
                            .size(12.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                }
                None => {
                    ui.label(RichText::new("No AI move yet").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(12.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let accept_input = matches!(self.state.game.phase(), Phase::ToMove(_))
                && !self.state.game.is_ai_turn();

            if let Some(pos) = self.board_view.show(ui, &self.state.game, accept_input) {
                self.state.try_place(pos);
            }
        });
    }

    /// Keyboard shortcuts: N new game, A abort
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, abort) =
            ctx.input(|i| (i.key_pressed(egui::Key::N), i.key_pressed(egui::Key::A)));
        if new_game {
            self.state.new_game();
        }
        if abort {
            self.state.abort();
        }
    }
}

impl eframe::App for FiveInARowApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        if self.state.game.is_ai_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SearchConfig;

    #[test]
    fn test_depth_slider_range() {
        let default = SearchConfig::DEFAULT_DEPTH as i32;
        assert!((1..=MAX_UI_DEPTH).contains(&default));
        assert!(default <= SLOW_DEPTH);
        assert!(MAX_UI_DEPTH <= 4);
    }
}
