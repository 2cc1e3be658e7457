//! Board rendering for the GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::game::Game;
use crate::{Cell, Player, Pos, BOARD_SIZE};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 36.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(&mut self, ui: &mut egui::Ui, game: &Game, accept_input: bool) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, game);

        if let Some(pos) = game.board().last_move() {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = game.winning_line() {
            self.draw_winning_line(&painter, &line);
        }

        // Hover preview and click
        if !accept_input {
            return None;
        }
        let pointer_pos = response.hover_pos()?;
        let board_pos = self.screen_to_board(pointer_pos)?;
        let is_valid = game.board().get(board_pos).is_ok_and(Cell::is_empty);

        let color = if is_valid {
            hover_valid()
        } else {
            hover_invalid()
        };
        painter.circle_filled(
            self.board_to_screen(board_pos),
            self.cell_size * STONE_RADIUS_RATIO,
            color,
        );

        // Occupied cells are still reported so the player gets the rejection message
        response.clicked().then_some(board_pos)
    }

    /// Draw the 15x15 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Row and column indices, 0-14 as the engine numbers them
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..BOARD_SIZE {
            let along = BOARD_MARGIN + i as f32 * self.cell_size;
            let label = i.to_string();

            let top = Pos2::new(self.board_rect.min.x + along, self.board_rect.min.y + 14.0);
            painter.text(top, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);

            let left = Pos2::new(self.board_rect.min.x + 14.0, self.board_rect.min.y + along);
            painter.text(left, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
        }
    }

    /// Draw all placed pieces with their move numbers
    fn draw_stones(&self, painter: &Painter, game: &Game) {
        for (step, &(pos, player)) in game.history().iter().enumerate() {
            self.draw_stone(painter, pos, player, step as u32 + 1);
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, player: Player, step: u32) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        // Shadow
        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 50),
        );

        let label_color = match player {
            Player::Black => {
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
                WHITE_STONE
            }
            Player::White => {
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
                BLACK_STONE
            }
        };

        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            step.to_string(),
            egui::FontId::proportional(radius * 0.8),
            label_color,
        );
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let offset = self.cell_size * STONE_RADIUS_RATIO * 0.7;
        painter.circle_filled(
            center + Vec2::new(offset, -offset),
            LAST_MOVE_MARKER_RADIUS,
            LAST_MOVE_MARKER,
        );
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 5]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment(
                [self.board_to_screen(pair[0]), self.board_to_screen(pair[1])],
                stroke,
            );
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for pos in line {
            painter.circle_stroke(self.board_to_screen(*pos), radius, stroke);
        }
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        Pos::try_new(y.floor() as i32, x.floor() as i32).ok()
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
