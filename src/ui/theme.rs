//! Theme constants for the Five in a Row GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);
pub const STAR_POINT: Color32 = Color32::from_rgb(50, 35, 20);

// Piece colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 100)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel colors - dark theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);

// Sizes
pub const BOARD_MARGIN: f32 = 40.0;
pub const STONE_RADIUS_RATIO: f32 = 0.45;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

// Star point positions (0-indexed)
pub const STAR_POINTS: [(u8, u8); 5] = [(3, 3), (3, 11), (7, 7), (11, 3), (11, 11)];
