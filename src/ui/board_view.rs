//! Board rendering for the Gomoku GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Pos, Stone};

use super::theme::*;

/// Everything the board needs to draw one frame
pub struct BoardFrame<'a> {
    pub board: &'a Board,
    pub current_turn: Stone,
    pub last_move: Option<Pos>,
    pub winning_line: Option<&'a [Pos]>,
    /// Whether clicks should place stones
    pub accepts_input: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Side length of the board last drawn
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            size: crate::BOARD_SIZE,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(&mut self, ui: &mut egui::Ui, frame: &BoardFrame<'_>) -> Option<Pos> {
        let available_size = ui.available_size();
        self.size = frame.board.size();

        // Calculate board size to fit available space
        let side = (available_size.x.min(available_size.y) - 20.0).max(2.0 * BOARD_MARGIN + 40.0);
        self.cell_size = (side - 2.0 * BOARD_MARGIN) / (self.size as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(side, side), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, frame.board);

        if let Some(pos) = frame.last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = frame.winning_line {
            self.draw_winning_line(&painter, line);
        }

        if !frame.accepts_input {
            return None;
        }

        // Hover preview and click on empty cells only
        let board_pos = response
            .hover_pos()
            .and_then(|p| self.screen_to_board(p))
            .filter(|&p| frame.board.is_empty(p))?;

        self.draw_hover_preview(&painter, board_pos, frame.current_turn);
        response.clicked().then_some(board_pos)
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let length = (self.size as f32 - 1.0) * self.cell_size;

        for i in 0..self.size {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + length);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + length, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (x, y) in star_points(self.size) {
            let center = self.board_to_screen(Pos::new(x, y));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Column letters along the top, row numbers down the left, both from the origin cell
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..self.size {
            let along = BOARD_MARGIN + i as f32 * self.cell_size;

            let letter = char::from(b'A' + i as u8);
            let pos = Pos2::new(self.board_rect.min.x + along, self.board_rect.min.y + 14.0);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);

            let pos = Pos2::new(self.board_rect.min.x + 14.0, self.board_rect.min.y + along);
            painter.text(pos, egui::Align2::CENTER_CENTER, (i + 1).to_string(), font.clone(), GRID_LINE);
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for color in [Stone::Black, Stone::White] {
            for pos in board.positions(color) {
                self.draw_stone(painter, pos, color);
            }
        }
    }

    /// Draw a single stone with a drop shadow
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);

                // Highlight
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Stone::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Stroke through the winning stones and ring each one
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone) {
        if let Some(color) = hover_preview(turn) {
            let radius = self.cell_size * STONE_RADIUS_RATIO;
            painter.circle_filled(self.board_to_screen(pos), radius, color);
        }
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = ((relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size).floor() as i32;
        let y = ((relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size).floor() as i32;

        let size = self.size as i32;
        if (0..size).contains(&x) && (0..size).contains(&y) {
            Some(Pos::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + f32::from(pos.x) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + f32::from(pos.y) * self.cell_size;
        Pos2::new(x, y)
    }
}
