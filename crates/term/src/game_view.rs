//! GameView: maps the game state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The grid's row 0 is the bottom of the playfield, so grid rows are
//! flipped when mapped onto screen lines. Each grid cell is several
//! terminal columns wide so tile values up to five digits stay readable.

use tetris2048_core::GameState;
use tetris2048_types::{GRID_HEIGHT, GRID_WIDTH};

use crate::fb::{FrameBuffer, Glyph, Rgb, Style};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the playfield, the falling piece and the side panel.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 5 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render the current game state into a framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let board_w = (GRID_WIDTH as u16) * self.cell_w;
        let board_h = GRID_HEIGHT as u16;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let backdrop = Style {
            fg: Rgb::new(80, 80, 90),
            bg: BOARD_BG,
            bold: false,
            dim: false,
        };
        fb.fill_rect(start_x + 1, start_y + 1, board_w, board_h, ' ', backdrop);

        self.draw_boundaries(&mut fb, start_x, start_y, frame_w, frame_h);

        // Locked tiles.
        for tile in state.engine().grid().tiles() {
            self.draw_tile(&mut fb, start_x, start_y, tile.row, tile.col, tile.value);
        }

        // Empty-cell dots.
        for row in 0..GRID_HEIGHT as i8 {
            for col in 0..GRID_WIDTH as i8 {
                if !state.engine().grid().is_occupied(row, col) {
                    self.draw_empty_cell(&mut fb, start_x, start_y, row, col);
                }
            }
        }

        // Active piece; minos above the ceiling are simply not drawn.
        if let Some(piece) = state.active() {
            for tile in piece.tiles() {
                if tile.row < GRID_HEIGHT as i8 {
                    self.draw_tile(&mut fb, start_x, start_y, tile.row, tile.col, tile.value);
                }
            }
        }

        self.draw_side_panel(&mut fb, state, viewport, start_x, start_y, frame_w);

        if state.paused() {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        } else if state.game_over() {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }

        fb
    }

    /// Screen position of a grid cell's left edge. Grid rows grow upward,
    /// screen lines grow downward.
    fn cell_origin(&self, start_x: u16, start_y: u16, row: i8, col: i8) -> (u16, u16) {
        let x = start_x + 1 + (col as u16) * self.cell_w;
        let y = start_y + 1 + (GRID_HEIGHT as u16 - 1 - row as u16);
        (x, y)
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: i8, col: i8, value: u32) {
        let (x, y) = self.cell_origin(start_x, start_y, row, col);
        let style = tile_style(value);

        let text = format!("{:^width$}", value, width = self.cell_w as usize);
        let mut cx = x;
        for ch in text.chars().take(self.cell_w as usize) {
            fb.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: i8, col: i8) {
        let (x, y) = self.cell_origin(start_x, start_y, row, col);
        let style = Style {
            fg: Rgb::new(70, 75, 95),
            bg: BOARD_BG,
            bold: false,
            dim: true,
        };
        fb.put_char(x + self.cell_w / 2, y, '·', style);
    }

    /// Box-drawing border around the playfield.
    fn draw_boundaries(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = Style {
            fg: Rgb::new(90, 140, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }

        let label = Style {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = Style {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let hint = Style { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y += 1;
        fb.put_str(panel_x, y, &format!("{}", state.score()), value);
        y += 2;

        fb.put_str(panel_x, y, "LEVEL", label);
        y += 1;
        fb.put_str(panel_x, y, &format!("{}", state.level()), value);
        y += 2;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        fb.put_str(panel_x, y, &format!("{:?}", state.next_kind()), value);
        y += 2;

        for line in [
            "←/→ move",
            "↑ rotate",
            "↓ soft drop",
            "space drop",
            "p pause",
            "r restart",
            "q quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = Style {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Room reserved to the right of the board for the side panel.
const PANEL_W: u16 = 14;

const BOARD_BG: Rgb = Rgb::new(28, 30, 40);

/// 2048-style tile coloring: warm tones escalating with the value.
fn tile_style(value: u32) -> Style {
    let dark_text = Rgb::new(60, 50, 40);
    let light_text = Rgb::new(250, 245, 235);

    let (bg, fg) = match value {
        2 => (Rgb::new(238, 228, 218), dark_text),
        4 => (Rgb::new(237, 224, 200), dark_text),
        8 => (Rgb::new(242, 177, 121), light_text),
        16 => (Rgb::new(245, 149, 99), light_text),
        32 => (Rgb::new(246, 124, 95), light_text),
        64 => (Rgb::new(246, 94, 59), light_text),
        128 => (Rgb::new(237, 207, 114), dark_text),
        256 => (Rgb::new(237, 204, 97), dark_text),
        512 => (Rgb::new(237, 200, 80), dark_text),
        1024 => (Rgb::new(237, 197, 63), dark_text),
        2048 => (Rgb::new(237, 194, 46), dark_text),
        _ => (Rgb::new(60, 58, 50), light_text),
    };

    Style {
        fg,
        bg,
        bold: value >= 128,
        dim: false,
    }
}
