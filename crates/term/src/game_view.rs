//! GameView: maps a `core::GridSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GridSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Difficulty, GRID_SIZE};

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

/// A lightweight terminal renderer for the tile grid.
pub struct GameView {
    /// Tile cell width in terminal columns.
    cell_w: u16,
    /// Tile cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        // 4 columns per cell fits every reachable tile value (4 digits) and
        // matches the classic console rendering of the game.
        Self {
            cell_w: 4,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Framebuffer width of the bordered table.
    pub fn frame_width(&self) -> u16 {
        (GRID_SIZE as u16) * (self.cell_w + 1) + 1
    }

    /// Framebuffer height of the bordered table.
    pub fn frame_height(&self) -> u16 {
        (GRID_SIZE as u16) * (self.cell_h + 1) + 1
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully rewritten.
    pub fn render_into(&self, snap: &GridSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::default(),
        });

        let frame_w = self.frame_width();
        let frame_h = self.frame_height();

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        self.draw_lattice(fb, start_x, start_y);

        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                self.draw_tile(fb, start_x, start_y, r, c, snap.cells[r][c]);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        // Overlays.
        if snap.won {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "YOU WIN!");
        } else if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GridSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Draw the full table lattice: border plus the lines between cells.
    fn draw_lattice(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16) {
        let style = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let n = GRID_SIZE as u16;

        // Horizontal lines with junction characters at every column seam.
        for line in 0..=n {
            let y = start_y + line * (self.cell_h + 1);
            for seam in 0..=n {
                let x = start_x + seam * (self.cell_w + 1);
                let ch = match (line, seam) {
                    (0, 0) => '┌',
                    (0, s) if s == n => '┐',
                    (0, _) => '┬',
                    (l, 0) if l == n => '└',
                    (l, s) if l == n && s == n => '┘',
                    (l, _) if l == n => '┴',
                    (_, 0) => '├',
                    (_, s) if s == n => '┤',
                    _ => '┼',
                };
                fb.put_char(x, y, ch, style);
                if seam < n {
                    for dx in 1..=self.cell_w {
                        fb.put_char(x + dx, y, '─', style);
                    }
                }
            }
        }

        // Vertical lines between the horizontal ones.
        for line in 0..=n {
            let x = start_x + line * (self.cell_w + 1);
            for row in 0..n {
                let y = start_y + row * (self.cell_h + 1);
                for dy in 1..=self.cell_h {
                    fb.put_char(x, y + dy, '│', style);
                }
            }
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: usize,
        col: usize,
        value: u32,
    ) {
        let px = start_x + 1 + (col as u16) * (self.cell_w + 1);
        let py = start_y + 1 + (row as u16) * (self.cell_h + 1);
        let style = tile_style(value);

        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        if value != 0 {
            // Right-aligned in the cell, on the middle row.
            let digits = digit_count(value);
            let vx = px + self.cell_w.saturating_sub(digits);
            let vy = py + self.cell_h / 2;
            fb.put_u32(vx, vy, value, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GridSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 8 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "MODE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, mode_label(snap.difficulty), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TARGET", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.win_target, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.move_count, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.max_tile, value);
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
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

fn digit_count(value: u32) -> u16 {
    if value == 0 {
        1
    } else {
        value.ilog10() as u16 + 1
    }
}

fn mode_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "EASY",
        Difficulty::Medium => "MEDIUM",
        Difficulty::Hard => "HARD",
    }
}

/// Style for a tile cell, keyed by value (0 = empty).
fn tile_style(value: u32) -> CellStyle {
    let dark_text = Rgb::new(119, 110, 101);
    let light_text = Rgb::new(249, 246, 242);

    let (bg, fg) = match value {
        0 => (Rgb::new(42, 39, 52), Rgb::new(90, 90, 100)),
        2 => (Rgb::new(238, 228, 218), dark_text),
        4 => (Rgb::new(237, 224, 200), dark_text),
        8 => (Rgb::new(242, 177, 121), light_text),
        16 => (Rgb::new(245, 149, 99), light_text),
        32 => (Rgb::new(246, 124, 95), light_text),
        64 => (Rgb::new(246, 94, 59), light_text),
        128 => (Rgb::new(237, 207, 114), light_text),
        256 => (Rgb::new(237, 204, 97), light_text),
        512 => (Rgb::new(237, 200, 80), light_text),
        1024 => (Rgb::new(237, 197, 63), light_text),
        _ => (Rgb::new(237, 194, 46), light_text),
    };

    CellStyle {
        fg,
        bg,
        bold: value >= 128,
        dim: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_dimensions_follow_cell_geometry() {
        let view = GameView::default();
        // 4 cells of width 4 plus 5 lattice columns.
        assert_eq!(view.frame_width(), 21);
        // 4 cells of height 1 plus 5 lattice rows.
        assert_eq!(view.frame_height(), 9);

        let tall = GameView::new(6, 3);
        assert_eq!(tall.frame_width(), 29);
        assert_eq!(tall.frame_height(), 17);
    }

    #[test]
    fn digit_count_matches_decimal_width() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(2), 1);
        assert_eq!(digit_count(16), 2);
        assert_eq!(digit_count(128), 3);
        assert_eq!(digit_count(1024), 4);
    }

    #[test]
    fn tile_style_distinguishes_values() {
        assert_ne!(tile_style(2).bg, tile_style(4).bg);
        assert_ne!(tile_style(0).bg, tile_style(2).bg);
        // Values beyond the table share the top color.
        assert_eq!(tile_style(4096).bg, tile_style(2048).bg);
    }
}
