//! GameView: maps a [`BoardSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::BoardSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{ColorTag, BOARD_COLS, BOARD_ROWS};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the board snapshot.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered well in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_COLS as u16) * self.cell_w + 2,
            (BOARD_ROWS as u16) * self.cell_h + 2,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &BoardSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);
        self.draw_title(fb, start_x, start_y, frame_w);

        for (y, row) in snap.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (ch, style) = match cell {
                    Some(tag) => ('█', CellStyle::new(tag_color(*tag), WELL_BG).bold()),
                    None => ('·', CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim()),
                };
                let px = start_x + 1 + (x as u16) * self.cell_w;
                let py = start_y + 1 + (y as u16) * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.game_over {
            self.draw_game_over(fb, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let right = x + w - 1;
        let bottom = y + h - 1;

        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, bottom, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(right, y + dy, '│', style);
        }
    }

    fn draw_title(&self, fb: &mut FrameBuffer, x: u16, y: u16, frame_w: u16) {
        const TITLE: &str = " TETRIS ";
        let text_w = TITLE.chars().count() as u16;
        if frame_w < text_w + 2 {
            return;
        }
        let tx = x + (frame_w - text_w) / 2;
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(tx, y, TITLE, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &BoardSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "LINES", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.lines_removed, value);
        y += 2;

        fb.put_str(panel_x, y, "PIECES", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.pieces_placed, value);
        y += 2;

        fb.put_str(panel_x, y, "PIECE", label);
        y += 1;
        if let Some(kind) = snap.active {
            let style = CellStyle::new(tag_color(kind.color()), PANEL_BG).bold();
            fb.put_str(panel_x, y, kind.as_str(), style);
        } else {
            fb.put_str(panel_x, y, "-", value);
        }
        y += 2;

        fb.put_str(panel_x, y, "KEYS", label);
        for line in ["←/a  left", "→/d  right", "↓/s  down", "↑/w  rotate", "q    quit"] {
            y += 1;
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, x: u16, y: u16, frame_w: u16, frame_h: u16) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let mid_y = y + frame_h / 2;
        for (i, text) in ["GAME OVER", "r: restart"].iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let tx = x + frame_w.saturating_sub(text_w) / 2;
            fb.put_str(tx, mid_y + i as u16, text, style);
        }
    }
}

/// Paint colour for a cell's colour tag.
pub fn tag_color(tag: ColorTag) -> Rgb {
    match tag {
        ColorTag::IBlock => Rgb::new(80, 220, 220),
        ColorTag::OBlock => Rgb::new(240, 220, 80),
        ColorTag::TBlock => Rgb::new(200, 120, 220),
        ColorTag::SBlock => Rgb::new(100, 220, 120),
        ColorTag::ZBlock => Rgb::new(220, 80, 80),
        ColorTag::JBlock => Rgb::new(80, 120, 220),
        ColorTag::LBlock => Rgb::new(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_accounts_for_cell_aspect() {
        assert_eq!(GameView::default().frame_size(), (22, 22));
        assert_eq!(GameView::new(1, 1).frame_size(), (12, 22));
    }

    #[test]
    fn empty_board_renders_grid_dots() {
        let snap = BoardSnapshot::default();
        let fb = GameView::default().render(&snap, Viewport::new(22, 22));
        assert_eq!(fb.get(1, 1).unwrap().ch, '·');
        assert_eq!(fb.get(20, 20).unwrap().ch, '·');
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = BoardSnapshot::default();
        let fb = GameView::default().render(&snap, Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }
}
