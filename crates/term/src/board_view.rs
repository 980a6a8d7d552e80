//! BoardView: maps a `BoardSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::BoardSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

// Amber grid, black snake on a white board.
const GRID_COLOR: Rgb = Rgb::new(0xFA, 0xBC, 0x44);
const INK: Rgb = Rgb::new(0, 0, 0);
const PAPER: Rgb = Rgb::new(255, 255, 255);

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

/// Whether a board cell renders filled.
///
/// A cell is filled when the engine marks it occupied, or when it carries
/// the food — except that food reported at the origin with the origin
/// otherwise unoccupied means "no food placed yet" and renders empty.
/// The origin is the engine's sentinel coordinate; this asymmetry is part
/// of its contract.
pub fn cell_is_filled(snap: &BoardSnapshot, row: u16, col: u16) -> bool {
    if snap.is_occupied(row, col) {
        return true;
    }
    (row, col) == snap.meat && (row > 0 || col > 0)
}

/// A lightweight terminal renderer for the snake board.
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// Draw order is fixed: grid overlay, then board cells, then the score
    /// text. Callers can reuse the framebuffer across frames.
    pub fn render_into(&self, snap: &BoardSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let board_px_w = snap.width * self.cell_w;
        let board_px_h = snap.height * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_grid(fb, snap.width, snap.height, start_x, start_y);
        self.draw_cells(fb, snap, start_x, start_y);
        self.draw_score(fb, snap.score, start_x, start_y, frame_h);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Terminal position of a board cell's top-left character.
    ///
    /// Exposed so tests can address cells without duplicating layout math.
    pub fn cell_origin(&self, start_x: u16, start_y: u16, row: u16, col: u16) -> (u16, u16) {
        (
            start_x + 1 + col * self.cell_w,
            start_y + 1 + row * self.cell_h,
        )
    }

    /// The grid overlay: border plus lattice, a pure function of the board
    /// dimensions.
    fn draw_grid(&self, fb: &mut FrameBuffer, width: u16, height: u16, x: u16, y: u16) {
        let grid = CellStyle::new(GRID_COLOR, PAPER);

        let board_px_w = width * self.cell_w;
        let board_px_h = height * self.cell_h;
        fb.fill_rect(x + 1, y + 1, board_px_w, board_px_h, ' ', grid);
        for row in 0..height {
            for col in 0..width {
                let (px, py) = self.cell_origin(x, y, row, col);
                fb.put_char(px, py, '·', grid);
            }
        }

        self.draw_border(fb, x, y, board_px_w + 2, board_px_h + 2, grid);
    }

    /// The occupancy projection: only filled cells are painted, leaving the
    /// lattice visible underneath everything else.
    fn draw_cells(&self, fb: &mut FrameBuffer, snap: &BoardSnapshot, x: u16, y: u16) {
        let ink = CellStyle::new(INK, PAPER);
        for row in 0..snap.height {
            for col in 0..snap.width {
                if !cell_is_filled(snap, row, col) {
                    continue;
                }
                let (px, py) = self.cell_origin(x, y, row, col);
                fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', ink);
            }
        }
    }

    fn draw_score(&self, fb: &mut FrameBuffer, score: u32, x: u16, y: u16, frame_h: u16) {
        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        let line = y.saturating_add(frame_h);
        fb.put_str(x, line, "SCORE", label);
        fb.put_u32(x + 6, line, score, value);

        fb.put_str(
            x,
            line.saturating_add(1),
            "arrows/wasd move · r restart · q quit",
            value,
        );
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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
}
