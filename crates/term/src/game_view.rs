//! PuzzleView: maps a `PuzzleSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! While a slide animates, the tile's source cell is drawn as empty and the
//! tile itself is drawn last at its interpolated position, so it visually
//! glides between the two cells even though the logical grid has not
//! committed yet.

use tui_fifteen_core::snapshot::PuzzleSnapshot;
use tui_fifteen_types::PlayArea;

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

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

/// Runner-owned status shown under the board.
///
/// The core never tracks play time; the runner resets this on scramble and
/// freezes it when the solved edge fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud {
    /// Milliseconds since the last scramble, if one happened
    pub elapsed_ms: Option<u32>,
}

/// A lightweight terminal renderer for the sliding puzzle.
pub struct PuzzleView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for PuzzleView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square for typical terminal glyphs.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

// Woodgrain palette.
const FRAME_BG: Rgb = Rgb::new(85, 57, 30);
const BOARD_BG: Rgb = Rgb::new(139, 69, 19);
const TILE_BG: Rgb = Rgb::new(222, 184, 135);
const EMPTY_BG: Rgb = Rgb::new(205, 170, 125);
const LABEL_FG: Rgb = Rgb::new(50, 25, 0);
const TEXT_FG: Rgb = Rgb::new(220, 220, 220);

impl PuzzleView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Top-left corner and outer size of the board frame for this viewport.
    fn layout(&self, n: u8, viewport: Viewport) -> (u16, u16, u16, u16) {
        let board_w = n as u16 * self.cell_w;
        let board_h = n as u16 * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        (start_x, start_y, frame_w, frame_h)
    }

    /// The board's playable rectangle, for gesture hit-testing.
    pub fn play_area(&self, n: u8, viewport: Viewport) -> PlayArea {
        let (start_x, start_y, frame_w, frame_h) = self.layout(n, viewport);
        PlayArea::new(
            start_x as i32 + 1,
            start_y as i32 + 1,
            frame_w as i32 - 2,
            frame_h as i32 - 2,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully repainted.
    pub fn render_into(
        &self,
        snap: &PuzzleSnapshot,
        hud: Hud,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (start_x, start_y, frame_w, frame_h) = self.layout(snap.n, viewport);

        // Frame around the board.
        let frame_style = CellStyle {
            fg: TEXT_FG,
            bg: FRAME_BG,
            bold: false,
        };
        fb.fill_rect(start_x, start_y, frame_w, frame_h, ' ', frame_style);

        // Tiles (the animating tile's source cell is drawn empty).
        let suppressed = snap.animation.map(|a| (a.src_row, a.src_col));
        for row in 0..snap.n {
            for col in 0..snap.n {
                let value = snap.tile_at(row, col);
                if Some((row, col)) == suppressed || value == 0 {
                    self.draw_cell_rect(fb, start_x, start_y, row, col, None);
                } else {
                    self.draw_cell_rect(fb, start_x, start_y, row, col, Some(value));
                }
            }
        }

        // Animating tile, on top of everything, at its interpolated position.
        if let Some(anim) = snap.animation {
            let (sx, sy) = self.cell_origin(start_x, start_y, anim.src_row, anim.src_col);
            let (dx, dy) = self.cell_origin(start_x, start_y, anim.dest_row, anim.dest_col);
            let px = lerp_i32(sx as i32, dx as i32, anim.progress);
            let py = lerp_i32(sy as i32, dy as i32, anim.progress);
            self.draw_tile_at(fb, px as u16, py as u16, anim.tile);
        }

        self.draw_hud(fb, snap, hud, start_x, start_y, frame_w, frame_h);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &PuzzleSnapshot, hud: Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn cell_origin(&self, start_x: u16, start_y: u16, row: u8, col: u8) -> (u16, u16) {
        (
            start_x + 1 + col as u16 * self.cell_w,
            start_y + 1 + row as u16 * self.cell_h,
        )
    }

    fn draw_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u8,
        col: u8,
        value: Option<u8>,
    ) {
        let (px, py) = self.cell_origin(start_x, start_y, row, col);
        match value {
            Some(v) => self.draw_tile_at(fb, px, py, v),
            None => {
                let style = CellStyle {
                    fg: BOARD_BG,
                    bg: EMPTY_BG,
                    bold: false,
                };
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
            }
        }
    }

    fn draw_tile_at(&self, fb: &mut FrameBuffer, px: u16, py: u16, value: u8) {
        let tile_style = CellStyle {
            fg: LABEL_FG,
            bg: TILE_BG,
            bold: false,
        };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', tile_style);

        let label_w: u16 = if value >= 10 { 2 } else { 1 };
        let label_x = px + (self.cell_w.saturating_sub(label_w)) / 2;
        let label_y = py + self.cell_h / 2;
        let label_style = CellStyle {
            bold: true,
            ..tile_style
        };
        fb.put_u32(label_x, label_y, value as u32, label_style);
    }

    fn draw_hud(
        &self,
        fb: &mut FrameBuffer,
        snap: &PuzzleSnapshot,
        hud: Hud,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let text = CellStyle {
            fg: TEXT_FG,
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let label = CellStyle { bold: true, ..text };

        let hud_y = start_y + frame_h;
        if let Some(elapsed_ms) = hud.elapsed_ms {
            fb.put_str(start_x, hud_y, "TIME", label);
            put_clock(fb, start_x + 5, hud_y, elapsed_ms, text);
        }
        fb.put_str(
            start_x,
            hud_y.saturating_add(1),
            "arrows/drag slide · s scramble · n new · q quit",
            text,
        );

        if snap.solved {
            let banner = " SOLVED ";
            let banner_w = banner.chars().count() as u16;
            let x = start_x + frame_w.saturating_sub(banner_w) / 2;
            let y = start_y + frame_h / 2;
            let style = CellStyle {
                fg: Rgb::new(255, 255, 255),
                bg: Rgb::new(0, 100, 0),
                bold: true,
            };
            fb.put_str(x, y, banner, style);
        }
    }
}

/// Round-to-nearest linear interpolation in screen cells
fn lerp_i32(from: i32, to: i32, t: f32) -> i32 {
    from + ((to - from) as f32 * t).round() as i32
}

/// Write `mm:ss` for an elapsed duration
fn put_clock(fb: &mut FrameBuffer, x: u16, y: u16, elapsed_ms: u32, style: CellStyle) {
    let total_secs = elapsed_ms / 1000;
    let minutes = (total_secs / 60).min(99);
    let seconds = total_secs % 60;
    fb.put_char(x, y, digit(minutes / 10), style);
    fb.put_char(x + 1, y, digit(minutes % 10), style);
    fb.put_char(x + 2, y, ':', style);
    fb.put_char(x + 3, y, digit(seconds / 10), style);
    fb.put_char(x + 4, y, digit(seconds % 10), style);
}

fn digit(v: u32) -> char {
    (b'0' + (v % 10) as u8) as char
}
