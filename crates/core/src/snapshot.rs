//! Render-facing copy of the puzzle state.
//!
//! The renderer never touches `Grid` directly; the session fills one of
//! these per frame. `snapshot_into` reuses the tile buffer so the per-frame
//! path stays allocation-free after warm-up.

use tui_fifteen_types::GRID_COUNT;

/// The slide currently in transit, as the renderer needs it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSnapshot {
    pub tile: u8,
    pub src_row: u8,
    pub src_col: u8,
    pub dest_row: u8,
    pub dest_col: u8,
    /// Interpolation factor between source and destination, in [0, 1]
    pub progress: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleSnapshot {
    pub n: u8,
    /// Row-major tile labels; the source cell of an active animation still
    /// holds the pre-commit value and is suppressed visually by the view
    pub tiles: Vec<u8>,
    pub animation: Option<AnimationSnapshot>,
    pub solved: bool,
}

impl PuzzleSnapshot {
    pub fn clear(&mut self) {
        self.n = GRID_COUNT;
        self.tiles.clear();
        self.animation = None;
        self.solved = false;
    }

    /// Label at (row, col); panics out of range like the grid itself
    pub fn tile_at(&self, row: u8, col: u8) -> u8 {
        assert!(row < self.n && col < self.n, "cell out of range");
        self.tiles[row as usize * self.n as usize + col as usize]
    }
}

impl Default for PuzzleSnapshot {
    fn default() -> Self {
        Self {
            n: GRID_COUNT,
            tiles: Vec::new(),
            animation: None,
            solved: false,
        }
    }
}
