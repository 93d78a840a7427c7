//! Slide animation - a two-state machine (idle / animating)
//!
//! At most one tile is ever in transit. While a slide is active the logical
//! grid still holds the pre-move arrangement; the commit happens here, in
//! the same call that observes progress reaching 1.0. There is no
//! cancellation path: an accepted slide always runs to completion.

use tui_fifteen_core::moves::{commit_slide, SlideMove};
use tui_fifteen_core::Grid;
use tui_fifteen_types::ANIMATION_DURATION_MS;

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveSlide {
    mv: SlideMove,
    progress: f32,
}

/// Interpolates a single tile between its source and destination cells
#[derive(Debug, Clone)]
pub struct AnimationController {
    active: Option<ActiveSlide>,
    duration_ms: u32,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationController {
    pub fn new() -> Self {
        Self {
            active: None,
            duration_ms: ANIMATION_DURATION_MS,
        }
    }

    /// Override the slide duration (tests use short or 1-tick durations)
    pub fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms.max(1);
        self
    }

    /// Start animating a planned move. Rejected while a slide is in transit.
    pub fn begin(&mut self, mv: SlideMove) -> bool {
        if self.active.is_some() {
            return false;
        }
        self.active = Some(ActiveSlide { mv, progress: 0.0 });
        true
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// The move in transit and its interpolation factor, if any
    pub fn current(&self) -> Option<(SlideMove, f32)> {
        self.active.map(|a| (a.mv, a.progress))
    }

    /// Advance by `elapsed_ms`; on reaching full progress, commit the move
    /// into the grid and return it.
    ///
    /// Progress is clamped to 1.0, so overshooting ticks land the tile
    /// exactly on its destination cell.
    pub fn advance(&mut self, grid: &mut Grid, elapsed_ms: u32) -> Option<SlideMove> {
        let slide = self.active.as_mut()?;
        slide.progress += elapsed_ms as f32 / self.duration_ms as f32;
        if slide.progress < 1.0 {
            return None;
        }
        slide.progress = 1.0;

        let mv = slide.mv;
        commit_slide(grid, &mv);
        self.active = None;
        Some(mv)
    }
}
