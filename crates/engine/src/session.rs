//! Puzzle session - ties together grid, animation, scrambling, and solved
//! tracking behind the input entry points.
//!
//! Single-threaded and tick-driven: the runner forwards key/gesture input
//! through [`PuzzleSession::handle_action`] and calls
//! [`PuzzleSession::tick`] once per frame. While a slide animates, every
//! new request (slide, scramble, reset) is rejected outright; the committed
//! outcome of each slide is consumed once via
//! [`PuzzleSession::take_last_event`].

use crate::animation::AnimationController;
use tui_fifteen_core::moves::plan_slide;
use tui_fifteen_core::scramble::scramble;
use tui_fifteen_core::snapshot::{AnimationSnapshot, PuzzleSnapshot};
use tui_fifteen_core::solved::{SolvedTracker, SolvedTransition};
use tui_fifteen_core::{Grid, SimpleRng};
use tui_fifteen_types::{Direction, PuzzleAction, GRID_COUNT, SCRAMBLE_MOVES};

/// Result of one committed slide (consumed by the runner)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideOutcome {
    /// Label of the tile that finished sliding
    pub tile: u8,
    /// Solved-flag edge observed right after the commit
    pub transition: SolvedTransition,
}

/// Complete puzzle state driven by the frame loop
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    grid: Grid,
    animation: AnimationController,
    solved: SolvedTracker,
    rng: SimpleRng,
    last_event: Option<SlideOutcome>,
}

impl PuzzleSession {
    /// Create a session over a solved default-size board
    pub fn new(seed: u32) -> Self {
        Self::with_size(GRID_COUNT, seed)
    }

    /// Create a session over a solved n x n board
    pub fn with_size(n: u8, seed: u32) -> Self {
        Self::with_grid(Grid::new(n), seed)
    }

    /// Create a session over an explicit starting position
    pub fn with_grid(grid: Grid, seed: u32) -> Self {
        let solved = SolvedTracker::new(&grid);
        Self {
            grid,
            animation: AnimationController::new(),
            solved,
            rng: SimpleRng::new(seed),
            last_event: None,
        }
    }

    /// Override the animation duration (tests tick with round numbers)
    pub fn with_animation_duration_ms(mut self, duration_ms: u32) -> Self {
        self.animation = AnimationController::new().with_duration_ms(duration_ms);
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn n(&self) -> u8 {
        self.grid.n()
    }

    pub fn is_solved(&self) -> bool {
        self.solved.solved()
    }

    /// Whether a new slide or scramble request would be accepted right now
    pub fn can_accept_move(&self) -> bool {
        !self.animation.is_animating()
    }

    /// Request a slide in `dir`.
    ///
    /// Rejected while a slide animates (busy) or when no tile can travel in
    /// that direction (boundary no-op). On acceptance the animation starts;
    /// the grid itself mutates only when the animation completes.
    pub fn handle_direction(&mut self, dir: Direction) -> bool {
        if !self.can_accept_move() {
            return false;
        }
        let Some(mv) = plan_slide(&self.grid, dir) else {
            return false;
        };
        self.animation.begin(mv)
    }

    /// Scramble in place (no animation), rejecting while a slide animates.
    pub fn handle_scramble(&mut self) -> bool {
        if !self.can_accept_move() {
            return false;
        }
        scramble(&mut self.grid, &mut self.rng, SCRAMBLE_MOVES);
        self.solved.update(&self.grid);
        true
    }

    /// Restore the solved configuration, rejecting while a slide animates.
    pub fn handle_reset(&mut self) -> bool {
        if !self.can_accept_move() {
            return false;
        }
        self.grid.reset();
        self.solved.update(&self.grid);
        true
    }

    /// Dispatch an input-layer action
    pub fn handle_action(&mut self, action: PuzzleAction) -> bool {
        match action {
            PuzzleAction::Slide(dir) => self.handle_direction(dir),
            PuzzleAction::Scramble => self.handle_scramble(),
            PuzzleAction::Reset => self.handle_reset(),
        }
    }

    /// Advance the frame clock. Returns whether a slide committed this tick.
    ///
    /// On commit the solved tracker re-runs and the outcome is stored for
    /// [`Self::take_last_event`].
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let Some(mv) = self.animation.advance(&mut self.grid, elapsed_ms) else {
            return false;
        };
        let transition = self.solved.update(&self.grid);
        self.last_event = Some(SlideOutcome {
            tile: mv.tile,
            transition,
        });
        true
    }

    /// Take and clear the outcome of the most recent committed slide
    pub fn take_last_event(&mut self) -> Option<SlideOutcome> {
        self.last_event.take()
    }

    /// Fill a reusable snapshot with the current render-relevant state
    pub fn snapshot_into(&self, out: &mut PuzzleSnapshot) {
        out.n = self.grid.n();
        self.grid.write_tiles(&mut out.tiles);
        out.animation = self.animation.current().map(|(mv, progress)| AnimationSnapshot {
            tile: mv.tile,
            src_row: mv.src_row,
            src_col: mv.src_col,
            dest_row: mv.dest_row,
            dest_col: mv.dest_col,
            progress,
        });
        out.solved = self.solved.solved();
    }

    /// Convenience helper that allocates a fresh snapshot
    pub fn snapshot(&self) -> PuzzleSnapshot {
        let mut snap = PuzzleSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
