//! Core puzzle logic module - pure, deterministic, and testable
//!
//! This module contains the grid state, move rules, scrambler, and solved
//! detection for the sliding-tile puzzle. It has **zero dependencies** on UI
//! or I/O, making it:
//!
//! - **Deterministic**: the same seed produces the same scramble
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: runs headless or behind any renderer
//!
//! # Module Structure
//!
//! - [`grid`]: n x n tile arrangement with the cached empty-slot position
//! - [`moves`]: move legality, planning, and immediate application
//! - [`scramble`]: backtrack-avoiding random walk of the empty slot
//! - [`solved`]: solved-configuration check with transition reporting
//! - [`rng`]: seeded LCG used for scrambling
//! - [`snapshot`]: render-facing copy of the puzzle state
//!
//! # Rules
//!
//! A move slides the tile orthogonally adjacent to the empty slot into that
//! slot. Directions name the tile's travel ([`tui_fifteen_types::Direction`]).
//! Scrambling performs a fixed number of legal moves from the solved
//! configuration, so every scrambled grid is solvable by construction.

pub mod grid;
pub mod moves;
pub mod rng;
pub mod scramble;
pub mod snapshot;
pub mod solved;

pub use tui_fifteen_types as types;

// Re-export commonly used types for convenience
pub use grid::Grid;
pub use moves::{apply_slide, plan_slide, SlideMove};
pub use rng::SimpleRng;
pub use scramble::scramble;
pub use snapshot::{AnimationSnapshot, PuzzleSnapshot};
pub use solved::{is_solved, SolvedTracker, SolvedTransition};
