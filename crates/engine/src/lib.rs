//! Engine module - animation state machine and the tick-driven session
//!
//! Sits between the pure core rules and the runner: [`AnimationController`]
//! interpolates one tile slide across ticks and commits it on completion,
//! [`PuzzleSession`] owns the grid plus controller and exposes the input
//! entry points and the per-frame snapshot.

pub mod animation;
pub mod session;

pub use tui_fifteen_core as core;
pub use tui_fifteen_types as types;

pub use animation::AnimationController;
pub use session::{PuzzleSession, SlideOutcome};
