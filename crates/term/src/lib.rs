//! Terminal presentation module.
//!
//! Reads [`tui_fifteen_core::PuzzleSnapshot`]s and draws them; never mutates
//! core state. [`game_view::PuzzleView`] is pure (snapshot to framebuffer)
//! and unit-testable, [`renderer::TerminalRenderer`] owns the raw-mode
//! terminal lifecycle and flushes frames.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_fifteen_core as core;
pub use tui_fifteen_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{Hud, PuzzleView, Viewport};
pub use renderer::TerminalRenderer;
