//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`tui_fifteen_types::PuzzleAction`] and turns
//! pointer press/release pairs into swipe move requests.

pub mod gesture;
pub mod map;

pub use tui_fifteen_types as types;

pub use gesture::{translate_swipe, GestureTracker};
pub use map::{handle_key_event, should_quit};
