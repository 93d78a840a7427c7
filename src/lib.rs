//! TUI fifteen puzzle (workspace facade crate).
//!
//! This package keeps a stable `tui_fifteen::{core,engine,input,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_fifteen_core as core;
pub use tui_fifteen_engine as engine;
pub use tui_fifteen_input as input;
pub use tui_fifteen_term as term;
pub use tui_fifteen_types as types;
