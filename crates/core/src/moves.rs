//! Move rules - legality, planning, and immediate application
//!
//! A move exchanges the tile orthogonally adjacent to the empty slot with the
//! empty slot itself. [`plan_slide`] only validates and describes the move
//! (animation owns commit timing); [`apply_slide`] mutates synchronously and
//! is what the scrambler drives.

use tui_fifteen_types::{Direction, EMPTY_SLOT};

use crate::grid::Grid;

/// Descriptor of one accepted move: which tile travels from where to where.
///
/// `dest` is the empty cell at planning time; after commit the empty slot
/// sits at `src`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideMove {
    pub tile: u8,
    pub src_row: u8,
    pub src_col: u8,
    pub dest_row: u8,
    pub dest_col: u8,
}

/// The cell whose tile would slide `dir` into the empty slot, if any.
///
/// Boundary failures (no adjacent tile in that direction) yield `None`.
fn slide_source(grid: &Grid, dir: Direction) -> Option<(u8, u8)> {
    let (er, ec) = (grid.empty_row(), grid.empty_col());
    let n = grid.n();
    match dir {
        // Tile below the empty slot moves up.
        Direction::Up if er < n - 1 => Some((er + 1, ec)),
        // Tile above moves down.
        Direction::Down if er > 0 => Some((er - 1, ec)),
        // Tile to the right moves left.
        Direction::Left if ec < n - 1 => Some((er, ec + 1)),
        // Tile to the left moves right.
        Direction::Right if ec > 0 => Some((er, ec - 1)),
        _ => None,
    }
}

/// Validate a move without mutating the grid.
///
/// Returns the move descriptor on acceptance; `None` is a silent rejection.
pub fn plan_slide(grid: &Grid, dir: Direction) -> Option<SlideMove> {
    let (src_row, src_col) = slide_source(grid, dir)?;
    Some(SlideMove {
        tile: grid.get(src_row, src_col),
        src_row,
        src_col,
        dest_row: grid.empty_row(),
        dest_col: grid.empty_col(),
    })
}

/// Validate and apply a move synchronously, bypassing animation.
///
/// On acceptance the source tile and the empty slot swap, and the cached
/// empty position moves to the vacated source cell. Returns whether the move
/// was applied.
pub fn apply_slide(grid: &mut Grid, dir: Direction) -> bool {
    let Some(mv) = plan_slide(grid, dir) else {
        return false;
    };
    commit_slide(grid, &mv);
    true
}

/// Write a planned move into the grid.
///
/// Callers must pass a move planned against the grid's current state.
pub fn commit_slide(grid: &mut Grid, mv: &SlideMove) {
    grid.set(mv.dest_row, mv.dest_col, mv.tile);
    grid.set(mv.src_row, mv.src_col, EMPTY_SLOT);
}
