//! Scrambler - backtrack-avoiding random walk of the empty slot
//!
//! Scrambling always starts from the solved configuration and applies a
//! fixed number of legal moves, so the result is reachable (solvable) by
//! construction. Each step excludes the direction that would exactly undo
//! the previous one; without that filter roughly a quarter of all steps
//! cancel immediately and the shuffle ends up much closer to solved.

use arrayvec::ArrayVec;
use tui_fifteen_types::Direction;

use crate::grid::Grid;
use crate::moves::{apply_slide, plan_slide};
use crate::rng::SimpleRng;

/// Scramble the grid with `move_count` random legal moves.
///
/// The grid is reset to solved first. Candidate directions per step are the
/// geometrically legal ones minus the reversal of the previous step; when
/// that filter empties the set, the full legal set is used again (including
/// the reversal - the filter is a bias, not a guarantee). The walk that was
/// applied is returned so callers can replay or undo it.
pub fn scramble(grid: &mut Grid, rng: &mut SimpleRng, move_count: u32) -> Vec<Direction> {
    grid.reset();

    let mut walk = Vec::with_capacity(move_count as usize);
    let mut last: Option<Direction> = None;

    for _ in 0..move_count {
        let mut candidates: ArrayVec<Direction, 4> = Direction::ALL
            .into_iter()
            .filter(|&dir| Some(dir) != last.map(|l| l.opposite()))
            .filter(|&dir| plan_slide(grid, dir).is_some())
            .collect();

        if candidates.is_empty() {
            candidates = Direction::ALL
                .into_iter()
                .filter(|&dir| plan_slide(grid, dir).is_some())
                .collect();
        }
        if candidates.is_empty() {
            continue;
        }

        let chosen = candidates[rng.next_range(candidates.len() as u32) as usize];
        apply_slide(grid, chosen);
        last = Some(chosen);
        walk.push(chosen);
    }

    walk
}
