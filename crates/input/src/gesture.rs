//! Gesture translation - pointer drags to move requests
//!
//! A completed drag (press point to release point) becomes at most one move
//! request. The mapping "pulls": dragging toward the empty slot's side
//! slides the adjacent tile into it, so a rightward drag requests
//! [`Direction::Right`] (the tile left of the empty slot moves right) and a
//! downward drag requests [`Direction::Up`]. Presses outside the board's
//! playable rectangle are ignored entirely and never produce a move.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tui_fifteen_types::{Direction, PlayArea, Point, SWIPE_THRESHOLD};

/// Translate a completed swipe vector into a move request.
///
/// Drags shorter than [`SWIPE_THRESHOLD`] on both axes produce nothing; the
/// dominant axis wins ties to vertical.
pub fn translate_swipe(start: Point, end: Point) -> Option<Direction> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if dx.abs().max(dy.abs()) < SWIPE_THRESHOLD {
        return None;
    }

    if dx.abs() > dy.abs() {
        if dx > 0 {
            Some(Direction::Right)
        } else {
            Some(Direction::Left)
        }
    } else if dy > 0 {
        Some(Direction::Up)
    } else {
        Some(Direction::Down)
    }
}

/// Tracks one pointer interaction from press to release
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    start: Option<Point>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self { start: None }
    }

    /// Record a press; presses outside the play area are ignored
    pub fn begin(&mut self, p: Point, area: PlayArea) {
        self.start = area.contains(p).then_some(p);
    }

    /// Complete the gesture at the release point
    pub fn finish(&mut self, p: Point) -> Option<Direction> {
        let start = self.start.take()?;
        translate_swipe(start, p)
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Feed a raw crossterm mouse event; yields a move request on a
    /// completed left-button drag inside the play area.
    pub fn handle_mouse_event(&mut self, ev: &MouseEvent, area: PlayArea) -> Option<Direction> {
        let p = Point::new(ev.column as i32, ev.row as i32);
        match ev.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.begin(p, area);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => self.finish(p),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: PlayArea = PlayArea::new(10, 5, 30, 14);

    #[test]
    fn test_short_drag_produces_nothing() {
        let start = Point::new(15, 8);
        let end = Point::new(15 + SWIPE_THRESHOLD - 1, 8);
        assert_eq!(translate_swipe(start, end), None);
    }

    #[test]
    fn test_horizontal_swipe_signs() {
        let start = Point::new(20, 8);
        assert_eq!(
            translate_swipe(start, Point::new(20 + SWIPE_THRESHOLD, 8)),
            Some(Direction::Right)
        );
        assert_eq!(
            translate_swipe(start, Point::new(20 - SWIPE_THRESHOLD, 8)),
            Some(Direction::Left)
        );
    }

    #[test]
    fn test_vertical_swipe_signs() {
        // Downward drags pull the tile below the empty slot up, and vice
        // versa: screen-down maps to Direction::Up.
        let start = Point::new(20, 8);
        assert_eq!(
            translate_swipe(start, Point::new(20, 8 + SWIPE_THRESHOLD)),
            Some(Direction::Up)
        );
        assert_eq!(
            translate_swipe(start, Point::new(20, 8 - SWIPE_THRESHOLD)),
            Some(Direction::Down)
        );
    }

    #[test]
    fn test_dominant_axis_wins() {
        let start = Point::new(20, 8);
        assert_eq!(
            translate_swipe(start, Point::new(26, 10)),
            Some(Direction::Right)
        );
        assert_eq!(
            translate_swipe(start, Point::new(22, 14)),
            Some(Direction::Up)
        );
        // Exact diagonal resolves to the vertical axis.
        assert_eq!(
            translate_swipe(start, Point::new(24, 12)),
            Some(Direction::Up)
        );
    }

    #[test]
    fn test_press_outside_area_is_ignored() {
        let mut tracker = GestureTracker::new();
        tracker.begin(Point::new(0, 0), AREA);
        assert_eq!(tracker.finish(Point::new(25, 0)), None);
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut tracker = GestureTracker::new();
        assert_eq!(tracker.finish(Point::new(25, 8)), None);
    }

    #[test]
    fn test_one_move_per_completed_gesture() {
        let mut tracker = GestureTracker::new();
        tracker.begin(Point::new(15, 8), AREA);
        assert_eq!(
            tracker.finish(Point::new(25, 8)),
            Some(Direction::Right)
        );
        // The same release cannot fire twice.
        assert_eq!(tracker.finish(Point::new(35, 8)), None);
    }

    #[test]
    fn test_cancel_clears_pending_press() {
        let mut tracker = GestureTracker::new();
        tracker.begin(Point::new(15, 8), AREA);
        tracker.cancel();
        assert_eq!(tracker.finish(Point::new(25, 8)), None);
    }

    #[test]
    fn test_mouse_event_drag_inside_area() {
        use crossterm::event::KeyModifiers;

        let mut tracker = GestureTracker::new();
        let down = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 15,
            row: 8,
            modifiers: KeyModifiers::NONE,
        };
        let up = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 15,
            row: 12,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(tracker.handle_mouse_event(&down, AREA), None);
        assert_eq!(tracker.handle_mouse_event(&up, AREA), Some(Direction::Up));
    }
}
