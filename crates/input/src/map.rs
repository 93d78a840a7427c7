//! Input module - keyboard handling for puzzle controls

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_fifteen_types::{Direction, PuzzleAction};

/// Map keyboard input to puzzle actions
pub fn handle_key_event(key: KeyEvent) -> Option<PuzzleAction> {
    match key.code {
        // Slides (arrow keys and vi keys)
        KeyCode::Up | KeyCode::Char('k') => Some(PuzzleAction::Slide(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(PuzzleAction::Slide(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(PuzzleAction::Slide(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(PuzzleAction::Slide(Direction::Right)),

        // Shuffle / new board
        KeyCode::Char('s') | KeyCode::Char('S') => Some(PuzzleAction::Scramble),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(PuzzleAction::Reset),

        _ => None,
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
