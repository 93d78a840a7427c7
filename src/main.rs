//! Terminal fifteen-puzzle runner (default binary).
//!
//! Drives the session at a fixed tick rate with crossterm input. The play
//! timer lives here, not in the core: it resets on scramble and freezes on
//! the solved edge reported by the session.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_fifteen::core::SolvedTransition;
use tui_fifteen::engine::PuzzleSession;
use tui_fifteen::input::{handle_key_event, should_quit, GestureTracker};
use tui_fifteen::term::{Hud, PuzzleView, TerminalRenderer, Viewport};
use tui_fifteen::types::{PuzzleAction, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Seed from the wall clock; scrambles vary run to run, stay reproducible
/// within one session.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = PuzzleSession::new(clock_seed());
    let view = PuzzleView::default();
    let mut gestures = GestureTracker::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    // Play timer, owned here: None until the first scramble.
    let mut play_ms: Option<u32> = None;
    let mut timer_running = false;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let snap = session.snapshot();
        let hud = Hud {
            elapsed_ms: play_ms,
        };
        let fb = view.render(&snap, hud, viewport);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let accepted = session.handle_action(action);
                        if accepted && matches!(action, PuzzleAction::Scramble) {
                            play_ms = Some(0);
                            timer_running = true;
                        }
                        if accepted && matches!(action, PuzzleAction::Reset) {
                            play_ms = None;
                            timer_running = false;
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    let area = view.play_area(session.n(), viewport);
                    if let Some(dir) = gestures.handle_mouse_event(&mouse, area) {
                        session.handle_direction(dir);
                    }
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            session.tick(TICK_MS);
            if let Some(outcome) = session.take_last_event() {
                if outcome.transition == SolvedTransition::JustSolved {
                    timer_running = false;
                }
            }

            if timer_running {
                if let Some(ms) = play_ms.as_mut() {
                    *ms = ms.saturating_add(TICK_MS);
                }
            }
        }
    }
}
