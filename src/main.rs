//! Terminal Tetris 2048 runner (default binary).
//!
//! Uses crossterm for input and a framebuffer-based renderer. The fixed
//! timestep drives gravity; key presses apply immediately.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_tetris_2048::core::GameState;
use tui_tetris_2048::input::{handle_key_event, should_quit};
use tui_tetris_2048::term::{GameView, TerminalRenderer, Viewport};
use tui_tetris_2048::types::{GameAction, SOFT_DROP_GRACE_MS, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = std::process::id();
    let mut game = GameState::new(seed);
    game.start();

    let view = GameView::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    // Terminals rarely deliver key releases, so soft drop stays active for
    // a grace window after the last Down press.
    let mut soft_drop_timer_ms: i32 = 0;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, Viewport::new(w, h));
        term.draw(&fb)?;

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if action == GameAction::SoftDrop {
                            soft_drop_timer_ms = SOFT_DROP_GRACE_MS as i32;
                        }
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            let soft_drop_active = soft_drop_timer_ms > 0;
            if soft_drop_active {
                soft_drop_timer_ms -= TICK_MS as i32;
            }

            game.tick(TICK_MS, soft_drop_active);
        }
    }
}
