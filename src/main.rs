//! Terminal snake runner (default binary).
//!
//! One cooperative loop alternates between key polling and frame execution
//! at display cadence. Accepted directional input restarts the frame chain;
//! the chain then free-runs until the next accepted key. An engine failure
//! freezes the board on the last good frame, leaving restart and quit live.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::SnakeSim;
use tui_snake::driver::{FrameDriver, FrameOutcome};
use tui_snake::input::{direction_for_key, should_quit, should_restart, InputArbiter};
use tui_snake::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use tui_snake::types::FRAME_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(FRAME_MS as u64);

    'session: loop {
        let mut sim = SnakeSim::new(clock_seed());
        let mut driver = FrameDriver::new();
        let mut arbiter = InputArbiter::new();

        // Show the idle board; nothing advances until the first key.
        driver.start(None);
        term.invalidate();
        let mut next_frame = Instant::now();

        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    // Terminal auto-repeat counts as fresh presses: holding
                    // a key keeps restarting the chain.
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if should_restart(key) {
                            continue 'session;
                        }
                        if let Some(requested) = direction_for_key(key) {
                            if let Some(dir) = arbiter.accept(requested) {
                                driver.stop();
                                driver.start(Some(dir));
                                // The new chain's first frame runs in this
                                // same pass.
                                next_frame = Instant::now();
                            }
                        }
                    }
                }
            }

            if Instant::now() >= next_frame {
                next_frame += frame;

                let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
                match driver.run_frame(&mut sim, &view, Viewport::new(w, h), &mut fb) {
                    Ok(FrameOutcome::Idle) => {}
                    Ok(FrameOutcome::Drawn { .. }) => term.present(&mut fb)?,
                    Err(_) => {
                        // Round over. The chain is already disarmed; the
                        // board stays frozen until restart or quit.
                    }
                }
            }
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1)
}
