//! Frame driver module - paces rendering and gates simulation advances.
//!
//! The driver owns the render-chain lifecycle. [`FrameDriver::start`] arms a
//! chain bound to an optional heading, [`FrameDriver::stop`] disarms it, and
//! the session loop calls [`FrameDriver::run_frame`] once per display
//! refresh. Each frame:
//!
//! 1. advances the simulation one step in the chain's heading, on every
//!    other frame (the skip phase halves the visual step rate)
//! 2. redraws grid, board cells, and score from a fresh engine snapshot
//! 3. flips the skip phase and re-arms the chain under a fresh handle
//!
//! At most one chain is ever armed. `stop` from a key handler disarms the
//! very chain `run_frame` checks at its boundary, so it is guaranteed to
//! keep the next frame from doing work; the replacement chain runs strictly
//! after. An engine failure disarms the chain and propagates before
//! anything is drawn - the round is over and there is nothing to retry.

use tui_snake_core::{SnakeSim, StepError};
use tui_snake_term::{BoardView, FrameBuffer, Viewport};
use tui_snake_types::Direction;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

/// Identifies one armed frame chain.
///
/// A fresh handle is recorded every frame; `start` always invalidates the
/// prior one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

#[derive(Debug, Clone, Copy)]
struct Chain {
    handle: FrameHandle,
    heading: Option<Direction>,
}

/// What one `run_frame` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No chain is armed; nothing was drawn.
    Idle,
    /// A frame ran; `advanced` is true when the simulation stepped.
    Drawn { advanced: bool },
}

/// Owns the render-chain handle and the half-rate advance gate.
#[derive(Debug)]
pub struct FrameDriver {
    chain: Option<Chain>,
    skip: bool,
    next_handle: u64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self {
            chain: None,
            skip: false,
            next_handle: 0,
        }
    }

    /// Arm a new frame chain bound to `heading`.
    ///
    /// Any prior chain is invalidated first. A `None` heading renders
    /// without advancing (the idle board before the first accepted key).
    /// The skip phase is left alone; it belongs to the session, not to
    /// any one chain.
    pub fn start(&mut self, heading: Option<Direction>) -> FrameHandle {
        let handle = self.fresh_handle();
        self.chain = Some(Chain { handle, heading });
        handle
    }

    /// Disarm the pending chain.
    ///
    /// Idempotent: disarming with nothing armed is a no-op, never an error.
    pub fn stop(&mut self) {
        self.chain = None;
    }

    pub fn is_running(&self) -> bool {
        self.chain.is_some()
    }

    /// Handle of the currently armed chain, if any.
    pub fn pending(&self) -> Option<FrameHandle> {
        self.chain.map(|chain| chain.handle)
    }

    /// Heading the armed chain advances with.
    pub fn heading(&self) -> Option<Direction> {
        self.chain.and_then(|chain| chain.heading)
    }

    /// Execute one frame of the armed chain.
    ///
    /// Returns [`FrameOutcome::Idle`] without touching anything when no
    /// chain is armed. On an engine step failure the chain is disarmed and
    /// the error propagates before any redraw; the last presented frame
    /// stays on screen.
    pub fn run_frame(
        &mut self,
        sim: &mut SnakeSim,
        view: &BoardView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> Result<FrameOutcome, StepError> {
        let Some(chain) = self.chain else {
            return Ok(FrameOutcome::Idle);
        };

        let mut advanced = false;
        if let Some(direction) = chain.heading {
            if !self.skip {
                if let Err(err) = sim.tick(direction) {
                    self.chain = None;
                    return Err(err);
                }
                advanced = true;
            }
        }

        view.render_into(&sim.snapshot(), viewport, fb);

        self.skip = !self.skip;

        // Chain to the next frame under a fresh handle.
        let handle = self.fresh_handle();
        self.chain = Some(Chain {
            handle,
            heading: chain.heading,
        });

        Ok(FrameOutcome::Drawn { advanced })
    }

    fn fresh_handle(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}
