//! The input arbiter: decides which directional inputs reach the engine.
//!
//! The one rule: no immediate reversal. Turning directly backward would
//! drive the head through the trailing body, so a request for the exact
//! opposite of the last accepted direction is silently discarded. Reversals
//! are frequent, user-generated noise, not errors.

use crate::types::Direction;

/// Tracks the last accepted direction and filters new requests against it.
///
/// Starts with no direction; the first request is always accepted.
/// Re-pressing the current direction is accepted again (callers restart
/// the frame chain on every accepted input, including repeats).
#[derive(Debug, Clone, Default)]
pub struct InputArbiter {
    previous: Option<Direction>,
}

impl InputArbiter {
    pub fn new() -> Self {
        Self { previous: None }
    }

    /// Submit a direction request.
    ///
    /// Returns the direction when accepted, `None` when it is an illegal
    /// reversal. Rejection leaves the current state untouched.
    pub fn accept(&mut self, requested: Direction) -> Option<Direction> {
        if let Some(current) = self.previous {
            if requested == current.opposite() {
                return None;
            }
        }
        self.previous = Some(requested);
        Some(requested)
    }

    /// Submit a raw engine direction code.
    ///
    /// Codes outside the recognized four are ignored: no state transition,
    /// no error.
    pub fn accept_code(&mut self, code: u8) -> Option<Direction> {
        Direction::from_code(code).and_then(|dir| self.accept(dir))
    }

    /// Last accepted direction, if any.
    pub fn current(&self) -> Option<Direction> {
        self.previous
    }

    /// Forget the accepted direction (session restart).
    pub fn reset(&mut self) {
        self.previous = None;
    }
}
