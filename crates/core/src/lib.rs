//! Simulation engine module - pure, deterministic, and testable
//!
//! This crate is the external collaborator the controller talks to. It owns
//! the board, the snake body, food placement, and scoring, and it exposes the
//! narrow contract the frame driver consumes:
//!
//! - `width()` / `height()`: fixed board dimensions, queried once at startup
//! - `cells()`: flat row-major occupancy buffer, refreshed in place per tick
//! - `meat_position()`: current food coordinate; `(0, 0)` is the sentinel
//!   for "no food placed yet"
//! - `tick(direction)`: advance the simulation by exactly one step
//! - `score()`: food eaten so far, queried once per frame
//!
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: same seed produces identical food sequences
//! - **Testable**: the whole game can be driven headless
//! - **Portable**: usable from the terminal runner or any other harness
//!
//! # Failure model
//!
//! A step that drives the snake into a wall or its own body returns a
//! [`StepError`] and ends the round; every later `tick` returns the same
//! error. There is nothing transient to retry.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::SnakeSim;
//! use tui_snake_types::Direction;
//!
//! let mut sim = SnakeSim::new(12345);
//! assert_eq!(sim.meat_position(), (0, 0)); // sentinel: nothing placed yet
//!
//! sim.tick(Direction::Right).unwrap();
//! assert_ne!(sim.meat_position(), (0, 0)); // first tick places the food
//! ```

pub mod rng;
pub mod sim;
pub mod snapshot;

pub use tui_snake_types as types;

pub use rng::SimpleRng;
pub use sim::{SnakeSim, StepError};
pub use snapshot::BoardSnapshot;
