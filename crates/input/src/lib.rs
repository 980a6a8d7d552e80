//! Terminal input module (controller-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`tui_snake_types::Direction`] and provides
//! the [`InputArbiter`], the gate that decides which directional inputs are
//! legal to forward to the simulation.

pub mod arbiter;
pub mod map;

pub use tui_snake_types as types;

pub use arbiter::InputArbiter;
pub use map::{direction_for_key, should_quit, should_restart};
