//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the board view projects engine
//! state into a framebuffer of styled character cells, and the terminal
//! renderer flushes framebuffers to the real terminal with changed-run
//! diffing. No widget/layout framework.
//!
//! Goals:
//! - Keep the projection pure so it can be unit-tested without a terminal
//! - Allow precise control over aspect ratio (2 chars wide per board cell)

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use board_view::{cell_is_filled, BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
