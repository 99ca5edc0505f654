//! Terminal front-end for the snake game.
//!
//! Renders into a plain framebuffer instead of a widget toolkit, then flushes
//! only the changed cells to the terminal.
//!
//! - [`fb`]: styled character grid
//! - [`game_view`]: lays out the board, side panel and overlays (pure, no I/O)
//! - [`renderer`]: diffing crossterm backend

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
