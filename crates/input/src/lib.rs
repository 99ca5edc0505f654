//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. The mapping
//! is stateless: buffering and legality checks live in the engine.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
