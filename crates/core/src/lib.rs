//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake simulation: the fixed-rate logic clock, the
//! tile board, the buffered direction input, fruit placement and the engine
//! that drives them. It has no dependency on terminals, rendering or I/O:
//!
//! - **Deterministic**: the random source is injected, so the same seed replays
//!   the same game
//! - **Testable**: every rule is reachable through the public engine API
//! - **Portable**: runs headless, in a terminal, or under a test harness
//!
//! # Module Structure
//!
//! - [`board`]: W×H tile grid with bounds-checked access
//! - [`clock`]: fixed-rate cycle timer with pause/reset
//! - [`direction_queue`]: bounded heading buffer with reversal filtering
//! - [`spawner`]: uniform fruit placement over free tiles
//! - [`engine`]: the per-tick state machine tying everything together
//! - [`snapshot`]: read-only state copy for the presentation layer
//! - [`config`]: board size and logic rate, loadable from TOML
//!
//! # Game Rules
//!
//! - A round starts with a one-tile snake at the board center heading North
//! - The snake keeps its tail (grows) until it is longer than
//!   `MIN_SNAKE_LENGTH`; after that only fruit makes it grow
//! - Leaving the board or running into the body ends the round; moving into the
//!   tile the tail vacates on the same step is allowed
//! - A fruit is worth 100 points when it appears and loses one point per plain
//!   move, never dropping below 10
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameEngine;
//! use tui_snake_types::{Coordinate, Direction};
//!
//! let mut game = GameEngine::with_seed(12345);
//! assert!(game.is_new_game());
//!
//! game.reset_game();
//! assert_eq!(game.current_direction(), Some(Direction::North));
//!
//! // Queued behind the current heading: used on the second update.
//! assert!(game.request_direction(Direction::East));
//! game.update();
//! assert_eq!(game.head(), Some(Coordinate::new(13, 12)));
//! ```
//!
//! # Timing
//!
//! Call [`GameEngine::tick`](engine::GameEngine::tick) every frame with a
//! monotonic millisecond timestamp. The engine runs at most one update per call,
//! at the configured logic rate (9 Hz by default).

pub mod board;
pub mod clock;
pub mod config;
pub mod direction_queue;
pub mod engine;
pub mod error;
pub mod rng;
pub mod snapshot;
pub mod spawner;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::Clock;
pub use config::GameConfig;
pub use direction_queue::DirectionQueue;
pub use engine::{CollisionKind, GameEngine, MoveOutcome};
pub use error::{ConfigError, SpawnError};
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::GameSnapshot;
pub use spawner::spawn_fruit;
