//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by the simulation core, the input
//! mapping and the terminal front-end. Everything here is plain data with no
//! external dependencies.
//!
//! # Board Dimensions
//!
//! - **Width**: 27 columns (indexed 0-26)
//! - **Height**: 27 rows (indexed 0-26)
//! - **Spawn position**: grid center, (13, 13) on the default board
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_LOGIC_HZ` | 9.0 | Game-logic updates per second |
//! | `FRAME_HZ` | 50 | Render/input loop rate |
//! | `FRAME_MS` | 20 | Frame interval derived from `FRAME_HZ` |
//!
//! # Fruit Scoring
//!
//! A fresh fruit is worth `FRUIT_SCORE_MAX` points. Every plain move while it
//! sits on the board lowers its value by one, down to `FRUIT_SCORE_MIN`.
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Coordinate, Direction};
//!
//! assert_eq!(Direction::North.opposite(), Direction::South);
//! assert_eq!(Coordinate::new(13, 13).step(Direction::North), Coordinate::new(13, 12));
//! ```

/// Default board width in tiles
pub const GRID_WIDTH: usize = 27;

/// Default board height in tiles
pub const GRID_HEIGHT: usize = 27;

/// Largest accepted board side in tiles. Keeps every on-screen coordinate of
/// the board (two columns per tile plus the border) inside `u16`.
pub const MAX_GRID_SIDE: usize = 1024;

/// The tail is only released once the snake is longer than this.
pub const MIN_SNAKE_LENGTH: usize = 5;

/// Capacity of the buffered direction queue.
pub const MAX_QUEUED_DIRECTIONS: usize = 3;

/// Default game-logic frequency (cycles per second).
pub const DEFAULT_LOGIC_HZ: f64 = 9.0;

/// Render/input loop frequency.
pub const FRAME_HZ: u32 = 50;

/// Frame interval in milliseconds (20ms at 50 Hz).
pub const FRAME_MS: u32 = 1000 / FRAME_HZ;

/// Value of a freshly spawned fruit.
pub const FRUIT_SCORE_MAX: u32 = 100;

/// Floor for the decaying fruit value.
pub const FRUIT_SCORE_MIN: u32 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants() {
        assert_eq!(GRID_WIDTH, 27);
        assert_eq!(GRID_HEIGHT, 27);
        assert_eq!(MIN_SNAKE_LENGTH, 5);
        assert!(MAX_GRID_SIDE * 2 + 2 <= u16::MAX as usize);
        assert_eq!(MAX_QUEUED_DIRECTIONS, 3);
        assert_eq!(FRAME_MS, 20);
        assert!(FRUIT_SCORE_MIN < FRUIT_SCORE_MAX);
    }

    #[test]
    fn opposite_table_is_an_involution() {
        for d in Direction::ALL {
            assert_ne!(d, d.opposite());
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn step_follows_screen_axes() {
        let c = Coordinate::new(5, 5);
        assert_eq!(c.step(Direction::North), Coordinate::new(5, 4));
        assert_eq!(c.step(Direction::South), Coordinate::new(5, 6));
        assert_eq!(c.step(Direction::West), Coordinate::new(4, 5));
        assert_eq!(c.step(Direction::East), Coordinate::new(6, 5));
    }

    #[test]
    fn is_reversal_of_rejects_same_axis() {
        assert!(Direction::North.is_reversal_of(Direction::North));
        assert!(Direction::North.is_reversal_of(Direction::South));
        assert!(!Direction::North.is_reversal_of(Direction::East));
        assert!(!Direction::West.is_reversal_of(Direction::South));
    }
}

/// A tile position: `x` is the column, `y` the row, both 0-indexed from the
/// top-left corner.
///
/// Signed so that a step off the board is representable and can be
/// bounds-checked instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring tile one cell away in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The four headings a snake can travel in.
///
/// North is up the screen (row - 1), East is right (col + 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

/// Opposite heading, indexed by `Direction as usize`.
const OPPOSITES: [Direction; 4] = [
    Direction::South,
    Direction::North,
    Direction::West,
    Direction::East,
];

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The 180° reversal of this heading.
    pub fn opposite(self) -> Self {
        OPPOSITES[self as usize]
    }

    /// True when turning from `self` to `other` is not a real turn: either the
    /// same heading or a reversal into the snake's own neck.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert!(Direction::East.is_reversal_of(Direction::West));
    /// assert!(!Direction::East.is_reversal_of(Direction::North));
    /// ```
    pub fn is_reversal_of(self, other: Direction) -> bool {
        self == other || self.opposite() == other
    }

    /// Returns the (dx, dy) step for this heading.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }
}

/// What occupies a single board tile.
///
/// `Empty` is the implicit default for every cell of a fresh board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileState {
    #[default]
    Empty,
    Fruit,
    SnakeBody,
    SnakeHead,
}

impl TileState {
    /// True for tiles the snake occupies.
    pub fn is_snake(self) -> bool {
        matches!(self, TileState::SnakeBody | TileState::SnakeHead)
    }

    /// True for tiles a fruit may be placed on. An existing fruit counts as
    /// free so a respawn may overwrite it.
    pub fn is_free(self) -> bool {
        matches!(self, TileState::Empty | TileState::Fruit)
    }
}

/// Commands the input collaborator can send to the engine.
///
/// Every action is best-effort: the engine ignores those that are illegal in
/// the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Queue a new heading
    Turn(Direction),
    /// Toggle pause (ignored after game over)
    Pause,
    /// Start a new round (only from the title screen or after game over)
    Restart,
}
