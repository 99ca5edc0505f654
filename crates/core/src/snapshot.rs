use crate::types::{Direction, TileState};

/// Read-only copy of everything the presentation layer draws.
///
/// Filled by [`crate::GameEngine::snapshot_into`], which reuses the tile
/// buffer so a frame loop can keep one snapshot alive without reallocating.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major tiles (y * width + x)
    pub tiles: Vec<TileState>,
    pub score: u32,
    pub fruits_eaten: u32,
    pub next_fruit_score: u32,
    pub snake_len: usize,
    /// Heading used to orient the head glyph
    pub direction: Option<Direction>,
    pub new_game: bool,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Tile at (x, y); out-of-range reads come back Empty.
    pub fn tile(&self, x: usize, y: usize) -> TileState {
        if x >= self.width || y >= self.height {
            return TileState::Empty;
        }
        self.tiles
            .get(y * self.width + x)
            .copied()
            .unwrap_or_default()
    }

    pub fn playable(&self) -> bool {
        !self.new_game && !self.game_over && !self.paused
    }
}
