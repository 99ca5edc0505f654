//! Board module - manages the tile grid
//!
//! The board is a W×H grid where each tile holds a [`TileState`].
//! Uses a flat vector in row-major order for cache locality; the size is fixed
//! at construction and never reallocates afterwards.
//! Coordinates: (x, y) where x is the column (left to right) and y the row
//! (top to bottom).

use crate::types::{Coordinate, TileState};

/// The game board - flat storage of one [`TileState`] per tile
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of tiles, row-major order (y * width + x)
    tiles: Vec<TileState>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![TileState::Empty; width * height],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of tiles
    pub fn area(&self) -> usize {
        self.tiles.len()
    }

    /// Check if (x, y) lies on the board
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        self.in_bounds(at.x, at.y)
    }

    /// Get tile at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<TileState> {
        self.index(x, y).map(|idx| self.tiles[idx])
    }

    pub fn tile(&self, at: Coordinate) -> Option<TileState> {
        self.get(at.x, at.y)
    }

    /// Set tile at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, tile: TileState) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.tiles[idx] = tile;
                true
            }
            None => false,
        }
    }

    pub fn set_tile(&mut self, at: Coordinate, tile: TileState) -> bool {
        self.set(at.x, at.y, tile)
    }

    /// Reset every tile to Empty
    pub fn clear(&mut self) {
        self.tiles.fill(TileState::Empty);
    }

    /// Row-major view of every tile.
    pub fn tiles(&self) -> &[TileState] {
        &self.tiles
    }

    /// All coordinates in column-major order: (0,0), (0,1), ... (0,H-1), (1,0), ...
    ///
    /// This is the fixed scan order fruit placement relies on.
    pub fn column_major(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let h = self.height as i32;
        (0..self.width as i32).flat_map(move |x| (0..h).map(move |y| Coordinate::new(x, y)))
    }

    /// Tiles a fruit may be placed on, in column-major order.
    pub fn free_tiles(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.column_major()
            .filter(move |&c| self.tile(c).is_some_and(TileState::is_free))
    }

    /// Number of tiles currently in `state`.
    pub fn count(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|&&t| t == state).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::GRID_WIDTH, crate::types::GRID_HEIGHT)
    }
}
