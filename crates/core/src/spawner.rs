//! Fruit placement
//!
//! Picks a uniformly random tile among those not covered by the snake. The
//! candidate tiles are enumerated in column-major order and the `n`-th one is
//! taken, so a given random draw always lands on the same tile regardless of
//! how the board got into its current state.

use crate::board::Board;
use crate::error::SpawnError;
use crate::rng::RandomSource;
use crate::types::{Coordinate, TileState};

/// Place a fruit on a random free tile of `board`.
///
/// The number of candidates is `area - snake_len`; an existing fruit counts as
/// a candidate and may be overwritten.
pub fn spawn_fruit<R: RandomSource>(
    board: &mut Board,
    snake_len: usize,
    rng: &mut R,
) -> Result<Coordinate, SpawnError> {
    let area = board.area();
    let full = SpawnError::BoardFull { area, snake_len };

    let free_count = area.checked_sub(snake_len).filter(|&n| n > 0).ok_or(full)?;
    let index = rng.next_below(free_count as u32) as usize;

    let at = board.free_tiles().nth(index).ok_or(full)?;
    board.set_tile(at, TileState::Fruit);
    Ok(at)
}
