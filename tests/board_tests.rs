//! Board tests through the public facade.

use tui_snake::core::Board;
use tui_snake::types::{Coordinate, TileState, GRID_HEIGHT, GRID_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::default();
    assert_eq!(board.width(), GRID_WIDTH);
    assert_eq!(board.height(), GRID_HEIGHT);
    assert_eq!(board.area(), GRID_WIDTH * GRID_HEIGHT);

    for y in 0..GRID_HEIGHT as i32 {
        for x in 0..GRID_WIDTH as i32 {
            assert!(board.in_bounds(x, y), "tile ({x}, {y}) should be in bounds");
            assert_eq!(board.get(x, y), Some(TileState::Empty));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(5, 4);

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(5, 0), None);
    assert_eq!(board.get(0, 4), None);
    assert!(!board.contains(Coordinate::new(5, 3)));
    assert!(board.contains(Coordinate::new(4, 3)));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(5, 4);

    assert!(board.set(3, 2, TileState::SnakeHead));
    assert_eq!(board.get(3, 2), Some(TileState::SnakeHead));
    assert_eq!(board.tile(Coordinate::new(3, 2)), Some(TileState::SnakeHead));

    // Row-major storage: (3, 2) is index 2 * 5 + 3.
    assert_eq!(board.tiles()[13], TileState::SnakeHead);
}

#[test]
fn test_board_set_out_of_bounds_is_rejected() {
    let mut board = Board::new(3, 3);
    let before = board.clone();

    assert!(!board.set(3, 0, TileState::Fruit));
    assert!(!board.set_tile(Coordinate::new(-1, 1), TileState::Fruit));
    assert_eq!(board, before);
}

#[test]
fn test_board_clear() {
    let mut board = Board::new(4, 4);
    board.set(0, 0, TileState::SnakeHead);
    board.set(1, 0, TileState::SnakeBody);
    board.set(3, 3, TileState::Fruit);

    board.clear();
    assert_eq!(board.count(TileState::Empty), 16);
}

#[test]
fn test_column_major_order() {
    let board = Board::new(3, 2);
    let order: Vec<_> = board.column_major().map(|c| (c.x, c.y)).collect();
    assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
}

#[test]
fn test_free_tiles_skip_snake_but_keep_fruit() {
    let mut board = Board::new(2, 2);
    board.set(0, 0, TileState::SnakeHead);
    board.set(1, 0, TileState::SnakeBody);
    board.set(1, 1, TileState::Fruit);

    let free: Vec<_> = board.free_tiles().collect();
    assert_eq!(free, vec![Coordinate::new(0, 1), Coordinate::new(1, 1)]);
}
