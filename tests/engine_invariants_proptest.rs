//! Property tests: random input and update sequences on a small board.

use proptest::prelude::*;

use tui_snake::core::{CollisionKind, GameConfig, GameEngine, MoveOutcome, SimpleRng};
use tui_snake::types::{
    Direction, GameAction, TileState, FRUIT_SCORE_MAX, FRUIT_SCORE_MIN, MAX_QUEUED_DIRECTIONS,
};

#[derive(Debug, Clone, Copy)]
enum Op {
    Act(GameAction),
    Update,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::Update),
        3 => prop::sample::select(Direction::ALL.to_vec()).prop_map(|d| Op::Act(GameAction::Turn(d))),
        1 => Just(Op::Act(GameAction::Pause)),
        1 => Just(Op::Act(GameAction::Restart)),
    ]
}

fn assert_board_matches_snake(game: &GameEngine) -> Result<(), TestCaseError> {
    let board = game.board();
    let body: Vec<_> = game.snake().collect();

    prop_assert_eq!(
        board.count(TileState::SnakeHead) + board.count(TileState::SnakeBody),
        body.len()
    );
    for (i, &at) in body.iter().enumerate() {
        let expected = if i == 0 {
            TileState::SnakeHead
        } else {
            TileState::SnakeBody
        };
        prop_assert_eq!(board.tile(at), Some(expected), "segment {} at {:?}", i, at);
    }
    prop_assert!(board.count(TileState::Fruit) <= 1);
    Ok(())
}

proptest! {
    #[test]
    fn engine_invariants_hold(seed in any::<u32>(), ops in prop::collection::vec(op(), 1..400)) {
        let mut game = GameEngine::new(GameConfig::new(7, 7), SimpleRng::new(seed)).unwrap();
        let mut score = 0u32;
        let mut eaten = 0u32;

        for op in ops {
            match op {
                Op::Act(GameAction::Restart) => {
                    if game.apply_action(GameAction::Restart) {
                        score = 0;
                        eaten = 0;
                        prop_assert_eq!(game.snake_len(), 1);
                    }
                }
                Op::Act(action) => {
                    game.apply_action(action);
                }
                Op::Update => {
                    let before_board = game.board().clone();
                    let before_len = game.snake_len();
                    let value = game.next_fruit_score();

                    match game.update() {
                        Some(MoveOutcome::AteFruit) => {
                            score += value;
                            eaten += 1;
                            prop_assert_eq!(game.snake_len(), before_len + 1);
                        }
                        Some(MoveOutcome::Moved) => {
                            prop_assert!(game.snake_len() >= before_len);
                        }
                        Some(MoveOutcome::Collision(CollisionKind::Wall)) => {
                            prop_assert_eq!(game.board(), &before_board);
                            prop_assert!(game.is_game_over());
                        }
                        Some(MoveOutcome::Collision(CollisionKind::Body)) => {
                            prop_assert!(game.snake_len() + 1 >= before_len);
                            prop_assert!(game.is_game_over());
                        }
                        None => {
                            prop_assert_eq!(game.board(), &before_board);
                        }
                    }
                }
            }

            prop_assert!(game.queued_directions().len() <= MAX_QUEUED_DIRECTIONS);
            prop_assert!((FRUIT_SCORE_MIN..=FRUIT_SCORE_MAX).contains(&game.next_fruit_score()));
            prop_assert_eq!(game.score(), score);
            prop_assert_eq!(game.fruits_eaten(), eaten);
            if !game.is_new_game() {
                assert_board_matches_snake(&game)?;
            }
        }
    }

    #[test]
    fn queued_directions_never_reverse(turns in prop::collection::vec(prop::sample::select(Direction::ALL.to_vec()), 0..20)) {
        let mut game = GameEngine::with_seed(1);
        game.reset_game();

        for d in turns {
            game.request_direction(d);
            let queued = game.queued_directions();
            for pair in queued.windows(2) {
                prop_assert_ne!(pair[0], pair[1]);
                prop_assert_ne!(pair[0], pair[1].opposite());
            }
        }
    }
}
