//! Game engine - the tick-driven snake simulation
//!
//! This module ties together the board, the snake body, the direction queue,
//! the logic clock and fruit placement. It owns every piece of mutable game
//! state; callers only read through getters or go through the three input
//! mutators ([`GameEngine::request_direction`], [`GameEngine::toggle_pause`],
//! [`GameEngine::reset_game`]) and the driver entry point [`GameEngine::tick`].
//!
//! The snake is stored twice: as an ordered head-first sequence and as tile
//! states on the board. Only `advance_head` and `release_tail` mutate either
//! view, and they always update both.

use std::collections::VecDeque;

use tracing::{debug, info, trace, warn};

use crate::board::Board;
use crate::clock::Clock;
use crate::config::GameConfig;
use crate::direction_queue::DirectionQueue;
use crate::error::ConfigError;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::spawner;
use crate::types::*;

/// What the snake ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Tried to leave the board
    Wall,
    /// Ran into its own body
    Body,
}

/// Result of one logic update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Plain move onto an empty tile
    Moved,
    /// Moved onto the fruit and grew
    AteFruit,
    /// Fatal move; the round is over
    Collision(CollisionKind),
}

impl MoveOutcome {
    pub fn is_fatal(&self) -> bool {
        matches!(self, MoveOutcome::Collision(_))
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine<R: RandomSource = SimpleRng> {
    config: GameConfig,
    board: Board,
    /// Head-first body segments.
    snake: VecDeque<Coordinate>,
    directions: DirectionQueue,
    clock: Clock,
    rng: R,
    score: u32,
    fruits_eaten: u32,
    next_fruit_score: u32,
    new_game: bool,
    game_over: bool,
    paused: bool,
}

impl GameEngine<SimpleRng> {
    /// Create an engine on the default 27x27 board with a seeded RNG.
    pub fn with_seed(seed: u32) -> Self {
        Self::build(GameConfig::default(), SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Create an engine sitting on the title screen.
    ///
    /// Nothing is placed on the board until [`GameEngine::reset_game`] starts
    /// the first round.
    pub fn new(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: GameConfig, rng: R) -> Self {
        let mut clock = Clock::new(config.logic_hz);
        clock.set_paused(true);

        Self {
            board: Board::new(config.grid_width, config.grid_height),
            snake: VecDeque::with_capacity(config.grid_width * config.grid_height),
            directions: DirectionQueue::new(),
            clock,
            rng,
            score: 0,
            fruits_eaten: 0,
            next_fruit_score: FRUIT_SCORE_MAX,
            new_game: true,
            game_over: false,
            paused: false,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_new_game(&self) -> bool {
        self.new_game
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// A round is in progress and not paused.
    pub fn is_playing(&self) -> bool {
        !self.new_game && !self.game_over && !self.paused
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn fruits_eaten(&self) -> u32 {
        self.fruits_eaten
    }

    pub fn next_fruit_score(&self) -> u32 {
        self.next_fruit_score
    }

    /// Heading applied on the next update (front of the queue).
    pub fn current_direction(&self) -> Option<Direction> {
        self.directions.front()
    }

    pub fn queued_directions(&self) -> &[Direction] {
        self.directions.as_slice()
    }

    /// Bounds-checked tile read.
    pub fn tile(&self, x: i32, y: i32) -> Option<TileState> {
        self.board.get(x, y)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Body segments from head to tail.
    pub fn snake(&self) -> impl ExactSizeIterator<Item = Coordinate> + '_ {
        self.snake.iter().copied()
    }

    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    pub fn head(&self) -> Option<Coordinate> {
        self.snake.front().copied()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.tiles.clear();
        out.tiles.extend_from_slice(self.board.tiles());
        out.score = self.score;
        out.fruits_eaten = self.fruits_eaten;
        out.next_fruit_score = self.next_fruit_score;
        out.snake_len = self.snake.len();
        out.direction = self.current_direction();
        out.new_game = self.new_game;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance the logic clock to `now_ms` and run at most one update.
    ///
    /// Returns the outcome of the update, or `None` when no cycle elapsed or
    /// the game is not in play.
    pub fn tick(&mut self, now_ms: u64) -> Option<MoveOutcome> {
        self.clock.update(now_ms);
        if !self.clock.has_elapsed_cycle() {
            return None;
        }
        self.update()
    }

    /// Run one logic step: move the snake, then settle score and fruit.
    ///
    /// Does nothing (returns `None`) unless a round is in play.
    pub fn update(&mut self) -> Option<MoveOutcome> {
        if !self.is_playing() {
            return None;
        }

        let outcome = self.move_snake()?;
        trace!(?outcome, head = ?self.head(), "update");

        match outcome {
            MoveOutcome::AteFruit => {
                self.fruits_eaten += 1;
                self.score += self.next_fruit_score;
                self.spawn_fruit();
            }
            MoveOutcome::Collision(kind) => {
                self.game_over = true;
                self.sync_clock();
                info!(
                    ?kind,
                    score = self.score,
                    fruits_eaten = self.fruits_eaten,
                    length = self.snake.len(),
                    "game over"
                );
            }
            MoveOutcome::Moved => {
                if self.next_fruit_score > FRUIT_SCORE_MIN {
                    self.next_fruit_score -= 1;
                }
            }
        }

        Some(outcome)
    }

    /// Move the head one tile along the front queued heading.
    ///
    /// The tail is released before the collision check, so moving into the
    /// tile the tail is vacating this same step is legal.
    fn move_snake(&mut self) -> Option<MoveOutcome> {
        let direction = self.directions.front()?;
        let head = self.head()?;
        let new_head = head.step(direction);

        if !self.board.contains(new_head) {
            return Some(MoveOutcome::Collision(CollisionKind::Wall));
        }

        let mut prior = self.board.tile(new_head)?;
        if prior != TileState::Fruit && self.snake.len() > MIN_SNAKE_LENGTH {
            self.release_tail();
            prior = self.board.tile(new_head)?;
        }

        if prior == TileState::SnakeBody {
            return Some(MoveOutcome::Collision(CollisionKind::Body));
        }

        self.advance_head(new_head);
        self.directions.advance();

        Some(if prior == TileState::Fruit {
            MoveOutcome::AteFruit
        } else {
            MoveOutcome::Moved
        })
    }

    /// Push a new head: demote the old head to body on the board and mark the
    /// new one.
    fn advance_head(&mut self, at: Coordinate) {
        if let Some(&old) = self.snake.front() {
            self.board.set_tile(old, TileState::SnakeBody);
        }
        self.snake.push_front(at);
        self.board.set_tile(at, TileState::SnakeHead);
    }

    /// Drop the tail segment and clear its tile.
    fn release_tail(&mut self) {
        if let Some(tail) = self.snake.pop_back() {
            self.board.set_tile(tail, TileState::Empty);
        }
    }

    /// Place a fresh fruit and restore its full value.
    fn spawn_fruit(&mut self) {
        self.next_fruit_score = FRUIT_SCORE_MAX;
        match spawner::spawn_fruit(&mut self.board, self.snake.len(), &mut self.rng) {
            Ok(at) => debug!(x = at.x, y = at.y, "fruit spawned"),
            Err(err) => warn!(%err, "fruit not placed"),
        }
    }

    /// The logic clock only runs while a round is in play.
    fn sync_clock(&mut self) {
        self.clock.set_paused(!self.is_playing());
    }

    /// Queue a heading change.
    ///
    /// Only accepted while playing; same-axis turns and requests beyond the
    /// queue capacity are dropped. Returns whether the heading was queued.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.directions.push(direction)
    }

    /// Flip the pause flag. Ignored once the round is over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        self.sync_clock();
        true
    }

    /// Start a fresh round from the title screen or after game over.
    ///
    /// Rebuilds all round state: empty board, a one-tile snake at the center
    /// heading North, a fresh fruit, zeroed score. Ignored mid-round.
    pub fn reset_game(&mut self) -> bool {
        if !self.new_game && !self.game_over {
            return false;
        }

        self.score = 0;
        self.fruits_eaten = 0;
        self.new_game = false;
        self.game_over = false;
        self.paused = false;

        self.board.clear();
        self.snake.clear();
        let center = Coordinate::new(
            (self.board.width() / 2) as i32,
            (self.board.height() / 2) as i32,
        );
        self.advance_head(center);
        self.directions.seed(Direction::North);

        self.clock.reset();
        self.sync_clock();
        self.spawn_fruit();

        debug!(x = center.x, y = center.y, "round started");
        true
    }

    /// Apply an input action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(direction) => self.request_direction(direction),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => self.reset_game(),
        }
    }
}

impl Default for GameEngine<SimpleRng> {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
