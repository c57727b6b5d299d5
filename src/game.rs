use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::config::FOOD_REWARD;
use crate::food;
use crate::grid::{Cell, GridSize, is_out_of_bounds, is_self_collision};
use crate::input::{Direction, direction_change_is_valid};
use crate::snake::Snake;
use crate::tint::Tint;

/// Lifecycle phase of one game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    GameOver,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
    /// The snake covers every cell, so no food can be placed.
    BoardFull,
}

/// Result of one call to [`GameState::advance`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The game was not running; nothing changed.
    Ignored,
    Moved,
    Ate,
    Ended(EndReason),
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    /// Current food cell; `None` only once the board is full.
    pub food: Option<Cell>,
    pub direction: Direction,
    pub pending_direction: Direction,
    pub score: u32,
    pub high_score: u32,
    pub phase: Phase,
    pub tint: Tint,
    pub end_reason: Option<EndReason>,
    /// Set once this game's score has beaten the best it started with.
    pub new_best: bool,
    tick_count: u64,
    grid: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh idle game seeded from system entropy.
    #[must_use]
    pub fn new(grid: GridSize, high_score: u32) -> Self {
        Self::with_rng(grid, high_score, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(grid: GridSize, high_score: u32, seed: u64) -> Self {
        Self::with_rng(grid, high_score, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: GridSize, high_score: u32, mut rng: StdRng) -> Self {
        let snake = Snake::initial(grid);
        let food = food::place(&mut rng, grid, &snake);
        debug_assert!(food.is_some(), "a fresh board always has free cells");

        Self {
            snake,
            food,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            score: 0,
            high_score,
            phase: Phase::Idle,
            tint: Tint::Neutral,
            end_reason: None,
            new_best: false,
            tick_count: 0,
            grid,
            rng,
        }
    }

    /// Restores the starting layout. Only the high score and the RNG stream
    /// carry over.
    pub fn reset(&mut self) {
        self.snake = Snake::initial(self.grid);
        self.food = food::place(&mut self.rng, self.grid, &self.snake);
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
        self.phase = Phase::Idle;
        self.tint = Tint::Neutral;
        self.end_reason = None;
        self.new_best = false;
        self.tick_count = 0;
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Ticks that moved the snake since the game was created or reset.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Buffers a direction for the next tick.
    ///
    /// A request opposite to the direction the snake is currently moving in is
    /// dropped. Otherwise the latest request replaces any earlier one.
    /// Returns whether the request was accepted.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction) {
            return false;
        }

        self.pending_direction = direction;
        true
    }

    /// Advances simulation by one gameplay tick.
    pub fn advance(&mut self) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Ignored;
        }

        debug_assert!(!self.snake.is_empty(), "running game without a snake");

        self.direction = self.pending_direction;
        let new_head = self.snake.head().step(self.direction);

        if is_out_of_bounds(new_head, self.grid) {
            return self.end(EndReason::WallCollision);
        }

        if is_self_collision(new_head, self.snake.body_without_tail()) {
            return self.end(EndReason::SelfCollision);
        }

        self.tick_count += 1;
        self.snake.push_head(new_head);

        if self.food != Some(new_head) {
            self.snake.pop_tail();
            return TickOutcome::Moved;
        }

        self.score += FOOD_REWARD;
        if self.score > self.high_score {
            self.high_score = self.score;
            self.new_best = true;
        }
        self.tint = Tint::random(&mut self.rng);

        self.food = food::place(&mut self.rng, self.grid, &self.snake);
        match self.food {
            Some(cell) => {
                debug!(x = cell.x, y = cell.y, "food placed");
                TickOutcome::Ate
            }
            None => self.end(EndReason::BoardFull),
        }
    }

    fn end(&mut self, reason: EndReason) -> TickOutcome {
        self.phase = Phase::GameOver;
        self.end_reason = Some(reason);
        TickOutcome::Ended(reason)
    }

    /// Returns a read-only copy of everything a renderer needs.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.segments().copied().collect(),
            food: self.food,
            direction: self.direction,
            score: self.score,
            high_score: self.high_score,
            phase: self.phase,
            tint: self.tint,
            end_reason: self.end_reason,
            new_best: self.new_best,
            grid: self.grid,
        }
    }
}

/// Owned view of a [`GameState`] handed to render targets.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    /// Snake cells, head first.
    pub snake: Vec<Cell>,
    pub food: Option<Cell>,
    pub direction: Direction,
    pub score: u32,
    pub high_score: u32,
    pub phase: Phase,
    pub tint: Tint,
    pub end_reason: Option<EndReason>,
    /// The score beat the previous best during this game.
    pub new_best: bool,
    pub grid: GridSize,
}
