use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{
    config::GameConfig,
    direction::Direction,
    rules::{is_collision, move_snake, spawn_food},
    state::{CollisionType, GameState, GameStatus, Position, Snake},
};
use crate::error::Result;

/// Information about a step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the round has ended
    pub terminated: bool,
    /// Whether the movement interval changed this step
    pub speed_changed: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn idle(terminated: bool) -> Self {
        Self {
            terminated,
            speed_changed: false,
            info: StepInfo::default(),
        }
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine, rejecting an invalid configuration
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::from_entropy(),
        })
    }

    /// Engine with a fixed food sequence
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh round: one centred cell heading right at the initial speed
    pub fn reset(&mut self) -> GameState {
        let center = (self.config.grid_size / 2) as i32;
        let snake = Snake::new(Position::new(center, center));

        let (food, status) = match spawn_food(&snake, self.config.grid_size, &mut self.rng) {
            Some(food) => (food, GameStatus::Running),
            // A 1x1 board is already full
            None => (snake.head(), GameStatus::Won),
        };

        let mut state = GameState::new(
            snake,
            food,
            self.config.grid_size,
            self.config.initial_tick_ms,
        );
        state.status = status;
        tracing::debug!(?food, grid_size = state.grid_size, "round reset");
        state
    }

    /// Execute one movement tick using the queued heading
    pub fn tick(&mut self, state: &mut GameState) -> StepResult {
        let direction = state.next_direction;
        self.step(state, direction)
    }

    /// Pure form of [`GameEngine::step`]: returns the successor state
    pub fn advance(&mut self, state: &GameState, direction: Direction) -> GameState {
        let mut next = state.clone();
        self.step(&mut next, direction);
        next
    }

    /// Move the snake one cell in `direction`.
    ///
    /// Reversal is not rejected here; see [`GameState::request_direction`].
    pub fn step(&mut self, state: &mut GameState, direction: Direction) -> StepResult {
        if !state.is_running() {
            return StepResult::idle(state.is_over());
        }

        state.direction = direction;
        state.next_direction = direction;
        state.steps += 1;

        let moved = move_snake(&state.snake, direction);

        if moved.head() == state.food {
            return self.eat(state);
        }

        state.snake = moved;

        if is_collision(&state.snake, state.grid_size) {
            let collision_type = if state.is_in_bounds(state.snake.head()) {
                CollisionType::SelfCollision
            } else {
                CollisionType::Wall
            };
            state.status = GameStatus::GameOver;
            tracing::info!(score = state.score, steps = state.steps, ?collision_type, "game over");

            return StepResult {
                terminated: true,
                speed_changed: false,
                info: StepInfo {
                    ate_food: false,
                    collision_type: Some(collision_type),
                },
            };
        }

        StepResult::idle(false)
    }

    /// Grow onto the food cell, score it and speed up
    fn eat(&mut self, state: &mut GameState) -> StepResult {
        state.snake = state.snake.grown_to(state.food);
        state.score += self.config.food_score;

        let previous_tick = state.tick_ms;
        state.tick_ms = self.config.accelerated_tick(previous_tick);

        let terminated = match spawn_food(&state.snake, state.grid_size, &mut self.rng) {
            Some(food) => {
                state.food = food;
                false
            }
            None => {
                state.status = GameStatus::Won;
                tracing::info!(score = state.score, "board filled");
                true
            }
        };

        tracing::debug!(
            score = state.score,
            length = state.snake.len(),
            tick_ms = state.tick_ms,
            "food eaten"
        );

        StepResult {
            terminated,
            speed_changed: state.tick_ms != previous_tick,
            info: StepInfo {
                ate_food: true,
                collision_type: None,
            },
        }
    }
}
