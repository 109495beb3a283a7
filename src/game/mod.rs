//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O, audio or rendering
//! dependencies. The terminal front-end drives it one tick at a time.

pub mod config;
pub mod direction;
pub mod engine;
pub mod rules;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use rules::{is_collision, move_snake, spawn_food};
pub use state::{CollisionType, GameState, GameStatus, Position, Snake};
