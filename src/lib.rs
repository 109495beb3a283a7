//! Snake - a terminal Snake game
//!
//! This library provides:
//! - Core game logic (game module): movement, growth, collision, speed-up
//! - TUI rendering (render module) and keyboard input (input module)
//! - A looping soundtrack tied to the round lifecycle (audio module)
//! - The interactive play loop (modes module)

pub mod audio;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
