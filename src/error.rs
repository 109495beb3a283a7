//! Error types for configuration validation.
//!
//! Game transitions never fail; the only structured errors are invalid
//! settings, which are rejected before a round is created.

use thiserror::Error;

/// Invalid configuration value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid size must be between 1 and {max}, got {got}")]
    GridSize { got: usize, max: usize },

    #[error("initial tick interval must be positive")]
    ZeroTickInterval,

    #[error("minimum tick interval must be in 1..={initial} ms, got {got}")]
    MinTickInterval { got: u64, initial: u64 },

    #[error("speed factor must be in (0.0, 1.0], got {0}")]
    SpeedFactor(f64),

    #[error("clock interval must be positive")]
    ZeroClockInterval,

    #[error("volume must be in [0.0, 1.0], got {0}")]
    Volume(f32),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
