use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Largest board accepted by [`GameConfig::validate`]
pub const MAX_GRID_SIZE: usize = 256;

/// Configuration for a round of Snake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board dimension N; valid coordinates are in [0, N)
    pub grid_size: usize,
    /// Movement tick interval at round start, in milliseconds
    pub initial_tick_ms: u64,
    /// Tick interval never drops below this, in milliseconds
    pub min_tick_ms: u64,
    /// Multiplier applied to the tick interval each time food is eaten
    pub speed_factor: f64,
    /// Points awarded per food
    pub food_score: u32,
    /// Period of the elapsed-time clock, in milliseconds
    pub clock_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 18,
            initial_tick_ms: 340,
            min_tick_ms: 40,
            speed_factor: 0.9,
            food_score: 5,
            clock_interval_ms: 1000,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Reject settings that would make the game ill-defined
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridSize {
                got: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }
        if self.initial_tick_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.min_tick_ms == 0 || self.min_tick_ms > self.initial_tick_ms {
            return Err(ConfigError::MinTickInterval {
                got: self.min_tick_ms,
                initial: self.initial_tick_ms,
            });
        }
        if !(self.speed_factor > 0.0 && self.speed_factor <= 1.0) {
            return Err(ConfigError::SpeedFactor(self.speed_factor));
        }
        if self.clock_interval_ms == 0 {
            return Err(ConfigError::ZeroClockInterval);
        }
        Ok(())
    }

    /// Tick interval after one food at the given interval
    pub fn accelerated_tick(&self, tick_ms: u64) -> u64 {
        let next = (tick_ms as f64 * self.speed_factor) as u64;
        next.max(self.min_tick_ms)
    }
}
