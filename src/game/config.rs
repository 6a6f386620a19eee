//! Startup configuration and its validation.

use bevy::prelude::*;
use thiserror::Error;

use super::{
    CELL_SIZE, Grid, INITIAL_VELOCITY, SPEED_INCREMENT, TICK_HZ, WINDOW_HEIGHT, WINDOW_TITLE,
    WINDOW_WIDTH,
};

/// Reasons a [`GameConfig`] cannot be used to start the game.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("cell size must be non-zero")]
    ZeroCellSize,
    #[error("grid of {cols}x{rows} cells is too small, need at least 2x2")]
    GridTooSmall { cols: u32, rows: u32 },
    #[error("tick rate must be a positive number of hertz, got {0}")]
    InvalidTickRate(f64),
    #[error("initial velocity must be positive, got {0}")]
    InvalidVelocity(f32),
    #[error("speed increment must not be negative, got {0}")]
    InvalidSpeedIncrement(f32),
}

/// Fixed configuration of a game session. Defaults are the compile-time constants.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub cell_size: u32,
    pub tick_hz: f64,
    pub initial_velocity: f32,
    pub speed_increment: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            title: WINDOW_TITLE.to_string(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            cell_size: CELL_SIZE,
            tick_hz: TICK_HZ,
            initial_velocity: INITIAL_VELOCITY,
            speed_increment: SPEED_INCREMENT,
        }
    }
}

impl GameConfig {
    /// Checks the configuration and derives the playfield grid from it.
    pub fn validate(&self) -> Result<Grid, ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        let cols = self.window_width / self.cell_size;
        let rows = self.window_height / self.cell_size;
        // Food is drawn from [0, cols - 1), which is empty below two cells
        if cols < 2 || rows < 2 {
            return Err(ConfigError::GridTooSmall { cols, rows });
        }

        if !self.tick_hz.is_finite() || self.tick_hz <= 0.0 {
            return Err(ConfigError::InvalidTickRate(self.tick_hz));
        }
        if !self.initial_velocity.is_finite() || self.initial_velocity <= 0.0 {
            return Err(ConfigError::InvalidVelocity(self.initial_velocity));
        }
        if !self.speed_increment.is_finite() || self.speed_increment < 0.0 {
            return Err(ConfigError::InvalidSpeedIncrement(self.speed_increment));
        }

        Ok(Grid::new(cols as i32, rows as i32))
    }

    /// Duration of one simulation tick in seconds.
    pub fn tick_seconds(&self) -> f64 {
        1.0 / self.tick_hz
    }
}
