//! Game constants for window size, grid, timing, colors, and rendering layers.

use bevy::prelude::*;

// Window
pub const WINDOW_TITLE: &str = "Snake Game";
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;

// Grid
pub const CELL_SIZE: u32 = 20;

// Timing
pub const TICK_HZ: f64 = 60.0;

// Snake speed, in cells per tick
pub const INITIAL_VELOCITY: f32 = 0.1;
pub const SPEED_INCREMENT: f32 = 0.02;

// Visual settings
pub const CORNER_RADIUS: f32 = 3.0;
pub const BORDER_THICKNESS: f32 = 2.0;

// Colors
pub const SNAKE_HEAD_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 1.0);
pub const SNAKE_SEGMENT_COLOR: Color = Color::srgba(0.7, 0.7, 0.7, 1.0);
pub const DEAD_SNAKE_COLOR: Color = Color::srgba(0.6, 0.2, 0.2, 1.0);
pub const FOOD_COLOR: Color = Color::srgba(1.0, 0.0, 0.0, 1.0);
pub const ARENA_BORDER_COLOR: Color = Color::srgba(0.3, 0.3, 0.3, 1.0);
pub const BACKGROUND_COLOR: Color = Color::srgba(0.04, 0.04, 0.04, 1.0);

// Z-index constants for rendering layers
pub const Z_BORDER: f32 = 0.0;
pub const Z_FOOD: f32 = 1.0;
pub const Z_SNAKE_SEGMENT: f32 = 1.5;
pub const Z_SNAKE_HEAD: f32 = 2.0;
