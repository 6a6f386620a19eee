//! The per-tick game state update.

use bevy::prelude::*;
use rand::Rng;

use super::{Grid, InputSnapshot};
use crate::food::Food;
use crate::snake::{Snake, Step};

/// All game state, owned by the app and mutated only by the tick and steering systems.
#[derive(Resource, Debug, Clone)]
pub struct Simulation {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Food,
    /// Growths applied so far; always equal to the tail length.
    pub score: u32,
    /// Velocity added to the snake per food item.
    pub speed_increment: f32,
}

/// What a single [`Simulation::tick`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub step: Step,
    /// Cell of the food eaten this tick.
    pub ate: Option<IVec2>,
}

impl Simulation {
    pub fn new(grid: Grid, initial_velocity: f32, speed_increment: f32, food: Food) -> Self {
        Simulation {
            grid,
            snake: Snake::spawn(&grid, initial_velocity),
            food,
            score: 0,
            speed_increment,
        }
    }

    /// Applies this frame's input to the snake's heading. Dead snakes ignore input.
    pub fn steer(&mut self, input: &InputSnapshot) {
        if self.snake.alive {
            self.snake.direction = input.resolve(self.snake.direction);
        }
    }

    /// Advances the game by one fixed timestep.
    pub fn tick(&mut self, rng: &mut impl Rng) -> TickReport {
        if !self.snake.alive {
            return TickReport::default();
        }

        let mut report = TickReport {
            step: self.snake.advance(&self.grid),
            ..default()
        };
        if report.step.grew {
            self.score += 1;
        }

        let head = self.snake.head_cell();
        if head == self.food.cell {
            report.ate = Some(head);
            self.snake.growing = true;
            self.snake.velocity += self.speed_increment;
            self.food.relocate(&self.grid, rng);

            if self.snake.occupies(self.food.cell) {
                debug!(cell = ?self.food.cell, "food placed under the snake");
            }
        }

        report
    }
}
