//! Food placement.

use bevy::prelude::*;
use rand::prelude::*;

use crate::game::Grid;

/// The single food item on the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub cell: IVec2,
}

impl Food {
    pub fn at(cell: IVec2) -> Self {
        Food { cell }
    }

    /// Places a new food item at a random cell.
    pub fn spawn(grid: &Grid, rng: &mut impl Rng) -> Self {
        let mut food = Food::at(IVec2::ZERO);
        food.relocate(grid, rng);
        food
    }

    /// Moves the food to a uniformly random cell in `[0, cols - 1) x [0, rows - 1)`.
    ///
    /// The last column and row are never chosen, and the snake's body is not
    /// checked, so food can land underneath it.
    pub fn relocate(&mut self, grid: &Grid, rng: &mut impl Rng) {
        self.cell = IVec2::new(
            rng.random_range(0..grid.cols - 1),
            rng.random_range(0..grid.rows - 1),
        );
        debug_assert!(grid.contains(self.cell));
    }
}
