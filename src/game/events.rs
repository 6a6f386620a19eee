//! Game events (messages).

use bevy::prelude::*;

/// Message triggered when the snake eats the food.
#[derive(Message, Debug, Clone, Copy)]
pub struct FoodEaten {
    pub cell: IVec2,
}

/// Message triggered when the snake runs into its own tail.
#[derive(Message, Debug, Clone, Copy)]
pub struct SnakeDied {
    pub score: u32,
    /// Length including the head.
    pub length: usize,
}
