//! Core game module containing shared state, configuration, events, and constants.

mod config;
mod constants;
mod direction;
mod events;
mod grid;
mod resources;
mod simulation;

pub use config::*;
pub use constants::*;
pub use direction::*;
pub use events::*;
pub use grid::*;
pub use resources::*;
pub use simulation::*;
