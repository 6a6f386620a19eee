//! Playfield grid geometry: wraparound, discretization, and world-space mapping.
//!
//! Grid coordinates have their origin at the top-left cell with `y` growing
//! downward. World space is Bevy's 2D space: origin at the window centre, `y` up.

use bevy::prelude::*;

/// The fixed-size discrete playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub cols: i32,
    pub rows: i32,
}

impl Grid {
    pub fn new(cols: i32, rows: i32) -> Self {
        Grid { cols, rows }
    }

    /// Cell the snake spawns on.
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.cols / 2, self.rows / 2)
    }

    /// Wraps a continuous position onto the torus `[0, cols) x [0, rows)`.
    pub fn wrap(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            wrap_axis(position.x, self.cols as f32),
            wrap_axis(position.y, self.rows as f32),
        )
    }

    pub fn contains(&self, cell: IVec2) -> bool {
        (0..self.cols).contains(&cell.x) && (0..self.rows).contains(&cell.y)
    }

    /// World-space centre of the cell-sized square whose top-left corner sits at `position`.
    pub fn cell_center_world(&self, position: Vec2, cell_size: f32) -> Vec2 {
        Vec2::new(
            (position.x + 0.5 - self.cols as f32 / 2.0) * cell_size,
            (self.rows as f32 / 2.0 - position.y - 0.5) * cell_size,
        )
    }
}

/// Distance from a grid line below which a coordinate is treated as on it.
const GRID_LINE_EPSILON: f32 = 1e-4;

/// Pulls coordinates that rounding left just short of a grid line onto it,
/// so repeated sub-cell steps land exactly on cell boundaries.
pub fn snap_to_grid_lines(position: Vec2) -> Vec2 {
    Vec2::new(snap_axis(position.x), snap_axis(position.y))
}

/// Discretized position: the cell containing `position`.
pub fn cell_of(position: Vec2) -> IVec2 {
    position.floor().as_ivec2()
}

fn snap_axis(value: f32) -> f32 {
    let rounded = value.round();
    if (value - rounded).abs() < GRID_LINE_EPSILON {
        rounded
    } else {
        value
    }
}

fn wrap_axis(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid rounds tiny negative inputs up to exactly `extent`
    if wrapped >= extent { 0.0 } else { wrapped }
}
