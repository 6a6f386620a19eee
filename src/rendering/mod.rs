//! Rendering plugin - draws the playfield from the simulation state every frame.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::game::{
    ARENA_BORDER_COLOR, BORDER_THICKNESS, CORNER_RADIUS, DEAD_SNAKE_COLOR, FOOD_COLOR,
    GameConfig, SNAKE_HEAD_COLOR, SNAKE_SEGMENT_COLOR, Simulation, Z_BORDER, Z_FOOD, Z_SNAKE_HEAD,
    Z_SNAKE_SEGMENT,
};

/// Plugin for immediate-mode drawing of the game.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, (draw_border, draw_food, draw_snake).chain());
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// System to outline the playfield.
fn draw_border(mut painter: ShapePainter, config: Res<GameConfig>, simulation: Res<Simulation>) {
    let cell_size = config.cell_size as f32;
    let size = Vec2::new(
        simulation.grid.cols as f32 * cell_size,
        simulation.grid.rows as f32 * cell_size,
    );

    painter.reset();
    painter.hollow = true;
    painter.thickness = BORDER_THICKNESS;
    painter.color = ARENA_BORDER_COLOR;
    painter.set_translation(Vec3::new(0.0, 0.0, Z_BORDER));
    painter.rect(size);
}

/// System to draw the food item.
fn draw_food(mut painter: ShapePainter, config: Res<GameConfig>, simulation: Res<Simulation>) {
    let cell_size = config.cell_size as f32;
    let center = simulation
        .grid
        .cell_center_world(simulation.food.cell.as_vec2(), cell_size);

    painter.reset();
    painter.color = FOOD_COLOR;
    painter.set_translation(center.extend(Z_FOOD));
    painter.circle(cell_size * 0.45);
}

/// System to draw tail segments on their cells and the head at its continuous position.
fn draw_snake(mut painter: ShapePainter, config: Res<GameConfig>, simulation: Res<Simulation>) {
    let cell_size = config.cell_size as f32;
    let grid = simulation.grid;
    let snake = &simulation.snake;
    // Normalize corner radius relative to the shape size (0.0 to 1.0 range)
    let corner_radius_normalized = CORNER_RADIUS / (cell_size / 2.0);

    painter.reset();
    painter.corner_radii = Vec4::splat(corner_radius_normalized);
    painter.color = if snake.alive {
        SNAKE_SEGMENT_COLOR
    } else {
        DEAD_SNAKE_COLOR
    };
    for segment in &snake.tail {
        let center = grid.cell_center_world(segment.as_vec2(), cell_size);
        painter.set_translation(center.extend(Z_SNAKE_SEGMENT));
        painter.rect(Vec2::splat(cell_size * 0.9));
    }

    painter.color = SNAKE_HEAD_COLOR;
    let head = grid.cell_center_world(snake.head, cell_size);
    painter.set_translation(head.extend(Z_SNAKE_HEAD));
    painter.rect(Vec2::splat(cell_size));
}
