mod food;
mod game;
mod rendering;
mod snake;
mod ui;

use bevy::{log::LogPlugin, prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

use food::Food;
use game::{BACKGROUND_COLOR, FoodEaten, GameConfig, GameRng, Simulation, SnakeDied};
use rendering::RenderingPlugin;
use snake::SnakePlugin;
use ui::UiPlugin;

fn main() -> AppExit {
    let config = GameConfig::default();

    let mut app = App::new();
    app.add_plugins((
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(config.window_width, config.window_height),
                    title: config.title.clone(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter: "wgpu=error,naga=warn,snake_gl=debug".to_string(),
                ..default()
            }),
        Shape2dPlugin::default(),
    ));

    let grid = match config.validate() {
        Ok(grid) => grid,
        Err(err) => {
            error!("invalid game configuration: {err}");
            return AppExit::error();
        }
    };
    info!(
        cols = grid.cols,
        rows = grid.rows,
        tick_seconds = config.tick_seconds(),
        "starting snake"
    );

    let mut rng = StdRng::from_os_rng();
    let food = Food::spawn(&grid, &mut rng);
    let simulation = Simulation::new(
        grid,
        config.initial_velocity,
        config.speed_increment,
        food,
    );

    app.insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(Time::<Fixed>::from_hz(config.tick_hz))
        .insert_resource(simulation)
        .insert_resource(GameRng(rng))
        .insert_resource(config)
        .add_message::<FoodEaten>()
        .add_message::<SnakeDied>()
        .add_plugins((SnakePlugin, RenderingPlugin, UiPlugin));

    app.run()
}
