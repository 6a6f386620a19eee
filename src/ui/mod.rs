//! UI plugin - window title readout, quit key, and game event reporting.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::game::{FoodEaten, FrameStats, GameConfig, Simulation, SnakeDied};

/// Plugin for window-level UI and game flow systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameStats>().add_systems(
            Update,
            (
                exit_on_escape,
                report_game_events,
                count_frames,
                update_window_title,
            )
                .chain(),
        );
    }
}

/// Title shown while the game runs.
pub fn window_title(base: &str, score: u32, fps: u32) -> String {
    format!("{base} | Score: {score} | FPS: {fps}")
}

/// System to close the app when Escape is released.
fn exit_on_escape(keyboard_input: Res<ButtonInput<KeyCode>>, mut app_exit: MessageWriter<AppExit>) {
    if keyboard_input.just_released(KeyCode::Escape) {
        info!("escape released, exiting");
        app_exit.write(AppExit::Success);
    }
}

/// System to log game events as they happen.
fn report_game_events(
    mut food_eaten_reader: MessageReader<FoodEaten>,
    mut died_reader: MessageReader<SnakeDied>,
) {
    for event in food_eaten_reader.read() {
        info!(cell = ?event.cell, "food eaten");
    }
    for event in died_reader.read() {
        info!(
            score = event.score,
            length = event.length,
            "snake ran into itself, game over"
        );
    }
}

/// System to feed the frame counter.
fn count_frames(time: Res<Time>, mut stats: ResMut<FrameStats>) {
    if stats.record_frame(time.delta()) {
        debug!(fps = stats.fps(), "frame rate sampled");
    }
}

/// System to embed score and frame rate in the window title.
fn update_window_title(
    config: Res<GameConfig>,
    simulation: Res<Simulation>,
    stats: Res<FrameStats>,
    mut window: Single<&mut Window, With<PrimaryWindow>>,
) {
    let title = window_title(&config.title, simulation.score, stats.fps());
    if window.title != title {
        window.title = title;
    }
}
