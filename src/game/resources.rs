//! Game resources (singleton state).

use bevy::prelude::*;
use rand::rngs::StdRng;
use std::time::Duration;

use super::Direction;

/// Random source for food placement.
#[derive(Resource)]
pub struct GameRng(pub StdRng);

/// Movement keys held during the current frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputSnapshot {
    /// Reads W/A/S/D and the arrow keys.
    pub fn from_keys(keyboard_input: &ButtonInput<KeyCode>) -> Self {
        InputSnapshot {
            up: keyboard_input.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]),
            down: keyboard_input.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]),
            left: keyboard_input.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]),
            right: keyboard_input.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]),
        }
    }

    /// Direction for the next tick given the current one.
    ///
    /// Held keys are checked in the fixed order up, down, left, right. Each
    /// one that is not the reverse of `current` replaces the result, so with
    /// several keys held the last accepted one in that order wins.
    pub fn resolve(&self, current: Direction) -> Direction {
        [
            (self.up, Direction::Up),
            (self.down, Direction::Down),
            (self.left, Direction::Left),
            (self.right, Direction::Right),
        ]
        .into_iter()
        .filter(|&(held, requested)| held && current.steer(requested) == requested)
        .map(|(_, requested)| requested)
        .last()
        .unwrap_or(current)
    }
}

/// Frame counter behind the frames-per-second readout.
#[derive(Resource, Debug, Default)]
pub struct FrameStats {
    frames: u32,
    elapsed: Duration,
    fps: u32,
}

impl FrameStats {
    /// Counts one rendered frame. Returns true when a full second has
    /// accumulated and `fps` was recomputed.
    pub fn record_frame(&mut self, delta: Duration) -> bool {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed < Duration::from_secs(1) {
            return false;
        }

        self.fps = (self.frames as f64 / self.elapsed.as_secs_f64()).round() as u32;
        self.frames = 0;
        self.elapsed = Duration::ZERO;
        true
    }

    /// Frames per second measured over the last completed second.
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
