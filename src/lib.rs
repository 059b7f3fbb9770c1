//! Car Racer - A single-lane dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (obstacle advance, collisions, game state)
//! - `controller`: Event inbox and tick timer scheduling
//! - `view`: Pure projection of state into drawable frames
//! - `headless`: Window-less sessions for the native binary and tests
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Player preferences

pub mod controller;
pub mod headless;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod view;

pub use controller::{Controller, GameEvent, TimerCommand};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Car bounding box (player and obstacle share the same size)
    pub const CAR_WIDTH: f32 = 50.0;
    pub const CAR_HEIGHT: f32 = 70.0;

    /// Track dimensions
    pub const TRACK_WIDTH: f32 = 400.0;
    pub const TRACK_HEIGHT: f32 = 600.0;

    /// Obstacle fall speed (units per tick)
    pub const OBSTACLE_SPEED: f32 = 5.0;
    /// Horizontal player movement per key press
    pub const PLAYER_STEP: f32 = 10.0;

    /// Tick interval for the first run after mount (ms)
    pub const TICK_INTERVAL_MS: u32 = 10;
    /// Tick interval after a restart (ms), slower than the first run
    pub const RESTART_TICK_INTERVAL_MS: u32 = 30;
}

/// Largest x a car can occupy while staying on the track
#[inline]
pub fn max_car_x() -> f32 {
    consts::TRACK_WIDTH - consts::CAR_WIDTH
}

/// Player spawn point: horizontally centered, resting on the bottom edge
#[inline]
pub fn player_start() -> Vec2 {
    Vec2::new(
        consts::TRACK_WIDTH / 2.0 - consts::CAR_WIDTH / 2.0,
        consts::TRACK_HEIGHT - consts::CAR_HEIGHT,
    )
}
