//! Brick Breaker - paddle, balls and a wall of destructible bricks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (rectangle collisions, round state machine)
//! - `settings`: Configuration surface consumed by the simulation
//! - `audio`: Sound cue seam for an external audio backend
//! - `error`: Startup configuration errors

pub mod audio;
pub mod error;
pub mod settings;
pub mod sim;

pub use audio::{AudioSink, LogAudio, NullAudio, SoundEffect};
pub use error::ConfigError;
pub use settings::Settings;

/// Game configuration defaults
pub mod consts {
    /// Frame rate the driver paces the simulation at
    pub const FPS: u32 = 120;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 900.0;
    pub const SCREEN_HEIGHT: f32 = 900.0;

    /// Bat defaults
    pub const BAT_WIDTH: f32 = 120.0;
    pub const BAT_HEIGHT: f32 = 20.0;
    /// Horizontal pixels per frame while a move key is held
    pub const BAT_SPEED: f32 = 9.0;
    pub const BAT_Y_OFFSET_FROM_BOTTOM: f32 = 55.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 18.0;
    /// Per-axis speed a ball is served with
    pub const BALL_SERVE_SPEED: f32 = 4.0;
    /// Per-axis speed cap
    pub const BALL_MAX_SPEED: f32 = 6.0;
    /// Serve point above the bat's top edge
    pub const BALL_SERVE_HEIGHT: f32 = 20.0;
    /// Horizontal kick per unit of off-center paddle contact
    pub const PADDLE_ENGLISH: f32 = 3.5;

    /// Brick grid defaults
    pub const BRICK_WIDTH: f32 = 80.0;
    pub const BRICK_HEIGHT: f32 = 50.0;
    pub const BRICK_GAP: f32 = 6.0;
    pub const BRICK_TOP_MARGIN: f32 = 50.0;
    pub const BRICK_SIDE_MARGIN: f32 = 10.0;
    pub const BRICK_ROWS: u32 = 7;
    pub const BRICK_COLS: u32 = 10;
    /// Leading rows that are always Hard
    pub const HARD_ROWS: u32 = 2;
    pub const POWER_CHANCE: f64 = 0.10;

    /// Rules
    pub const START_LIVES: u32 = 5;
}

/// Bound `value` to `[low, high]`
#[inline]
pub fn clamp(value: f32, low: f32, high: f32) -> f32 {
    low.max(high.min(value))
}
