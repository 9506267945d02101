//! Game settings
//!
//! Everything the simulation consumes but does not own: playfield size,
//! paddle and ball tuning, brick grid shape, and rule toggles. Loaded from
//! JSON (any omitted field keeps its default) and validated once at startup.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::BrickKind;

/// Playfield and frame pacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenSettings {
    pub width: f32,
    pub height: f32,
    pub fps: u32,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            fps: FPS,
        }
    }
}

/// Player paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatSettings {
    pub width: f32,
    pub height: f32,
    /// Pixels per frame
    pub speed: f32,
    /// Distance from the playfield bottom to the bat's top edge
    pub y_offset_from_bottom: f32,
}

impl Default for BatSettings {
    fn default() -> Self {
        Self {
            width: BAT_WIDTH,
            height: BAT_HEIGHT,
            speed: BAT_SPEED,
            y_offset_from_bottom: BAT_Y_OFFSET_FROM_BOTTOM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    pub width: f32,
    pub height: f32,
    /// Per-axis speed of a freshly served ball
    pub serve_speed: f32,
    /// Per-axis cap applied after every velocity change
    pub max_speed: f32,
    pub serve_height_above_bat: f32,
    /// Horizontal kick for a contact at the bat's very edge
    pub paddle_english: f32,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            width: BALL_SIZE,
            height: BALL_SIZE,
            serve_speed: BALL_SERVE_SPEED,
            max_speed: BALL_MAX_SPEED,
            serve_height_above_bat: BALL_SERVE_HEIGHT,
            paddle_english: PADDLE_ENGLISH,
        }
    }
}

/// Durability and reward of one brick kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickStats {
    pub hits: u32,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickSettings {
    pub width: f32,
    pub height: f32,
    pub gap: f32,
    pub top_margin: f32,
    pub side_margin: f32,
    pub rows: u32,
    pub cols: u32,
    /// Leading rows laid out as Hard bricks
    pub hard_rows: u32,
    /// Chance that a non-Hard brick is upgraded to Power
    pub power_chance: f64,
    pub soft: BrickStats,
    pub hard: BrickStats,
    pub power: BrickStats,
}

impl Default for BrickSettings {
    fn default() -> Self {
        Self {
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            gap: BRICK_GAP,
            top_margin: BRICK_TOP_MARGIN,
            side_margin: BRICK_SIDE_MARGIN,
            rows: BRICK_ROWS,
            cols: BRICK_COLS,
            hard_rows: HARD_ROWS,
            power_chance: POWER_CHANCE,
            soft: BrickStats { hits: 2, points: 60 },
            hard: BrickStats { hits: 3, points: 120 },
            power: BrickStats { hits: 3, points: 150 },
        }
    }
}

impl BrickSettings {
    pub fn stats(&self, kind: BrickKind) -> BrickStats {
        match kind {
            BrickKind::Soft => self.soft,
            BrickKind::Hard => self.hard,
            BrickKind::Power => self.power,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSettings {
    pub start_lives: u32,
    /// Every brick contact sends the ball downward, whatever the reflection said
    pub force_ball_down_after_brick: bool,
    /// Points for a scored hit that leaves the brick standing.
    /// `None` awards points only on destruction.
    pub partial_hit_bonus: Option<u32>,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            start_lives: START_LIVES,
            force_ball_down_after_brick: true,
            partial_hit_bonus: None,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub screen: ScreenSettings,
    pub bat: BatSettings,
    pub ball: BallSettings,
    pub bricks: BrickSettings,
    pub rules: RuleSettings,
}

impl Settings {
    /// Parse settings from JSON text and validate them
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a JSON settings file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check startup preconditions. The simulation assumes these hold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.screen;
        if !(s.width > 0.0) || !(s.height > 0.0) {
            return Err(ConfigError::invalid("screen", "playfield must have a positive size"));
        }
        if s.fps == 0 {
            return Err(ConfigError::invalid("screen.fps", "must be at least 1"));
        }

        let bat = &self.bat;
        if !(bat.width > 0.0) || !(bat.height > 0.0) {
            return Err(ConfigError::invalid("bat", "bat must have a positive size"));
        }
        if bat.width > s.width {
            return Err(ConfigError::invalid("bat.width", "bat is wider than the playfield"));
        }
        if !(bat.speed > 0.0) {
            return Err(ConfigError::invalid("bat.speed", "must be positive"));
        }
        if bat.y_offset_from_bottom < 0.0 || bat.y_offset_from_bottom > s.height {
            return Err(ConfigError::invalid(
                "bat.y_offset_from_bottom",
                "bat must sit inside the playfield",
            ));
        }

        let ball = &self.ball;
        if !(ball.width > 0.0) || !(ball.height > 0.0) {
            return Err(ConfigError::invalid("ball", "ball must have a positive size"));
        }
        if !(ball.max_speed > 0.0) {
            return Err(ConfigError::invalid("ball.max_speed", "must be positive"));
        }
        if !(ball.serve_speed > 0.0) || ball.serve_speed > ball.max_speed {
            return Err(ConfigError::invalid(
                "ball.serve_speed",
                format!("must be in (0, {}]", ball.max_speed),
            ));
        }

        let bricks = &self.bricks;
        if bricks.rows == 0 || bricks.cols == 0 {
            return Err(ConfigError::invalid("bricks", "grid needs at least one row and column"));
        }
        if !(bricks.width > 0.0) || !(bricks.height > 0.0) || bricks.gap < 0.0 {
            return Err(ConfigError::invalid("bricks", "cell size must be positive"));
        }
        if !(0.0..=1.0).contains(&bricks.power_chance) {
            return Err(ConfigError::invalid("bricks.power_chance", "must be in [0, 1]"));
        }
        for (field, stats) in [
            ("bricks.soft.hits", bricks.soft),
            ("bricks.hard.hits", bricks.hard),
            ("bricks.power.hits", bricks.power),
        ] {
            if stats.hits == 0 {
                return Err(ConfigError::invalid(field, "a brick needs at least one hit"));
            }
        }

        if self.rules.start_lives == 0 {
            return Err(ConfigError::invalid("rules.start_lives", "must be at least 1"));
        }

        Ok(())
    }
}
