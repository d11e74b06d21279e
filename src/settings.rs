//! Game configuration
//!
//! A single immutable value handed to every simulation component. Loaded
//! from JSON; any key left out takes the documented default.

use std::fs;
use std::path::Path;
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Side;

/// Field, paddle, ball, and pacing constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance moved per tick while a key is held
    pub paddle_velocity: f32,
    /// Gap between each paddle and its own wall
    pub paddle_margin: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_max_velocity: f32,

    // === Rules ===
    pub winning_score: u32,

    // === Pacing ===
    /// Ticks per second
    pub tick_rate: u32,
    /// Banner hold between rounds (milliseconds of real time)
    pub round_over_hold_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_velocity: PADDLE_VELOCITY,
            paddle_margin: PADDLE_MARGIN,

            ball_radius: BALL_RADIUS,
            ball_max_velocity: BALL_MAX_VELOCITY,

            winning_score: WINNING_SCORE,

            tick_rate: TICK_RATE,
            round_over_hold_ms: ROUND_OVER_HOLD_MS,
        }
    }
}

impl Config {
    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Config saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Reject configurations the simulation cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("field_width", self.field_width)?;
        positive("field_height", self.field_height)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("paddle_velocity", self.paddle_velocity)?;
        positive("ball_radius", self.ball_radius)?;
        positive("ball_max_velocity", self.ball_max_velocity)?;

        if !self.paddle_margin.is_finite() || self.paddle_margin < 0.0 {
            return Err(ConfigError::invalid(
                "paddle_margin",
                format!("must be a non-negative number, got {}", self.paddle_margin),
            ));
        }
        if self.paddle_height > self.field_height {
            return Err(ConfigError::invalid(
                "paddle_height",
                format!(
                    "{} does not fit in a field {} high",
                    self.paddle_height, self.field_height
                ),
            ));
        }
        if 2.0 * (self.paddle_margin + self.paddle_width) >= self.field_width {
            return Err(ConfigError::invalid(
                "paddle_width",
                "left and right paddles would overlap",
            ));
        }
        if 2.0 * self.ball_radius >= self.field_height {
            return Err(ConfigError::invalid(
                "ball_radius",
                format!("ball does not fit in a field {} high", self.field_height),
            ));
        }
        if self.winning_score == 0 {
            return Err(ConfigError::invalid("winning_score", "must be at least 1"));
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::invalid("tick_rate", "must be at least 1"));
        }
        Ok(())
    }

    /// Real time covered by one tick
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }

    /// Real time the winner banner stays up before the next round
    pub fn round_over_hold(&self) -> Duration {
        Duration::from_millis(self.round_over_hold_ms)
    }

    /// Top-left corner a paddle starts at and returns to
    pub fn paddle_origin(&self, side: Side) -> Vec2 {
        let x = match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.field_width - self.paddle_margin - self.paddle_width,
        };
        let y = half_floor(self.field_height) - half_floor(self.paddle_height);
        Vec2::new(x, y)
    }

    /// Field center, where the ball is served from
    pub fn ball_origin(&self) -> Vec2 {
        Vec2::new(half_floor(self.field_width), half_floor(self.field_height))
    }
}

/// Half of a length, rounded down to whole field units
fn half_floor(length: f32) -> f32 {
    (length / 2.0).floor()
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("must be a positive number, got {value}"),
        ))
    }
}
