//! Duel Pong - A two-player paddle-and-ball simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, rounds)
//! - `settings`: Immutable game configuration
//! - `input`: Input snapshot boundary and key bindings
//! - `render`: Render request boundary and sinks
//! - `driver`: Fixed-rate simulation loop

pub mod driver;
pub mod error;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use driver::{LoopControl, SimulationLoop};
pub use error::ConfigError;
pub use settings::Config;

/// Game configuration constants
pub mod consts {
    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 700.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Units per tick
    pub const PADDLE_VELOCITY: f32 = 4.0;
    /// Gap between a paddle and its wall
    pub const PADDLE_MARGIN: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 7.0;
    /// Horizontal speed is always exactly this; vertical speed never exceeds it
    pub const BALL_MAX_VELOCITY: f32 = 5.0;

    /// First side to reach this wins the round
    pub const WINNING_SCORE: u32 = 10;

    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Banner hold between rounds
    pub const ROUND_OVER_HOLD_MS: u64 = 5000;
}
