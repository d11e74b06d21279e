//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No wall-clock reads; hold time is passed in
//! - No rendering or platform dependencies

pub mod collision;
pub mod control;
pub mod round;
pub mod state;
pub mod tick;

pub use collision::{deflect, paddle_contact, resolve_collisions, wall_bounce};
pub use control::{steer_paddle, steer_paddles};
pub use round::{advance_hold, check_round_won, check_scoring, start_next_round};
pub use state::{Ball, Direction, GameEvent, GamePhase, GameState, Paddle, Scores, Side};
pub use tick::{TickInput, tick};
