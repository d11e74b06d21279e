//! Paddle control
//!
//! Turns held keys into paddle steps, keeping every paddle inside the field.

use super::state::{Direction, GameState, Paddle, Side};
use super::tick::TickInput;

/// Apply one paddle's up/down keys.
///
/// Both bound checks are made against the paddle's position before this
/// tick, so holding both keys moves up and then back down when both checks
/// pass (net zero), and moves one way only when the other is blocked.
pub fn steer_paddle(paddle: &mut Paddle, up: bool, down: bool, field_height: f32) {
    let y = paddle.pos.y;
    let can_up = up && y - paddle.velocity >= 0.0;
    let can_down = down && y + paddle.velocity + paddle.size.y <= field_height;

    if can_up {
        paddle.shift(Direction::Up);
    }
    if can_down {
        paddle.shift(Direction::Down);
    }
}

/// Apply the input snapshot to both paddles independently
pub fn steer_paddles(state: &mut GameState, input: &TickInput, field_height: f32) {
    for side in Side::BOTH {
        let (up, down) = input.keys_for(side);
        steer_paddle(state.paddle_mut(side), up, down, field_height);
    }
}
