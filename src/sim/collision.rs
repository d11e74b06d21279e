//! Collision detection and response
//!
//! Two checks per tick, always in this order: top/bottom walls, then the
//! paddle the ball is travelling toward. Neither check corrects position;
//! they only change the ball's velocity.

use super::state::{Ball, GameEvent, GameState, Paddle, Side};

/// Flip vertical velocity if the ball touches the top or bottom wall.
///
/// Returns whether a bounce happened.
pub fn wall_bounce(ball: &mut Ball, field_height: f32) -> bool {
    if ball.pos.y + ball.radius >= field_height || ball.pos.y - ball.radius <= 0.0 {
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Whether the ball is touching the face of `paddle` on `side`.
///
/// The ball's center must lie within the paddle's vertical span, and its
/// leading edge must have reached the paddle's inner face.
pub fn paddle_contact(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    if !paddle.spans(ball.pos.y) {
        return false;
    }
    match side {
        Side::Left => ball.pos.x - ball.radius <= paddle.pos.x + paddle.size.x,
        Side::Right => ball.pos.x + ball.radius >= paddle.pos.x,
    }
}

/// Send the ball back with a vertical speed proportional to how far from
/// the paddle's center it hit.
///
/// Center maps to 0, the top edge to `-max_velocity` and the bottom edge to
/// `+max_velocity`. Horizontal speed keeps its magnitude.
pub fn deflect(ball: &mut Ball, paddle: &Paddle) {
    ball.vel.x = -ball.vel.x;

    let half_height = paddle.size.y / 2.0;
    let difference = paddle.center_y() - ball.pos.y;
    let reduction_factor = half_height / ball.max_velocity;
    ball.vel.y = -(difference / reduction_factor);
}

/// Side whose paddle the ball is heading toward
#[inline]
pub fn approaching_side(ball: &Ball) -> Side {
    if ball.vel.x < 0.0 { Side::Left } else { Side::Right }
}

/// Run wall then paddle resolution for one tick.
///
/// Events are appended in the order the collisions were resolved.
pub fn resolve_collisions(state: &mut GameState, field_height: f32, events: &mut Vec<GameEvent>) {
    if wall_bounce(&mut state.ball, field_height) {
        log::debug!("Wall bounce at y={:.1}", state.ball.pos.y);
        events.push(GameEvent::WallBounce);
    }

    let side = approaching_side(&state.ball);
    let paddle = match side {
        Side::Left => &state.left,
        Side::Right => &state.right,
    };
    if paddle_contact(&state.ball, paddle, side) {
        deflect(&mut state.ball, paddle);
        log::debug!(
            "{} paddle hit, ball leaves with vy={:.2}",
            side.as_str(),
            state.ball.vel.y
        );
        events.push(GameEvent::PaddleHit {
            side,
            velocity_y: state.ball.vel.y,
        });
    }
}
