//! Game state and core simulation types
//!
//! Everything the match needs lives here; nothing is shared outside the
//! simulation loop that owns a `GameState`.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::Config;

/// Which half of the field a paddle or score belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Vertical paddle direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
    /// Where `reset` puts the paddle back
    pub origin: Vec2,
    /// Distance covered by one `shift`
    pub velocity: f32,
}

impl Paddle {
    pub fn new(origin: Vec2, size: Vec2, velocity: f32) -> Self {
        Self {
            pos: origin,
            size,
            origin,
            velocity,
        }
    }

    pub fn for_side(config: &Config, side: Side) -> Self {
        Self::new(
            config.paddle_origin(side),
            Vec2::new(config.paddle_width, config.paddle_height),
            config.paddle_velocity,
        )
    }

    /// Move one step up or down. No clamping: the controller checks bounds
    /// before calling.
    pub fn shift(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.pos.y -= self.velocity,
            Direction::Down => self.pos.y += self.velocity,
        }
    }

    /// Return to the starting position
    pub fn reset(&mut self) {
        self.pos = self.origin;
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Whether a height falls within the paddle's vertical span (inclusive)
    #[inline]
    pub fn spans(&self, y: f32) -> bool {
        self.top() <= y && y <= self.bottom()
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Serve position
    pub origin: Vec2,
    /// Horizontal speed, and the cap on vertical speed
    pub max_velocity: f32,
}

impl Ball {
    /// A ball at `origin` heading right at full speed
    pub fn new(origin: Vec2, radius: f32, max_velocity: f32) -> Self {
        Self {
            pos: origin,
            vel: Vec2::new(max_velocity, 0.0),
            radius,
            origin,
            max_velocity,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.ball_origin(), config.ball_radius, config.ball_max_velocity)
    }

    /// Advance one tick along the current velocity
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Serve again from the center, flat, in the opposite horizontal direction
    pub fn reset(&mut self) {
        self.pos = self.origin;
        self.vel.y = 0.0;
        self.vel.x = -self.vel.x;
    }
}

/// Points per side for the current round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub left: u32,
    pub right: u32,
}

impl Scores {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Side that has reached `winning_score`, left first on a tie
    pub fn winner(&self, winning_score: u32) -> Option<Side> {
        Side::BOTH
            .into_iter()
            .find(|&side| self.get(side) >= winning_score)
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active play
    Playing,
    /// Winner banner up; no input, no physics until `remaining` runs out
    RoundOver { winner: Side, remaining: Duration },
}

/// Things that happened during a tick, in order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball's vertical velocity flipped off the top or bottom wall
    WallBounce,
    /// Ball deflected off a paddle, leaving with `velocity_y`
    PaddleHit { side: Side, velocity_y: f32 },
    /// Ball left the field; `scorer` gained a point
    PointScored { scorer: Side, scores: Scores },
    /// `winner` reached the winning score
    RoundWon { winner: Side, scores: Scores },
    /// Hold expired; scores cleared and positions reset
    RoundReset,
}

/// Complete match state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub scores: Scores,
    pub phase: GamePhase,
    /// Simulation ticks run so far (holds do not count)
    pub time_ticks: u64,
    /// Rounds completed
    pub rounds: u32,
}

impl GameState {
    pub fn new(config: &Config) -> Self {
        Self {
            left: Paddle::for_side(config, Side::Left),
            right: Paddle::for_side(config, Side::Right),
            ball: Ball::from_config(config),
            scores: Scores::default(),
            phase: GamePhase::Playing,
            time_ticks: 0,
            rounds: 0,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Winner of the round whose banner is up
    pub fn round_winner(&self) -> Option<Side> {
        match self.phase {
            GamePhase::RoundOver { winner, .. } => Some(winner),
            GamePhase::Playing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_layout() {
        let config = Config::default();
        let state = GameState::new(&config);
        assert_eq!(state.left.pos, Vec2::new(10.0, 200.0));
        assert_eq!(state.right.pos, Vec2::new(670.0, 200.0));
        assert_eq!(state.ball.pos, Vec2::new(350.0, 250.0));
        assert_eq!(state.ball.vel, Vec2::new(5.0, 0.0));
        assert_eq!(state.scores, Scores::default());
        assert!(state.is_playing());
    }

    #[test]
    fn test_paddle_shift() {
        let mut paddle = Paddle::new(Vec2::new(10.0, 200.0), Vec2::new(20.0, 100.0), 4.0);
        paddle.shift(Direction::Up);
        assert_eq!(paddle.pos.y, 196.0);
        paddle.shift(Direction::Down);
        paddle.shift(Direction::Down);
        assert_eq!(paddle.pos.y, 204.0);
        assert_eq!(paddle.pos.x, 10.0);
    }

    #[test]
    fn test_paddle_reset_is_idempotent() {
        let mut paddle = Paddle::new(Vec2::new(10.0, 200.0), Vec2::new(20.0, 100.0), 4.0);
        paddle.pos = Vec2::new(10.0, 12.0);
        paddle.reset();
        let once = paddle.pos;
        paddle.reset();
        assert_eq!(paddle.pos, once);
        assert_eq!(paddle.pos, paddle.origin);
    }

    #[test]
    fn test_paddle_spans_is_inclusive() {
        let paddle = Paddle::new(Vec2::new(10.0, 200.0), Vec2::new(20.0, 100.0), 4.0);
        assert!(paddle.spans(200.0));
        assert!(paddle.spans(300.0));
        assert!(!paddle.spans(199.9));
        assert!(!paddle.spans(300.1));
        assert_eq!(paddle.center_y(), 250.0);
    }

    #[test]
    fn test_ball_advance_is_unclamped() {
        let mut ball = Ball::new(Vec2::new(2.0, 250.0), 7.0, 5.0);
        ball.vel = Vec2::new(-5.0, 3.0);
        ball.advance();
        assert_eq!(ball.pos, Vec2::new(-3.0, 253.0));
    }

    #[test]
    fn test_ball_reset_flips_serve() {
        let mut ball = Ball::new(Vec2::new(350.0, 250.0), 7.0, 5.0);
        ball.pos = Vec2::new(710.0, 40.0);
        ball.vel = Vec2::new(5.0, -2.5);
        ball.reset();
        assert_eq!(ball.pos, Vec2::new(350.0, 250.0));
        assert_eq!(ball.vel, Vec2::new(-5.0, 0.0));
        ball.reset();
        assert_eq!(ball.vel.x, 5.0);
    }

    #[test]
    fn test_scores_winner_prefers_left() {
        let mut scores = Scores::default();
        assert_eq!(scores.winner(10), None);
        scores.right = 10;
        assert_eq!(scores.winner(10), Some(Side::Right));
        scores.left = 10;
        assert_eq!(scores.winner(10), Some(Side::Left));
        scores.clear();
        assert_eq!(scores, Scores::default());
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Left.opponent(), Side::Right);
        assert_eq!(Side::Right.opponent(), Side::Left);
    }
}
