//! Fixed timestep simulation tick
//!
//! One call advances the match by exactly one frame of motion.

use serde::{Deserialize, Serialize};

use super::collision::resolve_collisions;
use super::control::steer_paddles;
use super::round::{check_round_won, check_scoring};
use super::state::{GameEvent, GameState, Side};
use crate::settings::Config;

/// Logical keys held during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

impl TickInput {
    /// (up, down) keys for one side
    pub fn keys_for(&self, side: Side) -> (bool, bool) {
        match side {
            Side::Left => (self.left_up, self.left_down),
            Side::Right => (self.right_up, self.right_down),
        }
    }
}

/// Advance the game state by one tick.
///
/// Order: paddles, ball motion, collisions, scoring, win check. Does nothing
/// outside `Playing`; the round-over hold is spent with
/// [`advance_hold`](super::round::advance_hold) instead.
pub fn tick(state: &mut GameState, input: &TickInput, config: &Config) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_playing() {
        return events;
    }

    state.time_ticks += 1;

    steer_paddles(state, input, config.field_height);

    state.ball.advance();

    resolve_collisions(state, config.field_height, &mut events);

    if let Some(scorer) = check_scoring(state, config.field_width) {
        events.push(GameEvent::PointScored {
            scorer,
            scores: state.scores,
        });
    }

    if let Some(winner) = check_round_won(state, config) {
        events.push(GameEvent::RoundWon {
            winner,
            scores: state.scores,
        });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;
    use glam::Vec2;

    #[test]
    fn test_tick_moves_ball_and_paddles() {
        let config = Config::default();
        let mut state = GameState::new(&config);
        let input = TickInput {
            left_down: true,
            right_up: true,
            ..Default::default()
        };
        let events = tick(&mut state, &input, &config);
        assert!(events.is_empty());
        assert_eq!(state.ball.pos, Vec2::new(355.0, 250.0));
        assert_eq!(state.left.pos.y, 204.0);
        assert_eq!(state.right.pos.y, 196.0);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_tick_scores_after_exit() {
        let config = Config::default();
        let mut state = GameState::new(&config);
        state.ball.pos = Vec2::new(config.field_width - 2.0, 20.0);
        state.ball.vel = Vec2::new(5.0, 0.0);

        let events = tick(&mut state, &TickInput::default(), &config);
        assert_eq!(
            events,
            vec![GameEvent::PointScored {
                scorer: Side::Left,
                scores: crate::sim::Scores { left: 1, right: 0 },
            }]
        );
        assert_eq!(state.ball.pos, config.ball_origin());
        assert_eq!(state.ball.vel, Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn test_tick_win_enters_round_over() {
        let config = Config::default();
        let mut state = GameState::new(&config);
        state.scores.left = config.winning_score;

        let events = tick(&mut state, &TickInput::default(), &config);
        assert!(matches!(
            events.last(),
            Some(GameEvent::RoundWon {
                winner: Side::Left,
                ..
            })
        ));
        assert!(matches!(
            state.phase,
            GamePhase::RoundOver {
                winner: Side::Left,
                ..
            }
        ));
    }

    #[test]
    fn test_tick_frozen_during_round_over() {
        let config = Config::default();
        let mut state = GameState::new(&config);
        state.scores.right = config.winning_score;
        tick(&mut state, &TickInput::default(), &config);

        let ball = state.ball.clone();
        let left = state.left.clone();
        let input = TickInput {
            left_up: true,
            ..Default::default()
        };
        let events = tick(&mut state, &input, &config);
        assert!(events.is_empty());
        assert_eq!(state.ball, ball);
        assert_eq!(state.left, left);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_tick_determinism() {
        let config = Config::default();
        let mut state1 = GameState::new(&config);
        let mut state2 = GameState::new(&config);

        let inputs = [
            TickInput {
                left_up: true,
                ..Default::default()
            },
            TickInput {
                right_down: true,
                left_down: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..200 {
            for input in &inputs {
                tick(&mut state1, input, &config);
                tick(&mut state2, input, &config);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.ball, state2.ball);
        assert_eq!(state1.scores, state2.scores);
        assert_eq!(state1.left, state2.left);
    }

    #[test]
    fn test_input_keys_for() {
        let input = TickInput {
            left_up: true,
            right_down: true,
            ..Default::default()
        };
        assert_eq!(input.keys_for(Side::Left), (true, false));
        assert_eq!(input.keys_for(Side::Right), (false, true));
    }
}
