//! Scoring and round flow
//!
//! `Playing` → (a side reaches the winning score) → `RoundOver` with a hold
//! budget → (budget spent) → match reset → `Playing`.

use std::time::Duration;

use super::state::{GameEvent, GamePhase, GameState, Side};
use crate::settings::Config;

/// Award a point if the ball has fully left the field, and serve again.
///
/// Only the horizontal position matters here.
pub fn check_scoring(state: &mut GameState, field_width: f32) -> Option<Side> {
    let exited = if state.ball.pos.x < 0.0 {
        Side::Left
    } else if state.ball.pos.x > field_width {
        Side::Right
    } else {
        return None;
    };
    let scorer = exited.opponent();

    state.scores.award(scorer);
    state.ball.reset();
    log::info!(
        "{} scores ({} - {})",
        scorer.as_str(),
        state.scores.left,
        state.scores.right
    );
    Some(scorer)
}

/// Enter `RoundOver` if either side has reached the winning score.
///
/// Left is checked first, so it takes a simultaneous finish.
pub fn check_round_won(state: &mut GameState, config: &Config) -> Option<Side> {
    let winner = state.scores.winner(config.winning_score)?;
    state.phase = GamePhase::RoundOver {
        winner,
        remaining: config.round_over_hold(),
    };
    log::info!(
        "{} player won the round {} - {}",
        winner.as_str(),
        state.scores.left,
        state.scores.right
    );
    Some(winner)
}

/// Spend `elapsed` real time from the round-over hold.
///
/// Starts the next round once nothing remains. Returns `RoundReset` when that
/// happens; does nothing while playing.
pub fn advance_hold(state: &mut GameState, elapsed: Duration) -> Option<GameEvent> {
    let GamePhase::RoundOver { winner, remaining } = state.phase else {
        return None;
    };

    let remaining = remaining.saturating_sub(elapsed);
    if remaining.is_zero() {
        start_next_round(state);
        Some(GameEvent::RoundReset)
    } else {
        state.phase = GamePhase::RoundOver { winner, remaining };
        None
    }
}

/// Serve again, put both paddles back and clear the scores
pub fn start_next_round(state: &mut GameState) {
    state.ball.reset();
    state.left.reset();
    state.right.reset();
    state.scores.clear();
    state.phase = GamePhase::Playing;
    state.rounds += 1;
    log::info!("Round {} starting", state.rounds + 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (Config, GameState) {
        let config = Config::default();
        let state = GameState::new(&config);
        (config, state)
    }

    #[test]
    fn test_left_scores_when_ball_exits_right() {
        let (config, mut state) = setup();
        state.ball.pos = Vec2::new(config.field_width + 1.0, 120.0);
        state.ball.vel = Vec2::new(5.0, 3.0);

        assert_eq!(check_scoring(&mut state, config.field_width), Some(Side::Left));
        assert_eq!(state.scores.left, 1);
        assert_eq!(state.scores.right, 0);
        assert_eq!(state.ball.pos, config.ball_origin());
        assert_eq!(state.ball.vel, Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn test_right_scores_when_ball_exits_left() {
        let (config, mut state) = setup();
        state.ball.pos = Vec2::new(-0.5, 480.0);
        state.ball.vel = Vec2::new(-5.0, 1.0);

        assert_eq!(check_scoring(&mut state, config.field_width), Some(Side::Right));
        assert_eq!(state.scores.right, 1);
        assert_eq!(state.ball.vel, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_edges_themselves_do_not_score() {
        let (config, mut state) = setup();
        state.ball.pos.x = 0.0;
        assert_eq!(check_scoring(&mut state, config.field_width), None);
        state.ball.pos.x = config.field_width;
        assert_eq!(check_scoring(&mut state, config.field_width), None);
        assert_eq!(state.scores.left + state.scores.right, 0);
    }

    #[test]
    fn test_round_won_enters_hold() {
        let (config, mut state) = setup();
        state.scores.right = config.winning_score;
        assert_eq!(check_round_won(&mut state, &config), Some(Side::Right));
        assert_eq!(
            state.phase,
            GamePhase::RoundOver {
                winner: Side::Right,
                remaining: config.round_over_hold(),
            }
        );
    }

    #[test]
    fn test_simultaneous_finish_goes_left() {
        let (config, mut state) = setup();
        state.scores.left = config.winning_score;
        state.scores.right = config.winning_score;
        assert_eq!(check_round_won(&mut state, &config), Some(Side::Left));
    }

    #[test]
    fn test_no_winner_below_threshold() {
        let (config, mut state) = setup();
        state.scores.left = config.winning_score - 1;
        assert_eq!(check_round_won(&mut state, &config), None);
        assert!(state.is_playing());
    }

    #[test]
    fn test_hold_counts_down_then_resets() {
        let (config, mut state) = setup();
        state.scores.left = config.winning_score;
        state.scores.right = 4;
        state.left.pos.y = 0.0;
        state.right.pos.y = 400.0;
        check_round_won(&mut state, &config);

        assert_eq!(advance_hold(&mut state, Duration::from_secs(2)), None);
        assert_eq!(state.round_winner(), Some(Side::Left));
        assert_eq!(state.scores.left, config.winning_score);

        assert_eq!(
            advance_hold(&mut state, Duration::from_secs(3)),
            Some(GameEvent::RoundReset)
        );
        assert!(state.is_playing());
        assert_eq!(state.scores.left, 0);
        assert_eq!(state.scores.right, 0);
        assert_eq!(state.left.pos, state.left.origin);
        assert_eq!(state.right.pos, state.right.origin);
        assert_eq!(state.ball.pos, config.ball_origin());
        assert_eq!(state.rounds, 1);
    }

    #[test]
    fn test_hold_ignored_while_playing() {
        let (_config, mut state) = setup();
        assert_eq!(advance_hold(&mut state, Duration::from_secs(10)), None);
        assert!(state.is_playing());
        assert_eq!(state.rounds, 0);
    }
}
