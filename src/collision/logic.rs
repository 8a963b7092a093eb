//! Obstacle pass: cull, warn, collide, score, then scroll.
//!
//! Each pair is handled in that order. A culled pair is skipped for the rest
//! of the tick, and a collision ends the run before anything else is scored.

use crate::core::config::GameConfig;
use crate::core::game_state::GameSession;
use crate::core::geometry::Rect;
use crate::core::tick::{CrashCause, GameEvent};
use crate::core::warning;
use crate::difficulty;
use crate::obstacles::ObstaclePair;

/// Bird's midpoint is within `buffer` of either gap edge while it is level with the pair.
pub fn near_gap_edge(pair: &ObstaclePair, bird: &Rect, buffer: f64) -> bool {
    if !bird.overlaps_horizontally(&pair.top_bounds()) {
        return false;
    }
    let mid = bird.mid_y();
    mid < pair.gap_top + buffer || mid > pair.gap_bottom - buffer
}

pub fn hits_pair(pair: &ObstaclePair, bird: &Rect) -> bool {
    bird.overlaps(&pair.top_bounds()) || bird.overlaps(&pair.bottom_bounds())
}

/// The pair has fully cleared the bird's left edge.
pub fn has_passed(pair: &ObstaclePair, bird: &Rect) -> bool {
    pair.right() < bird.left
}

/// Run the obstacle pass for one tick, appending events as they happen.
pub fn process_obstacles(session: &mut GameSession, config: &GameConfig, events: &mut Vec<GameEvent>) {
    let bird = session.bird.bounds();
    // Every pair scrolls by the speed in effect when the pass began, even if
    // a point earned partway through raises it.
    let speed = session.obstacle_speed;

    let mut i = 0;
    while i < session.obstacles.len() {
        if session.obstacles[i].is_off_screen() {
            let removed = session.obstacles.remove(i);
            events.push(GameEvent::ObstacleRemoved { id: removed.id });
            continue;
        }

        if near_gap_edge(&session.obstacles[i], &bird, config.gap_safety_buffer) {
            events.extend(warning::trigger(session, config));
        }

        if hits_pair(&session.obstacles[i], &bird) {
            events.extend(session.end(CrashCause::Obstacle));
            return;
        }

        if session.obstacles[i].scorable && has_passed(&session.obstacles[i], &bird) {
            session.obstacles[i].scorable = false;
            award_point(session, config, events);
        }

        let pair = &mut session.obstacles[i];
        pair.x -= speed;
        events.push(GameEvent::ObstacleMoved {
            id: pair.id,
            x: pair.x,
        });
        i += 1;
    }
}

/// Add one point, track the best score, and let difficulty react.
pub fn award_point(session: &mut GameSession, config: &GameConfig, events: &mut Vec<GameEvent>) {
    session.score += 1;
    let new_high_score = session.score > session.high_score;
    if new_high_score {
        session.high_score = session.score;
    }
    tracing::debug!(score = session.score, new_high_score, "scored");
    events.push(GameEvent::ScoreChanged {
        score: session.score,
        high_score: session.high_score,
        new_high_score,
    });

    events.extend(difficulty::on_score(session, config));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game_state::SessionState;

    fn running_session(config: &GameConfig) -> GameSession {
        let mut session = GameSession::new(config, 0);
        session.start(config);
        session
    }

    /// Pair whose gap is centred on the bird's start position.
    fn pair_at(config: &GameConfig, id: u64, x: f64) -> ObstaclePair {
        let centre = config.bird_start_y + config.bird_height / 2.0;
        ObstaclePair {
            id,
            x,
            width: config.obstacle_width,
            gap_top: centre - config.gap_height / 2.0,
            gap_bottom: centre + config.gap_height / 2.0,
            length: config.obstacle_length,
            scorable: true,
        }
    }

    fn process(session: &mut GameSession, config: &GameConfig) -> Vec<GameEvent> {
        let mut events = Vec::new();
        process_obstacles(session, config, &mut events);
        events
    }

    #[test]
    fn test_pairs_scroll_left() {
        let config = GameConfig::default();
        let mut session = running_session(&config);
        session.obstacles.push(pair_at(&config, 0, 500.0));
        let events = process(&mut session, &config);
        assert_eq!(session.obstacles[0].x, 500.0 - config.base_speed);
        assert_eq!(
            events,
            vec![GameEvent::ObstacleMoved {
                id: 0,
                x: 500.0 - config.base_speed
            }]
        );
    }

    #[test]
    fn test_off_screen_pair_removed_without_scoring() {
        let config = GameConfig::default();
        let mut session = running_session(&config);
        // Passed the bird long ago and still scorable
        session.obstacles.push(pair_at(&config, 3, -config.obstacle_width));
        let events = process(&mut session, &config);
        assert!(session.obstacles.is_empty());
        assert_eq!(session.score, 0);
        assert_eq!(events, vec![GameEvent::ObstacleRemoved { id: 3 }]);
    }

    #[test]
    fn test_scores_once_per_pair() {
        let config = GameConfig::default();
        let mut session = running_session(&config);
        // Right edge just left of the bird
        session
            .obstacles
            .push(pair_at(&config, 0, config.bird_x - config.obstacle_width - 1.0));

        let events = process(&mut session, &config);
        assert_eq!(session.score, 1);
        assert!(!session.obstacles[0].scorable);
        assert!(events.contains(&GameEvent::ScoreChanged {
            score: 1,
            high_score: 1,
            new_high_score: true,
        }));

        process(&mut session, &config);
        process(&mut session, &config);
        assert_eq!(session.score, 1);
    }

    #[test]
    fn test_no_score_while_overlapping() {
        let config = GameConfig::default();
        let mut session = running_session(&config);
        session.obstacles.push(pair_at(&config, 0, config.bird_x));
        process(&mut session, &config);
        assert_eq!(session.score, 0);
        assert_eq!(session.state, SessionState::Running);
    }

    #[test]
    fn test_hitting_top_obstacle_ends_run() {
        let config = GameConfig::default();
        let mut session = running_session(&config);
        let mut pair = pair_at(&config, 0, config.bird_x);
        pair.gap_top = session.bird.y + 5.0;
        pair.gap_bottom = pair.gap_top + config.gap_height;
        session.obstacles.push(pair);

        let events = process(&mut session, &config);
        assert_eq!(session.state, SessionState::Ended);
        assert_eq!(session.last_crash, Some(CrashCause::Obstacle));
        assert!(matches!(
            events.last(),
            Some(GameEvent::GameOver {
                cause: CrashCause::Obstacle,
                ..
            })
        ));
        // Collision stops the pass before the pair moves
        assert_eq!(session.obstacles[0].x, config.bird_x);
    }

    #[test]
    fn test_hitting_bottom_obstacle_ends_run() {
        let config = GameConfig::default();
        let mut session = running_session(&config);
        let mut pair = pair_at(&config, 0, config.bird_x + 10.0);
        pair.gap_bottom = session.bird.bottom() - 1.0;
        pair.gap_top = pair.gap_bottom - config.gap_height;
        session.obstacles.push(pair);

        process(&mut session, &config);
        assert_eq!(session.state, SessionState::Ended);
    }

    #[test]
    fn test_collision_short_circuits_later_scoring() {
        let config = GameConfig::default();
        let mut session = running_session(&config);
        let mut blocking = pair_at(&config, 0, config.bird_x);
        blocking.gap_top = session.bird.bottom() + 10.0;
        blocking.gap_bottom = blocking.gap_top + config.gap_height;
        session.obstacles.push(blocking);
        session
            .obstacles
            .push(pair_at(&config, 1, config.bird_x - config.obstacle_width - 1.0));

        process(&mut session, &config);
        assert_eq!(session.state, SessionState::Ended);
        assert_eq!(session.score, 0);
        assert!(session.obstacles[1].scorable);
    }

    #[test]
    fn test_gap_edge_warning() {
        let config = GameConfig::default();
        let mut session = running_session(&config);
        // Bird spans 240..270 (midpoint 255), so a gap top of 238 clears it
        // by 2 units but leaves the midpoint inside the safety buffer.
        let mut pair = pair_at(&config, 0, config.bird_x + 5.0);
        pair.gap_top = 238.0;
        pair.gap_bottom = pair.gap_top + config.gap_height;
        session.obstacles.push(pair);

        let events = process(&mut session, &config);
        assert_eq!(session.state, SessionState::Running);
        assert!(events.contains(&GameEvent::Warning { on: true }));
        assert!(session.warning_active());
    }

    #[test]
    fn test_no_warning_when_centred_in_gap() {
        let config = GameConfig::default();
        let mut session = running_session(&config);
        session.obstacles.push(pair_at(&config, 0, config.bird_x));
        let events = process(&mut session, &config);
        assert!(!events.contains(&GameEvent::Warning { on: true }));
    }

    #[test]
    fn test_no_warning_when_not_level_with_pair() {
        let config = GameConfig::default();
        let mut session = running_session(&config);
        let mut pair = pair_at(&config, 0, 600.0);
        pair.gap_top = session.bird.mid_y() - 1.0;
        pair.gap_bottom = pair.gap_top + config.gap_height;
        session.obstacles.push(pair);
        let events = process(&mut session, &config);
        assert!(!events.contains(&GameEvent::Warning { on: true }));
    }

    #[test]
    fn test_speed_snapshot_for_whole_pass() {
        let config = GameConfig::default();
        let mut session = running_session(&config);
        session.score = 4;
        session
            .obstacles
            .push(pair_at(&config, 0, config.bird_x - config.obstacle_width - 1.0));
        session.obstacles.push(pair_at(&config, 1, 600.0));

        process(&mut session, &config);
        // Fifth point raised the speed, but this tick's scroll used the old one
        assert_eq!(session.obstacle_speed, config.base_speed + config.speed_step);
        assert_eq!(session.obstacles[1].x, 600.0 - config.base_speed);
    }
}
