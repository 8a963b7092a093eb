//! Difficulty escalation.
//!
//! Every `level_up_every` points (5 by default) obstacles get faster and spawn
//! more often, bounded by `max_speed` and `min_spawn_interval`. The
//! `last_level_up_score` watermark makes each threshold fire at most once.

use crate::core::config::GameConfig;
use crate::core::game_state::GameSession;
use crate::core::tick::GameEvent;

/// Whether the current score should trigger an escalation.
pub fn should_escalate(session: &GameSession, config: &GameConfig) -> bool {
    let score = session.score;
    session.obstacle_speed < config.max_speed
        && score > 0
        && score % config.level_up_every == 0
        && score > session.last_level_up_score
}

/// Called after every point. Returns the new rates if difficulty went up.
pub fn on_score(session: &mut GameSession, config: &GameConfig) -> Option<GameEvent> {
    if !should_escalate(session, config) {
        return None;
    }

    session.obstacle_speed = (session.obstacle_speed + config.speed_step).min(config.max_speed);
    session.spawn_interval = session
        .spawn_interval
        .saturating_sub(config.spawn_interval_step)
        .max(config.min_spawn_interval);
    session.last_level_up_score = session.score;

    tracing::info!(
        score = session.score,
        obstacle_speed = session.obstacle_speed,
        spawn_interval = session.spawn_interval,
        "difficulty raised"
    );
    Some(GameEvent::DifficultyRaised {
        obstacle_speed: session.obstacle_speed,
        spawn_interval: session.spawn_interval,
    })
}
