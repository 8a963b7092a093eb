//! A basic player: ascend whenever the bird is about to sink below the next gap.

use crate::core::config::GameConfig;
use crate::core::game_state::GameSession;

/// Distance above the gap bottom the autopilot tries to keep the bird's bottom edge.
const GAP_MARGIN: f64 = 30.0;

pub fn should_ascend(session: &GameSession, config: &GameConfig) -> bool {
    let bird = &session.bird;
    // Let the previous flap play out.
    if bird.velocity < 0.0 {
        return false;
    }

    let next_pair = session
        .obstacles
        .iter()
        .filter(|pair| pair.right() >= bird.x)
        .min_by(|a, b| a.x.total_cmp(&b.x));

    let floor = match next_pair {
        Some(pair) => pair.gap_bottom - GAP_MARGIN,
        None => (config.play_height + config.bird_height) / 2.0,
    };

    // Position after the next tick of gravity
    bird.bottom() + bird.velocity + config.gravity >= floor
}
