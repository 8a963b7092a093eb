//! Bird physics step and boundary checks.

use super::types::Bird;
use crate::core::config::GameConfig;
use crate::core::tick::CrashCause;

/// Where the bird sits relative to the top and bottom bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryStatus {
    Clear,
    /// Within the danger-zone margin of a bound.
    Danger,
    Crashed(CrashCause),
}

/// One tick of free fall: velocity gains gravity, then position gains velocity.
pub fn apply_gravity(bird: &mut Bird, config: &GameConfig) {
    bird.velocity += config.gravity;
    bird.y += bird.velocity;
}

/// Set velocity to the ascend impulse. Repeated presses reset rather than stack.
pub fn ascend(bird: &mut Bird, config: &GameConfig) {
    bird.velocity = config.ascend_impulse;
    bird.ascending = true;
}

pub fn release(bird: &mut Bird) {
    bird.ascending = false;
}

pub fn check_bounds(bird: &Bird, config: &GameConfig) -> BoundaryStatus {
    if bird.y <= 0.0 {
        return BoundaryStatus::Crashed(CrashCause::Ceiling);
    }
    if bird.bottom() >= config.play_height {
        return BoundaryStatus::Crashed(CrashCause::Ground);
    }
    if bird.y <= config.danger_zone || bird.bottom() >= config.play_height - config.danger_zone {
        return BoundaryStatus::Danger;
    }
    BoundaryStatus::Clear
}
