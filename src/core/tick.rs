//! Per-tick orchestration.
//!
//! [`step`] advances one simulation tick: warning cooldown, bird physics,
//! obstacle spawning, then obstacle movement with collision and scoring.
//! It returns a list of [`GameEvent`]s so the presentation layer (renderer,
//! audio, persistence) can react without the game logic knowing about any
//! of them. [`advance`] converts elapsed wall time into a number of steps.

use super::config::GameConfig;
use super::game_state::GameSession;
use super::warning;
use crate::bird::{self, BoundaryStatus};
use crate::collision;
use crate::obstacles;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// What ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrashCause {
    Ceiling,
    Ground,
    Obstacle,
}

impl CrashCause {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Ceiling => "Flew into the ceiling",
            Self::Ground => "Hit the ground",
            Self::Obstacle => "Crashed into an obstacle",
        }
    }
}

/// A single event produced by input handling or a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A run began (first start or restart).
    Started { high_score: u32 },

    // ── Bird ────────────────────────────────────────────────────
    BirdMoved { y: f64, velocity: f64 },
    /// Ascend pressed; velocity was set to the impulse.
    Ascended,
    /// Ascend released. Cosmetic only.
    AscendReleased,

    // ── Obstacles ───────────────────────────────────────────────
    ObstacleSpawned {
        id: u64,
        x: f64,
        gap_top: f64,
        gap_bottom: f64,
    },
    ObstacleMoved { id: u64, x: f64 },
    /// Scrolled off the left edge and was dropped.
    ObstacleRemoved { id: u64 },

    // ── Scoring ─────────────────────────────────────────────────
    ScoreChanged {
        score: u32,
        high_score: u32,
        new_high_score: bool,
    },
    DifficultyRaised {
        obstacle_speed: f64,
        spawn_interval: u32,
    },

    /// Danger-zone warning flash turned on or off.
    Warning { on: bool },

    GameOver {
        cause: CrashCause,
        score: u32,
        high_score: u32,
    },
}

/// Run one simulation tick. Does nothing unless the session is running.
pub fn step<R: Rng>(session: &mut GameSession, config: &GameConfig, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !session.is_running() {
        return events;
    }

    session.tick_count += 1;
    session.elapsed_ms += config.tick_ms;
    events.extend(warning::expire(session));

    step_bird(session, config, &mut events);
    if !session.is_running() {
        return events;
    }

    events.extend(obstacles::tick_spawner(session, config, rng));

    collision::process_obstacles(session, config, &mut events);

    events
}

/// Advance the session by `dt_ms` of wall time, running as many ticks as are due.
pub fn advance<R: Rng>(
    session: &mut GameSession,
    config: &GameConfig,
    rng: &mut R,
    dt_ms: u64,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !session.is_running() {
        return events;
    }

    let due = session.clock.advance(dt_ms, config.tick_ms);
    for _ in 0..due {
        events.extend(step(session, config, rng));
        if !session.is_running() {
            break;
        }
    }
    events
}

fn step_bird(session: &mut GameSession, config: &GameConfig, events: &mut Vec<GameEvent>) {
    bird::apply_gravity(&mut session.bird, config);
    events.push(GameEvent::BirdMoved {
        y: session.bird.y,
        velocity: session.bird.velocity,
    });

    match bird::check_bounds(&session.bird, config) {
        BoundaryStatus::Crashed(cause) => events.extend(session.end(cause)),
        BoundaryStatus::Danger => events.extend(warning::trigger(session, config)),
        BoundaryStatus::Clear => {}
    }
}
