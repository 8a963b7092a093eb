//! The session: every piece of mutable game state, owned in one place.

use super::clock::Clock;
use super::config::GameConfig;
use super::tick::{CrashCause, GameEvent};
use super::warning;
use crate::bird::Bird;
use crate::obstacles::ObstaclePair;
use serde::{Deserialize, Serialize};

/// Lifecycle of a session. `Idle` only occurs before the first run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Idle,
    Running,
    Ended,
}

/// Message the presentation layer should show over the play area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    PressToStart,
    GameOver,
}

/// Full game state for one player. Everything except `high_score` is reset when a run starts.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub state: SessionState,
    pub score: u32,
    pub high_score: u32,
    pub obstacle_speed: f64,
    /// Ticks between obstacle spawns.
    pub spawn_interval: u32,
    pub last_level_up_score: u32,

    pub bird: Bird,
    pub obstacles: Vec<ObstaclePair>,
    /// Ticks since the last spawn.
    pub spawn_counter: u32,
    pub next_obstacle_id: u64,

    pub clock: Clock,
    pub tick_count: u64,
    /// Logical time of the current run, advanced by one tick length per tick.
    pub elapsed_ms: u64,
    /// While set, further warnings are suppressed until `elapsed_ms` reaches it.
    pub warning_until_ms: Option<u64>,
    pub last_crash: Option<CrashCause>,
}

impl GameSession {
    pub fn new(config: &GameConfig, high_score: u32) -> Self {
        Self {
            state: SessionState::Idle,
            score: 0,
            high_score,
            obstacle_speed: config.base_speed,
            spawn_interval: config.base_spawn_interval,
            last_level_up_score: 0,
            bird: Bird::new(config),
            obstacles: Vec::new(),
            spawn_counter: 0,
            next_obstacle_id: 0,
            clock: Clock::new(),
            tick_count: 0,
            elapsed_ms: 0,
            warning_until_ms: None,
            last_crash: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Begin a run from `Idle` or `Ended`. Returns no events (and changes nothing) while running.
    pub fn start(&mut self, config: &GameConfig) -> Vec<GameEvent> {
        if self.is_running() {
            return Vec::new();
        }
        let mut events: Vec<GameEvent> = warning::clear(self).into_iter().collect();

        self.state = SessionState::Running;
        self.score = 0;
        self.obstacle_speed = config.base_speed;
        self.spawn_interval = config.base_spawn_interval;
        self.last_level_up_score = 0;
        self.bird.reset(config);
        self.obstacles.clear();
        self.spawn_counter = 0;
        self.clock.reset();
        self.tick_count = 0;
        self.elapsed_ms = 0;
        self.last_crash = None;

        tracing::info!(high_score = self.high_score, "run started");
        events.push(GameEvent::Started {
            high_score: self.high_score,
        });
        events
    }

    /// Finish the current run. A showing warning is turned off before `GameOver`.
    /// The caller persists the high score.
    pub fn end(&mut self, cause: CrashCause) -> Vec<GameEvent> {
        let mut events: Vec<GameEvent> = warning::clear(self).into_iter().collect();
        self.state = SessionState::Ended;
        self.last_crash = Some(cause);
        self.bird.ascending = false;
        if self.score > self.high_score {
            self.high_score = self.score;
        }

        tracing::info!(
            ?cause,
            score = self.score,
            high_score = self.high_score,
            ticks = self.tick_count,
            "run ended"
        );
        events.push(GameEvent::GameOver {
            cause,
            score: self.score,
            high_score: self.high_score,
        });
        events
    }

    /// The bird is only drawn during a run.
    pub fn bird_visible(&self) -> bool {
        self.is_running()
    }

    pub fn prompt(&self) -> Option<Prompt> {
        match self.state {
            SessionState::Idle => Some(Prompt::PressToStart),
            SessionState::Running => None,
            SessionState::Ended => Some(Prompt::GameOver),
        }
    }

    pub fn warning_active(&self) -> bool {
        self.warning_until_ms.is_some()
    }

    /// Obstacle-speed level, counting the starting speed as level 1.
    pub fn speed_level(&self, config: &GameConfig) -> u32 {
        if config.speed_step <= 0.0 {
            return 1;
        }
        1 + ((self.obstacle_speed - config.base_speed) / config.speed_step).round() as u32
    }
}
