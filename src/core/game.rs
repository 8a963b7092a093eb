//! [`Game`] ties a session to its configuration, random source and high-score store.
//!
//! The session and tick functions stay pure; this wrapper is the one place
//! that writes the high score back to the store.

use super::config::GameConfig;
use super::constants::HIGH_SCORE_KEY;
use super::controls::{process_input, GameInput};
use super::game_state::GameSession;
use super::tick::{self, GameEvent};
use crate::storage::{read_high_score, KeyValueStore};
use rand::Rng;

pub struct Game<S: KeyValueStore, R: Rng> {
    session: GameSession,
    config: GameConfig,
    store: S,
    rng: R,
}

impl<S: KeyValueStore, R: Rng> Game<S, R> {
    /// Create an idle game, reading the stored high score once.
    /// `config` is passed through [`GameConfig::validated`] first.
    pub fn new(config: GameConfig, store: S, rng: R) -> Self {
        let config = config.validated();
        let high_score = read_high_score(&store);
        tracing::debug!(high_score, "loaded high score");
        Self {
            session: GameSession::new(&config, high_score),
            config,
            store,
            rng,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn handle_input(&mut self, input: GameInput) -> Vec<GameEvent> {
        let events = process_input(&mut self.session, &self.config, input);
        self.persist(&events);
        events
    }

    /// Advance by `dt_ms` of wall time.
    pub fn advance(&mut self, dt_ms: u64) -> Vec<GameEvent> {
        let events = tick::advance(&mut self.session, &self.config, &mut self.rng, dt_ms);
        self.persist(&events);
        events
    }

    /// Forget the stored best score, both on disk and in the running session.
    pub fn reset_high_score(&mut self) {
        self.session.high_score = 0;
        if let Err(e) = self.store.remove(HIGH_SCORE_KEY) {
            tracing::warn!(error = %e, "failed to clear high score");
        }
    }

    fn persist(&mut self, events: &[GameEvent]) {
        let needs_write = events.iter().any(|event| {
            matches!(
                event,
                GameEvent::ScoreChanged {
                    new_high_score: true,
                    ..
                } | GameEvent::GameOver { .. }
            )
        });
        if !needs_write {
            return;
        }
        if let Err(e) = self
            .store
            .set(HIGH_SCORE_KEY, i64::from(self.session.high_score))
        {
            tracing::warn!(error = %e, "failed to persist high score");
        }
    }
}
