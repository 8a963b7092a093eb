//! Simulation configuration.

use crate::core::config::GameConfig;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of runs to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Ticks after which a run is stopped and counted as timed out
    pub max_ticks_per_run: u64,

    /// Tuning used by every run
    pub game: GameConfig,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            seed: None,
            // About 10 minutes of play at 60 ticks per second
            max_ticks_per_run: 36_000,
            game: GameConfig::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small, reproducible config for tests.
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 5,
            seed: Some(seed),
            max_ticks_per_run: 5_000,
            verbosity: 0,
            ..Default::default()
        }
    }
}
