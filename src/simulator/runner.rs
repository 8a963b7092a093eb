//! Plays simulated runs through the real tick function.

use super::autopilot::should_ascend;
use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::controls::{process_input, GameInput};
use crate::core::game_state::GameSession;
use crate::core::tick::{step, GameEvent};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - score {}, ticks {}, {}",
                run_idx + 1,
                config.num_runs,
                stats.score,
                stats.ticks,
                stats
                    .crash
                    .map(|c| c.describe())
                    .unwrap_or("timed out")
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs)
}

/// Play one run with the autopilot until it crashes or hits the tick limit.
pub fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let game = &config.game;
    let mut session = GameSession::new(game, 0);
    process_input(&mut session, game, GameInput::Start);

    let mut crash = None;
    let mut warnings = 0;

    while session.is_running() && session.tick_count < config.max_ticks_per_run {
        if should_ascend(&session, game) {
            process_input(&mut session, game, GameInput::AscendPress);
        } else if session.bird.ascending {
            process_input(&mut session, game, GameInput::AscendRelease);
        }

        for event in step(&mut session, game, rng) {
            match event {
                GameEvent::Warning { on: true } => warnings += 1,
                GameEvent::GameOver { cause, .. } => crash = Some(cause),
                _ => {}
            }
        }
    }

    RunStats {
        score: session.score,
        ticks: session.tick_count,
        crash,
        final_speed: session.obstacle_speed,
        final_spawn_interval: session.spawn_interval,
        warnings,
    }
}
