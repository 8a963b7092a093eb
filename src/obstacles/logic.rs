//! Obstacle spawning.

use super::types::ObstaclePair;
use crate::core::config::GameConfig;
use crate::core::game_state::GameSession;
use crate::core::tick::GameEvent;
use rand::Rng;

/// Roll a gap: `(gap_top, gap_bottom)` in world units.
pub fn roll_gap<R: Rng>(config: &GameConfig, rng: &mut R) -> (f64, f64) {
    let offset = rng.gen_range(config.gap_offset_min..=config.gap_offset_max);
    let gap_top = offset as f64 * config.gap_offset_unit;
    (gap_top, gap_top + config.gap_height)
}

/// Add a new pair at the right edge of the play area.
pub fn spawn_pair<R: Rng>(session: &mut GameSession, config: &GameConfig, rng: &mut R) -> GameEvent {
    let (gap_top, gap_bottom) = roll_gap(config, rng);
    let id = session.next_obstacle_id;
    session.next_obstacle_id += 1;

    let pair = ObstaclePair {
        id,
        x: config.play_width,
        width: config.obstacle_width,
        gap_top,
        gap_bottom,
        length: config.obstacle_length,
        scorable: true,
    };
    tracing::debug!(id, gap_top, gap_bottom, "spawned obstacle pair");
    session.obstacles.push(pair);

    GameEvent::ObstacleSpawned {
        id,
        x: config.play_width,
        gap_top,
        gap_bottom,
    }
}

/// Count one tick toward the next spawn; spawns once the counter passes the interval.
pub fn tick_spawner<R: Rng>(
    session: &mut GameSession,
    config: &GameConfig,
    rng: &mut R,
) -> Option<GameEvent> {
    let spawned = if session.spawn_counter > session.spawn_interval {
        session.spawn_counter = 0;
        Some(spawn_pair(session, config, rng))
    } else {
        None
    };
    session.spawn_counter += 1;
    spawned
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn running_session(config: &GameConfig) -> GameSession {
        let mut session = GameSession::new(config, 0);
        session.start(config);
        session
    }

    #[test]
    fn test_roll_gap_within_band() {
        let config = GameConfig::default();
        let mut rng = create_test_rng();
        for _ in 0..500 {
            let (top, bottom) = roll_gap(&config, &mut rng);
            assert!(top >= 8.0 * config.gap_offset_unit);
            assert!(top <= 50.0 * config.gap_offset_unit);
            assert!((bottom - top - config.gap_height).abs() < 1e-9);
            // Offsets are whole units
            let units = top / config.gap_offset_unit;
            assert!((units - units.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_spawn_pair() {
        let config = GameConfig::default();
        let mut session = running_session(&config);
        let event = spawn_pair(&mut session, &config, &mut create_test_rng());

        assert_eq!(session.obstacles.len(), 1);
        let pair = &session.obstacles[0];
        assert_eq!(pair.x, config.play_width);
        assert!(pair.scorable);
        assert_eq!(
            event,
            GameEvent::ObstacleSpawned {
                id: 0,
                x: pair.x,
                gap_top: pair.gap_top,
                gap_bottom: pair.gap_bottom,
            }
        );
        assert_eq!(session.next_obstacle_id, 1);
    }

    #[test]
    fn test_spawner_waits_for_interval() {
        let config = GameConfig::default();
        let mut session = running_session(&config);
        let mut rng = create_test_rng();

        let mut spawn_ticks = Vec::new();
        for tick in 1..=400u32 {
            if tick_spawner(&mut session, &config, &mut rng).is_some() {
                spawn_ticks.push(tick);
            }
        }
        // Counter must exceed the interval. The first wait is one tick longer because
        // the counter starts at 0 rather than 1 after a spawn.
        assert_eq!(spawn_ticks, vec![147, 293]);
        assert_eq!(session.obstacles.len(), 2);
    }

    #[test]
    fn test_spawner_uses_current_interval() {
        let config = GameConfig::default();
        let mut session = running_session(&config);
        session.spawn_interval = config.min_spawn_interval;
        let mut rng = create_test_rng();

        let mut first = None;
        for tick in 1..=100u32 {
            if tick_spawner(&mut session, &config, &mut rng).is_some() {
                first = Some(tick);
                break;
            }
        }
        assert_eq!(first, Some(config.min_spawn_interval + 2));
    }
}
