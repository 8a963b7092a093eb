//! Player input, independent of any terminal or key bindings.

use super::config::GameConfig;
use super::game_state::GameSession;
use super::tick::GameEvent;
use crate::bird;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Start a run, or restart after a crash.
    Start,
    AscendPress,
    AscendRelease,
}

/// Apply one input. Inputs that are invalid in the current state are ignored.
pub fn process_input(
    session: &mut GameSession,
    config: &GameConfig,
    input: GameInput,
) -> Vec<GameEvent> {
    match input {
        GameInput::Start => session.start(config),
        GameInput::AscendPress if session.is_running() => {
            bird::ascend(&mut session.bird, config);
            vec![GameEvent::Ascended]
        }
        GameInput::AscendRelease if session.is_running() => {
            bird::release(&mut session.bird);
            vec![GameEvent::AscendReleased]
        }
        GameInput::AscendPress | GameInput::AscendRelease => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game_state::SessionState;
    use crate::core::tick::CrashCause;

    #[test]
    fn test_start_from_idle() {
        let config = GameConfig::default();
        let mut session = GameSession::new(&config, 0);
        let events = process_input(&mut session, &config, GameInput::Start);
        assert_eq!(events, vec![GameEvent::Started { high_score: 0 }]);
        assert_eq!(session.state, SessionState::Running);
    }

    #[test]
    fn test_start_while_running_is_ignored() {
        let config = GameConfig::default();
        let mut session = GameSession::new(&config, 0);
        process_input(&mut session, &config, GameInput::Start);
        session.score = 2;
        assert!(process_input(&mut session, &config, GameInput::Start).is_empty());
        assert_eq!(session.score, 2);
    }

    #[test]
    fn test_restart_after_game_over() {
        let config = GameConfig::default();
        let mut session = GameSession::new(&config, 0);
        process_input(&mut session, &config, GameInput::Start);
        session.score = 6;
        session.end(CrashCause::Obstacle);

        let events = process_input(&mut session, &config, GameInput::Start);
        assert_eq!(events, vec![GameEvent::Started { high_score: 6 }]);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_ascend_sets_velocity_not_accumulates() {
        let config = GameConfig::default();
        let mut session = GameSession::new(&config, 0);
        process_input(&mut session, &config, GameInput::Start);

        process_input(&mut session, &config, GameInput::AscendPress);
        process_input(&mut session, &config, GameInput::AscendPress);
        assert_eq!(session.bird.velocity, config.ascend_impulse);
        assert!(session.bird.ascending);

        let events = process_input(&mut session, &config, GameInput::AscendRelease);
        assert_eq!(events, vec![GameEvent::AscendReleased]);
        assert!(!session.bird.ascending);
        assert_eq!(session.bird.velocity, config.ascend_impulse);
    }

    #[test]
    fn test_ascend_ignored_unless_running() {
        let config = GameConfig::default();
        let mut session = GameSession::new(&config, 0);
        assert!(process_input(&mut session, &config, GameInput::AscendPress).is_empty());
        assert_eq!(session.bird.velocity, 0.0);

        process_input(&mut session, &config, GameInput::Start);
        session.end(CrashCause::Ground);
        assert!(process_input(&mut session, &config, GameInput::AscendPress).is_empty());
    }
}
