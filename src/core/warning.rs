//! Warning-flash cooldown shared by the danger-zone and gap-edge checks.
//!
//! A warning turns the flash on and starts a cooldown measured on the
//! session's logical clock. Further warnings are swallowed until the
//! cooldown runs out, at which point the flash turns off.

use super::config::GameConfig;
use super::game_state::GameSession;
use super::tick::GameEvent;

/// Raise a warning unless one is already showing.
pub fn trigger(session: &mut GameSession, config: &GameConfig) -> Option<GameEvent> {
    if session.warning_until_ms.is_some() {
        return None;
    }
    session.warning_until_ms = Some(session.elapsed_ms + config.warning_cooldown_ms);
    Some(GameEvent::Warning { on: true })
}

/// Turn the warning off now, whatever is left of its cooldown.
pub fn clear(session: &mut GameSession) -> Option<GameEvent> {
    session
        .warning_until_ms
        .take()
        .map(|_| GameEvent::Warning { on: false })
}

/// Clear the warning once its cooldown has elapsed.
pub fn expire(session: &mut GameSession) -> Option<GameEvent> {
    match session.warning_until_ms {
        Some(until) if session.elapsed_ms >= until => {
            session.warning_until_ms = None;
            Some(GameEvent::Warning { on: false })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> (GameSession, GameConfig) {
        let config = GameConfig::default();
        let mut session = GameSession::new(&config, 0);
        session.start(&config);
        (session, config)
    }

    #[test]
    fn test_trigger_sets_cooldown() {
        let (mut session, config) = session();
        session.elapsed_ms = 1_000;
        assert_eq!(
            trigger(&mut session, &config),
            Some(GameEvent::Warning { on: true })
        );
        assert_eq!(session.warning_until_ms, Some(1_500));
    }

    #[test]
    fn test_repeat_trigger_suppressed() {
        let (mut session, config) = session();
        trigger(&mut session, &config);
        session.elapsed_ms += 100;
        assert_eq!(trigger(&mut session, &config), None);
        assert_eq!(session.warning_until_ms, Some(500));
    }

    #[test]
    fn test_expire_after_cooldown() {
        let (mut session, config) = session();
        trigger(&mut session, &config);

        session.elapsed_ms = 499;
        assert_eq!(expire(&mut session), None);

        session.elapsed_ms = 500;
        assert_eq!(expire(&mut session), Some(GameEvent::Warning { on: false }));
        assert!(!session.warning_active());

        // Can fire again once cleared
        assert!(trigger(&mut session, &config).is_some());
    }

    #[test]
    fn test_clear_turns_warning_off_early() {
        let (mut session, config) = session();
        trigger(&mut session, &config);
        assert_eq!(clear(&mut session), Some(GameEvent::Warning { on: false }));
        assert!(!session.warning_active());
        assert_eq!(clear(&mut session), None);
    }

    #[test]
    fn test_expire_without_warning() {
        let (mut session, _) = session();
        assert_eq!(expire(&mut session), None);
    }
}
