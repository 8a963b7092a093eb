//! Key bindings for the game screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use skyward::core::GameInput;

/// What a key event means to the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Game(GameInput),
    Quit,
    Ignore,
}

/// Enter starts, Space/Up ascend, Q/Esc/Ctrl-C quit.
///
/// Release events only arrive on terminals that support the kitty keyboard
/// protocol; elsewhere the frame loop synthesizes the release.
pub fn map_key(key: KeyEvent) -> KeyAction {
    let released = key.kind == KeyEventKind::Release;

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => {
            if released {
                KeyAction::Game(GameInput::AscendRelease)
            } else {
                KeyAction::Game(GameInput::AscendPress)
            }
        }
        _ if released => KeyAction::Ignore,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Enter => KeyAction::Game(GameInput::Start),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
        _ => KeyAction::Ignore,
    }
}
