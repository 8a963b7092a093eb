//! Terminal rendering. Reads the session and presentation state; never mutates either.

pub mod game_common;
pub mod game_scene;

use crate::game_events::Presentation;
use ratatui::Frame;
use skyward::core::{GameConfig, GameSession};

/// Draw one frame.
pub fn draw(frame: &mut Frame, session: &GameSession, config: &GameConfig, presentation: &Presentation) {
    let area = frame.size();
    game_scene::render_game_scene(frame, area, session, config, presentation);
}
