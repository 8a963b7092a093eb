//! Core game loop: session state, the fixed-step clock, and per-tick orchestration.

pub mod clock;
pub mod config;
pub mod constants;
pub mod controls;
pub mod game;
pub mod game_state;
pub mod geometry;
pub mod tick;
pub mod warning;

pub use clock::Clock;
pub use config::GameConfig;
pub use constants::*;
pub use controls::{process_input, GameInput};
pub use game::Game;
pub use game_state::{GameSession, Prompt, SessionState};
pub use geometry::Rect;
pub use tick::{advance, step, CrashCause, GameEvent};
