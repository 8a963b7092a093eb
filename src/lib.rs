//! Skyward - a terminal side-scrolling reflex game.
//!
//! This library holds the game logic so it can be tested and simulated
//! without a terminal. The `skyward` binary adds input, rendering and the
//! frame loop on top.

pub mod bird;
pub mod build_info;
pub mod collision;
pub mod core;
pub mod difficulty;
pub mod obstacles;
pub mod simulator;
pub mod storage;
pub mod utils;

pub use crate::core::{Game, GameConfig, GameEvent, GameInput, GameSession, SessionState};
pub use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore};
