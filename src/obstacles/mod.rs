//! Obstacle pairs: spawning on a tick counter and their world geometry.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
