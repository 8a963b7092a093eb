//! Bird physics: gravity, the ascend impulse, and play-area bounds.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
