//! Collision and scoring: the per-tick pass over every active obstacle pair.

pub mod logic;

pub use logic::*;
