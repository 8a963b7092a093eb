//! Headless balance simulator.
//!
//! Plays seeded runs with a simple autopilot to see how far difficulty
//! escalation lets a competent player get. Uses the same [`crate::core::tick::step`]
//! as the interactive game, so results match real play.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::should_ascend;
pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
