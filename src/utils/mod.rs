//! Filesystem and logging helpers shared by both binaries.

pub mod logging;
pub mod persistence;
