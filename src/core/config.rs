//! Tunable game parameters.
//!
//! Every value has a default in [`super::constants`]. Players can override any
//! subset by dropping a `config.json` into `~/.skyward/`; unknown or missing
//! fields fall back to the defaults.

use super::constants::*;
use crate::utils::persistence::load_json_or_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Simulation tick length in milliseconds.
    pub tick_ms: u64,
    pub warning_cooldown_ms: u64,

    pub play_width: f64,
    pub play_height: f64,

    pub gravity: f64,
    /// Velocity the bird is set to on ascend (negative = upward).
    pub ascend_impulse: f64,
    pub bird_x: f64,
    pub bird_start_y: f64,
    pub bird_width: f64,
    pub bird_height: f64,
    /// Distance from the top or bottom bound that raises a warning.
    pub danger_zone: f64,

    pub obstacle_width: f64,
    pub obstacle_length: f64,
    pub gap_height: f64,
    /// Gap top is `offset * gap_offset_unit` with `offset` rolled from
    /// `gap_offset_min..=gap_offset_max`.
    pub gap_offset_min: u32,
    pub gap_offset_max: u32,
    pub gap_offset_unit: f64,
    /// How close the bird's midpoint may get to a gap edge before warning.
    pub gap_safety_buffer: f64,

    pub base_speed: f64,
    pub max_speed: f64,
    pub speed_step: f64,
    /// Spawn intervals are measured in ticks.
    pub base_spawn_interval: u32,
    pub min_spawn_interval: u32,
    pub spawn_interval_step: u32,
    pub level_up_every: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: PHYSICS_TICK_MS,
            warning_cooldown_ms: WARNING_COOLDOWN_MS,
            play_width: PLAY_WIDTH,
            play_height: PLAY_HEIGHT,
            gravity: GRAVITY,
            ascend_impulse: ASCEND_IMPULSE,
            bird_x: BIRD_X,
            bird_start_y: BIRD_START_Y,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            danger_zone: DANGER_ZONE,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_length: OBSTACLE_LENGTH,
            gap_height: GAP_HEIGHT,
            gap_offset_min: GAP_OFFSET_MIN,
            gap_offset_max: GAP_OFFSET_MAX,
            gap_offset_unit: VH,
            gap_safety_buffer: GAP_SAFETY_BUFFER,
            base_speed: BASE_SPEED,
            max_speed: MAX_SPEED,
            speed_step: SPEED_STEP,
            base_spawn_interval: BASE_SPAWN_INTERVAL,
            min_spawn_interval: MIN_SPAWN_INTERVAL,
            spawn_interval_step: SPAWN_INTERVAL_STEP,
            level_up_every: LEVEL_UP_EVERY,
        }
    }
}

impl GameConfig {
    /// Load `~/.skyward/config.json`, or the defaults if it is missing or malformed.
    pub fn load() -> Self {
        load_json_or_default::<Self>(CONFIG_FILENAME).validated()
    }

    /// Repair values that would break the difficulty bounds or stall the clock.
    pub fn validated(mut self) -> Self {
        self.tick_ms = self.tick_ms.max(1);
        self.level_up_every = self.level_up_every.max(1);
        if self.max_speed < self.base_speed {
            self.max_speed = self.base_speed;
        }
        if self.min_spawn_interval > self.base_spawn_interval {
            self.min_spawn_interval = self.base_spawn_interval;
        }
        if self.gap_offset_max < self.gap_offset_min {
            self.gap_offset_max = self.gap_offset_min;
        }
        self
    }
}
