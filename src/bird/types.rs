//! Bird data.

use crate::core::config::GameConfig;
use crate::core::geometry::Rect;

/// The player's bird. Only `y` and `velocity` change during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Fixed horizontal position of the left edge.
    pub x: f64,
    /// Top edge, in world units from the top of the play area.
    pub y: f64,
    /// Vertical velocity in units/tick (positive = downward).
    pub velocity: f64,
    pub width: f64,
    pub height: f64,
    /// Ascend is held down. Drives the flap sprite only.
    pub ascending: bool,
}

impl Bird {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_x,
            y: config.bird_start_y,
            velocity: 0.0,
            width: config.bird_width,
            height: config.bird_height,
            ascending: false,
        }
    }

    /// Put the bird back at its start position, at rest.
    pub fn reset(&mut self, config: &GameConfig) {
        *self = Self::new(config);
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}
