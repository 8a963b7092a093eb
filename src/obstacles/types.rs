//! Obstacle pair data.

use crate::core::geometry::Rect;

/// A top and bottom obstacle spawned together, with a gap between them.
///
/// The pair moves as one. `scorable` belongs to the bottom obstacle: it starts
/// set and is cleared the moment the bird passes, so each pair scores once.
#[derive(Debug, Clone, PartialEq)]
pub struct ObstaclePair {
    pub id: u64,
    /// Left edge of both obstacles.
    pub x: f64,
    pub width: f64,
    /// Bottom edge of the top obstacle.
    pub gap_top: f64,
    /// Top edge of the bottom obstacle.
    pub gap_bottom: f64,
    /// Vertical extent of each obstacle.
    pub length: f64,
    pub scorable: bool,
}

impl ObstaclePair {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top_bounds(&self) -> Rect {
        Rect::new(self.x, self.gap_top - self.length, self.width, self.length)
    }

    pub fn bottom_bounds(&self) -> Rect {
        Rect::new(self.x, self.gap_bottom, self.width, self.length)
    }

    /// Fully past the left edge of the play area.
    pub fn is_off_screen(&self) -> bool {
        self.right() <= 0.0
    }

    pub fn gap_height(&self) -> f64 {
        self.gap_bottom - self.gap_top
    }
}
