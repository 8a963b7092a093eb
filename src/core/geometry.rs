//! Axis-aligned rectangles in world units.

/// An axis-aligned box. `top` is the smaller y value since y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn mid_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Strict overlap on both axes. Rectangles that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.overlaps_horizontally(other)
            && self.top < other.bottom()
            && self.bottom() > other.top
    }

    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.left < other.right() && self.right() > other.left
    }
}
