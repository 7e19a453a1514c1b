//! Axis-aligned bounding-box collision
//!
//! Circles collide by their bounding squares, not their true outlines. A
//! player can therefore eat a collectible or hit an obstacle diagonally
//! before the discs visibly touch; that is how the game has always played.

use glam::Vec2;

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Rect {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    /// Bounding square of a circle (`2 * radius` per side)
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self {
            min: center - Vec2::splat(radius),
            max: center + Vec2::splat(radius),
        }
    }

    /// True if the rectangles overlap or share an edge
    #[inline]
    pub fn touches(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}
