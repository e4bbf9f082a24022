//! Axis-aligned rectangle geometry for collision surfaces
//!
//! Everything that can be hit in the playfield - the actor's body, obstacle
//! barriers and their cap lips - is an axis-aligned box, so overlap tests
//! reduce to interval checks on each axis.

use glam::Vec2;

/// An axis-aligned bounding box, y growing downward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Aabb {
    /// Build from top-left corner and size
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    /// Build from center point and half-extents
    pub fn from_center_half(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap test; touching edges do not count as an intersection
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Check if a point lies inside (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}
