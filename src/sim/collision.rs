//! Collision detection for axis-aligned car boxes
//!
//! Both cars are fixed-size rectangles anchored at their top-left corner.
//! The overlap test is non-strict: two boxes only miss each other when one
//! lies strictly to the left, right, above or below the other, so boxes that
//! merely share an edge count as a crash.

use glam::Vec2;

use crate::consts::{CAR_HEIGHT, CAR_WIDTH};

/// An axis-aligned bounding box in track coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Bounding box of a car whose top-left corner is at `pos`
    #[inline]
    pub fn from_car(pos: Vec2) -> Self {
        Self::new(pos, pos + Vec2::new(CAR_WIDTH, CAR_HEIGHT))
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// True if `other` lies strictly outside this box on some axis
    #[inline]
    pub fn separated_from(&self, other: &Aabb) -> bool {
        self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y
    }

    /// Boundary-inclusive overlap test
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        !self.separated_from(other)
    }
}

/// Check whether the player car and the obstacle car touch or overlap
pub fn cars_collide(player: Vec2, obstacle: Vec2) -> bool {
    Aabb::from_car(player).overlaps(&Aabb::from_car(obstacle))
}
