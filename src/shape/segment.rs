//! Definition of the segment shape.

use crate::math::{Point, Real, Vector};

/// A segment shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    #[inline]
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The point at parameter `t` along this segment: `a` for `t = 0`, `b` for `t = 1`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.a + self.scaled_direction() * t
    }
}
