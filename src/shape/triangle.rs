//! Definition of the triangle shape.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::utils;
use na::Unit;

/// A triangle shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// Creates the triangle `(vertices[idx[0]], vertices[idx[1]], vertices[idx[2]])`.
    ///
    /// Panics if any index is out of bounds.
    #[inline]
    pub fn from_indices(vertices: &[Point<Real>], idx: [u32; 3]) -> Triangle {
        Triangle::new(
            vertices[idx[0] as usize],
            vertices[idx[1] as usize],
            vertices[idx[2] as usize],
        )
    }

    /// The vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// A vector normal of this triangle.
    ///
    /// The vector points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product). Its length is twice the area of the triangle.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The normal of this triangle assuming it is oriented ccw.
    ///
    /// Returns `None` if the triangle is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.scaled_normal(), DEFAULT_EPSILON)
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * 0.5
    }

    /// The barycenter of this triangle, i.e., the mean of its vertices.
    #[inline]
    pub fn barycenter(&self) -> Point<Real> {
        utils::triangle_barycenter(&self.a, &self.b, &self.c)
    }
}
