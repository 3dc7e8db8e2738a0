use crate::math::{Point, Real};

/// The barycenter of the triangle `(a, b, c)`, i.e., the mean of its three vertices.
#[inline]
pub fn triangle_barycenter(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Point<Real> {
    Point::from((a.coords + b.coords + c.coords) / 3.0)
}
