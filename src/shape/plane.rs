//! Implicit planes and the lines and points where they meet.

use crate::math::{Point, Real, Vector, Vector4};

/// The plane `a * x + b * y + c * z = d`.
///
/// The normal of the plane is `(a, b, c)`. It has unit length when the plane is built with
/// [`Plane::from_points`], but not necessarily when it is built from raw coefficients.
#[derive(PartialEq, Debug, Copy, Clone, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Plane {
    /// The `x` component of the normal.
    pub a: Real,
    /// The `y` component of the normal.
    pub b: Real,
    /// The `z` component of the normal.
    pub c: Real,
    /// The offset of the plane along its normal.
    pub d: Real,
}

/// An infinite line, result of the intersection of two planes.
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Line {
    /// A point on the line.
    pub point: Point<Real>,
    /// The direction of the line. Not normalized.
    pub direction: Vector<Real>,
}

impl Plane {
    /// Builds the plane from its four coefficients.
    #[inline]
    pub fn from_coefficients(a: Real, b: Real, c: Real, d: Real) -> Self {
        Self { a, b, c, d }
    }

    /// Builds the plane from a normal and an offset.
    #[inline]
    pub fn new(normal: Vector<Real>, d: Real) -> Self {
        Self::from_coefficients(normal.x, normal.y, normal.z, d)
    }

    /// Builds the plane from the coefficients `(a, b, c, d)` stored in a 4D vector.
    #[inline]
    pub fn from_vector4(coeffs: &Vector4<Real>) -> Self {
        Self::from_coefficients(coeffs.x, coeffs.y, coeffs.z, coeffs.w)
    }

    /// Builds the plane passing through three points.
    ///
    /// The normal is the normalized `(pb - pa) × (pc - pa)`. Returns `None` if the three points
    /// are collinear.
    pub fn from_points(pa: &Point<Real>, pb: &Point<Real>, pc: &Point<Real>) -> Option<Self> {
        let normal = (pb - pa).cross(&(pc - pa)).try_normalize(0.0)?;
        Some(Self::new(normal, normal.dot(&pa.coords)))
    }

    /// The coefficients `(a, b, c, d)` of this plane.
    #[inline]
    pub fn to_vector4(&self) -> Vector4<Real> {
        Vector4::new(self.a, self.b, self.c, self.d)
    }

    /// The normal `(a, b, c)` of this plane.
    #[inline]
    pub fn normal(&self) -> Vector<Real> {
        Vector::new(self.a, self.b, self.c)
    }

    /// Evaluates `n · p - d`.
    ///
    /// This is the signed distance from `p` to the plane if the normal has unit length.
    #[inline]
    pub fn signed_distance(&self, p: &Point<Real>) -> Real {
        self.normal().dot(&p.coords) - self.d
    }

    /// Computes the line along which `self` and `other` meet.
    ///
    /// Returns `None` if the planes are parallel or coincident.
    pub fn intersect_two_planes(&self, other: &Plane) -> Option<Line> {
        let n1 = self.normal();
        let n2 = other.normal();
        let direction = n1.cross(&n2);
        let denom = direction.norm_squared();

        if denom < Real::EPSILON {
            return None;
        }

        let tmp = n2 * self.d - n1 * other.d;
        let point = Point::from(tmp.cross(&direction) / denom);

        Some(Line { point, direction })
    }

    /// Computes the single point shared by the three planes `p1`, `p2` and `p3`.
    ///
    /// Returns `None` if the planes do not meet at a unique point.
    pub fn intersect_three_planes(p1: &Plane, p2: &Plane, p3: &Plane) -> Option<Point<Real>> {
        let n1 = p1.normal();
        let n2 = p2.normal();
        let n3 = p3.normal();

        let u = n2.cross(&n3);
        let denom = n1.dot(&u);

        if denom.abs() < Real::EPSILON {
            return None;
        }

        let w = n1.cross(&(n2 * p3.d - n3 * p2.d));
        Some(Point::from((u * p1.d + w) / denom))
    }
}

impl From<Vector4<Real>> for Plane {
    fn from(coeffs: Vector4<Real>) -> Self {
        Self::from_vector4(&coeffs)
    }
}
