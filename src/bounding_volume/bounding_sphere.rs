//! Bounding sphere.

use crate::bounding_volume::{bounding_sphere_utils, BoundingVolume};
use crate::math::{Point, Real, Transform};
use crate::query::details::intersection_test_sphere_sphere;
use crate::utils::TransformOps;
use num::Zero;

/// A Bounding Sphere.
///
/// A bounding sphere is a spherical bounding volume defined by a center point and a radius.
/// Its tests are rotation-invariant, which makes it well suited to objects that rotate a lot,
/// at the cost of a looser fit than an [`Aabb`](crate::bounding_volume::Aabb) for elongated
/// shapes.
///
/// # Example
///
/// ```rust
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use bvtree3d::bounding_volume::BoundingSphere;
/// use bvtree3d::math::Point;
///
/// let points = [
///     Point::new(-1.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(0.0, 0.5, 0.0),
/// ];
/// let sphere = BoundingSphere::ritter(&points).unwrap();
///
/// assert_eq!(sphere.center, Point::origin());
/// assert_eq!(sphere.radius, 1.0);
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The center of the bounding sphere.
    pub center: Point<Real>,
    /// The radius of the bounding sphere. Never negative.
    pub radius: Real,
}

impl Default for BoundingSphere {
    fn default() -> Self {
        Self::new(Point::origin(), 0.0)
    }
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// Computes a sphere enclosing every point of `pts` with Ritter's algorithm.
    ///
    /// The sphere is seeded with the most distant pair among the extreme points along each
    /// coordinate axis, then grown once for every point lying outside of it. The result
    /// encloses every point but is generally not the smallest enclosing sphere.
    ///
    /// Returns `None` if `pts` is empty.
    pub fn ritter(pts: &[Point<Real>]) -> Option<BoundingSphere> {
        bounding_sphere_utils::ritter_sphere(pts)
    }

    /// Computes, with Ritter's algorithm, a sphere enclosing the points of `pts` selected by
    /// `indices`.
    ///
    /// Returns `None` if `indices` is empty. Panics if an index is out of bounds.
    pub fn ritter_indexed(pts: &[Point<Real>], indices: &[u32]) -> Option<BoundingSphere> {
        bounding_sphere_utils::indexed_ritter_sphere(pts, indices)
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Grows this sphere just enough to enclose `pt`.
    ///
    /// The new sphere is the smallest one enclosing both `self` and `pt`. Does nothing if `pt`
    /// is already inside.
    #[inline]
    pub fn grow_to_include(&mut self, pt: &Point<Real>) {
        let d = pt - self.center;
        let dist2 = d.norm_squared();

        if dist2 > self.radius * self.radius {
            let dist = dist2.sqrt();
            let new_radius = (self.radius + dist) * 0.5;
            let k = (new_radius - self.radius) / dist;
            self.radius = new_radius;
            self.center += d * k;
        }
    }

    /// Computes a sphere enclosing the image of `self` by the affine transform `m`.
    ///
    /// The center is mapped by `m` and the radius is multiplied by the largest stretch factor
    /// of the linear part of `m`.
    #[inline]
    pub fn transform_by(&self, m: &Transform<Real>) -> BoundingSphere {
        BoundingSphere::new(
            m.transform_affine_point(&self.center),
            self.radius * m.max_axis_scale(),
        )
    }

    /// Does this sphere contain `pt`? Points on the boundary are considered inside.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        na::distance_squared(&self.center, pt) <= self.radius * self.radius
    }
}

impl BoundingVolume for BoundingSphere {
    #[inline]
    fn center(&self) -> Point<Real> {
        *self.center()
    }

    #[inline]
    fn intersects(&self, other: &BoundingSphere) -> bool {
        intersection_test_sphere_sphere(self, other)
    }

    #[inline]
    fn contains(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let distance = delta_pos.norm();

        distance + other.radius <= self.radius
    }

    #[inline]
    fn merge(&mut self, other: &BoundingSphere) {
        let mut dir = *other.center() - *self.center();
        let norm = dir.normalize_mut();

        if norm.is_zero() {
            if other.radius > self.radius {
                self.radius = other.radius
            }
        } else {
            let s_center_dir = self.center.coords.dot(&dir);
            let o_center_dir = other.center.coords.dot(&dir);

            let right = if s_center_dir + self.radius > o_center_dir + other.radius {
                self.center + dir * self.radius
            } else {
                other.center + dir * other.radius
            };

            let left = if -s_center_dir + self.radius > -o_center_dir + other.radius {
                self.center - dir * self.radius
            } else {
                other.center - dir * other.radius
            };

            self.center = na::center(&left, &right);
            self.radius = na::distance(&right, &self.center);
        }
    }

    #[inline]
    fn merged(&self, other: &BoundingSphere) -> BoundingSphere {
        let mut res = *self;
        res.merge(other);
        res
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.radius += amount
    }

    #[inline]
    fn loosened(&self, amount: Real) -> BoundingSphere {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        BoundingSphere::new(self.center, self.radius + amount)
    }
}
