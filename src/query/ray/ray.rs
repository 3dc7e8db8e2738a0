//! Traits and structure needed to cast rays.

use crate::math::{Point, Real, Transform, Vector};
use crate::query::QueryTolerances;
use crate::utils::TransformOps;

/// A ray that can be cast against bounding volumes, planes and triangles.
///
/// A ray is a half-infinite line starting at `origin` and going toward `dir`. The points of the
/// ray are `origin + dir * t` for `t >= 0`, so `t` is measured in multiples of `dir`'s length.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction of the ray. Not necessarily normalized.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray starting from `origin` and with the direction `dir`.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Transforms this ray by the affine transform `m`.
    #[inline]
    pub fn transform_by(&self, m: &Transform<Real>) -> Self {
        Self::new(
            m.transform_affine_point(&self.origin),
            m.transform_affine_vector(&self.dir),
        )
    }

    /// Computes the point at the given parameter on this ray.
    ///
    /// This is computed as `self.origin + self.dir * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}

/// Where a ray or a segment hits a shape.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RayHit {
    /// The parameter `t` of the hit along the ray: the hit point is `origin + dir * t`.
    pub time_of_impact: Real,
    /// The hit point.
    pub point: Point<Real>,
}

impl RayHit {
    /// The hit of `ray` at the parameter `time_of_impact`.
    #[inline]
    pub fn at(ray: &Ray, time_of_impact: Real) -> Self {
        RayHit {
            time_of_impact,
            point: ray.point_at(time_of_impact),
        }
    }
}

/// Traits of objects which can be tested for intersection with a ray.
pub trait RayCast {
    /// Computes the first hit of `ray` on `self`, using `tolerances` to detect parallelism.
    ///
    /// A ray starting inside of a solid volume hits it at `t = 0`.
    fn cast_ray_with_tolerances(&self, ray: &Ray, tolerances: &QueryTolerances)
        -> Option<RayHit>;

    /// Computes the first hit of `ray` on `self` with the default tolerances.
    #[inline]
    fn cast_ray(&self, ray: &Ray) -> Option<RayHit> {
        self.cast_ray_with_tolerances(ray, &QueryTolerances::default())
    }

    /// Computes the parameter of the first hit of `ray` on `self`, if it is not larger than
    /// `max_time_of_impact`.
    #[inline]
    fn cast_ray_toi(&self, ray: &Ray, max_time_of_impact: Real) -> Option<Real> {
        self.cast_ray(ray)
            .map(|hit| hit.time_of_impact)
            .filter(|toi| *toi <= max_time_of_impact)
    }

    /// Tests whether `ray` hits `self`.
    #[inline]
    fn intersects_ray(&self, ray: &Ray) -> bool {
        self.cast_ray(ray).is_some()
    }
}
