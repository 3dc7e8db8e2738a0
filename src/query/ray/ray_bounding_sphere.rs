use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real};
use crate::query::{QueryTolerances, Ray, RayCast, RayHit};
use num::Zero;

impl RayCast for BoundingSphere {
    #[inline]
    fn cast_ray_with_tolerances(&self, ray: &Ray, _: &QueryTolerances) -> Option<RayHit> {
        ray_toi_with_sphere(&self.center, self.radius, ray)
    }
}

/// Computes the first hit of a ray on a sphere.
///
/// The ray misses if it starts outside of the sphere and points away from it. A ray starting
/// inside of the sphere hits it at `t = 0`.
#[inline]
pub fn ray_toi_with_sphere(center: &Point<Real>, radius: Real, ray: &Ray) -> Option<RayHit> {
    let dcenter = ray.origin - *center;

    let a = ray.dir.norm_squared();
    let b = dcenter.dot(&ray.dir);
    let c = dcenter.norm_squared() - radius * radius;

    // Special case for when the dir is zero.
    if a.is_zero() {
        return if c > 0.0 {
            None
        } else {
            Some(RayHit::at(ray, 0.0))
        };
    }

    if c > 0.0 && b > 0.0 {
        return None;
    }

    let delta = b * b - a * c;

    if delta < 0.0 {
        // no solution
        return None;
    }

    let t = (-b - delta.sqrt()) / a;
    Some(RayHit::at(ray, t.max(0.0)))
}
