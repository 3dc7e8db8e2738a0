use core::mem;

use crate::bounding_volume::Aabb;
use crate::math::{Real, DIM};
use crate::query::{QueryTolerances, Ray, RayCast, RayHit};

impl RayCast for Aabb {
    #[inline]
    fn cast_ray_with_tolerances(
        &self,
        ray: &Ray,
        tolerances: &QueryTolerances,
    ) -> Option<RayHit> {
        ray_toi_with_aabb(self, ray, tolerances.parallel_epsilon)
    }
}

/// Computes the first hit of a ray on an AABB with the slab method.
///
/// The parameter interval of the ray is clipped against the pair of planes bounding the box along
/// each axis. A direction component whose absolute value is below `parallel_epsilon` is treated
/// as parallel to its slab: the ray then misses unless its origin lies between the two planes.
/// A ray starting inside of the box hits it at `t = 0`.
pub fn ray_toi_with_aabb(aabb: &Aabb, ray: &Ray, parallel_epsilon: Real) -> Option<RayHit> {
    let mins = aabb.mins();
    let maxs = aabb.maxs();
    let mut tmin: Real = 0.0;
    let mut tmax = Real::MAX;

    for i in 0usize..DIM {
        if ray.dir[i].abs() < parallel_epsilon {
            if ray.origin[i] < mins[i] || ray.origin[i] > maxs[i] {
                return None;
            }
        } else {
            let denom = 1.0 / ray.dir[i];
            let mut inter_with_near_halfspace = (mins[i] - ray.origin[i]) * denom;
            let mut inter_with_far_halfspace = (maxs[i] - ray.origin[i]) * denom;

            if inter_with_near_halfspace > inter_with_far_halfspace {
                mem::swap(
                    &mut inter_with_near_halfspace,
                    &mut inter_with_far_halfspace,
                )
            }

            tmin = tmin.max(inter_with_near_halfspace);
            tmax = tmax.min(inter_with_far_halfspace);

            if tmin > tmax {
                // This covers the case where tmax is negative because tmin is
                // initialized at zero.
                return None;
            }
        }
    }

    Some(RayHit::at(ray, tmin))
}
