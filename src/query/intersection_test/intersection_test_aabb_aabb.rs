use crate::bounding_volume::Aabb;
use crate::math::DIM;

/// Intersection test between AABBs.
///
/// The boxes are separated if, along some coordinate axis, the distance between their centers
/// exceeds the sum of their half-extents. Touching boxes are considered intersecting.
#[inline]
pub fn intersection_test_aabb_aabb(aabb1: &Aabb, aabb2: &Aabb) -> bool {
    let delta = aabb1.center - aabb2.center;
    let sum_half_extents = aabb1.half_extents + aabb2.half_extents;

    (0..DIM).all(|i| delta[i].abs() <= sum_half_extents[i].abs())
}
