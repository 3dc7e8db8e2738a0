use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::query::details::squared_distance_point_aabb;
use crate::query::QueryTolerances;

/// Intersection test between a sphere and an AABB, with the default tolerances.
#[inline]
pub fn intersection_test_sphere_aabb(sphere: &BoundingSphere, aabb: &Aabb) -> bool {
    intersection_test_sphere_aabb_with_tolerances(sphere, aabb, &QueryTolerances::default())
}

/// Intersection test between a sphere and an AABB.
///
/// The squared distance from the sphere center to the box is compared to the squared radius
/// enlarged by [`QueryTolerances::sphere_aabb_offset`].
#[inline]
pub fn intersection_test_sphere_aabb_with_tolerances(
    sphere: &BoundingSphere,
    aabb: &Aabb,
    tolerances: &QueryTolerances,
) -> bool {
    let sq_dist = squared_distance_point_aabb(&sphere.center, aabb);
    sq_dist <= sphere.radius * sphere.radius + tolerances.sphere_aabb_offset
}
