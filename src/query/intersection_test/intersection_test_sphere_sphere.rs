use crate::bounding_volume::BoundingSphere;

/// Intersection test between spheres.
///
/// Spheres that exactly touch are considered intersecting.
#[inline]
pub fn intersection_test_sphere_sphere(s1: &BoundingSphere, s2: &BoundingSphere) -> bool {
    let distance_squared = (s2.center - s1.center).norm_squared();
    let sum_radius = s1.radius + s2.radius;
    distance_squared <= sum_radius * sum_radius
}
