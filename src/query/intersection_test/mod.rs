//! Implementation details of the pairwise intersection tests.

pub use self::intersection_test_aabb_aabb::intersection_test_aabb_aabb;
pub use self::intersection_test_sphere_aabb::{
    intersection_test_sphere_aabb, intersection_test_sphere_aabb_with_tolerances,
};
pub use self::intersection_test_sphere_sphere::intersection_test_sphere_sphere;

mod intersection_test_aabb_aabb;
mod intersection_test_sphere_aabb;
mod intersection_test_sphere_sphere;
