//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`intersection_test_sphere_sphere`], [`intersection_test_aabb_aabb`] and
//!   [`intersection_test_sphere_aabb`] to determine if two bounding volumes overlap.
//! * The [`RayCast`] trait to compute the first point where a ray hits a bounding volume, a
//!   plane or a triangle.
//! * [`time_of_impact_sphere_sphere`] to estimate when two moving spheres meet.
//!
//! Every threshold these queries rely on is gathered in [`QueryTolerances`].
//!
//! # Specific cases
//! The functions exported by the `details` submodule are more specific versions of the ones
//! described above, working on raw geometric data instead of shapes.

pub use self::intersection_test::{
    intersection_test_aabb_aabb, intersection_test_sphere_aabb,
    intersection_test_sphere_aabb_with_tolerances, intersection_test_sphere_sphere,
};
pub use self::point::{closest_point_on_aabb, squared_distance_point_aabb};
pub use self::query_tolerances::QueryTolerances;
pub use self::ray::{Ray, RayCast, RayHit};
pub use self::time_of_impact::time_of_impact_sphere_sphere;

mod intersection_test;
mod point;
mod query_tolerances;
mod ray;
mod time_of_impact;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::intersection_test::*;
    pub use super::point::*;
    pub use super::ray::{
        local_ray_intersection_with_triangle, ray_toi_with_aabb, ray_toi_with_plane,
        ray_toi_with_sphere, ray_toi_with_triangle_plane, segment_toi_with_plane,
        segment_toi_with_triangle_plane, TriangleRayHit,
    };
    pub use super::time_of_impact::*;
}
