//! Ray-casting related definitions and implementations.

#[doc(inline)]
pub use self::ray::{Ray, RayCast, RayHit};
pub use self::ray_aabb::ray_toi_with_aabb;
pub use self::ray_bounding_sphere::ray_toi_with_sphere;
pub use self::ray_plane::{
    ray_toi_with_plane, ray_toi_with_triangle_plane, segment_toi_with_plane,
    segment_toi_with_triangle_plane,
};
pub use self::ray_triangle::{local_ray_intersection_with_triangle, TriangleRayHit};

#[doc(hidden)]
pub mod ray;
mod ray_aabb;
mod ray_bounding_sphere;
mod ray_plane;
mod ray_triangle;
