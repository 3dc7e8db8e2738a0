use na::{Matrix2, Vector2};

use crate::math::Real;
use crate::query::{QueryTolerances, Ray, RayCast, RayHit};
use crate::shape::Triangle;

/// A ray hit on a triangle, with the barycentric coordinates of the hit point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangleRayHit {
    /// The hit along the ray.
    pub hit: RayHit,
    /// The barycentric coordinates `[w, u, v]` of the hit point: it equals `w * a + u * b + v * c`.
    pub barycentric: [Real; 3],
}

impl RayCast for Triangle {
    #[inline]
    fn cast_ray_with_tolerances(
        &self,
        ray: &Ray,
        tolerances: &QueryTolerances,
    ) -> Option<RayHit> {
        local_ray_intersection_with_triangle(self, ray, tolerances.parallel_epsilon)
            .map(|inter| inter.hit)
    }
}

/// Computes the intersection between a ray and a triangle.
///
/// The ray is first intersected with the plane of the triangle. The ray misses if it is
/// parallel to that plane (the dot product between the unit normal and the ray direction is
/// below `parallel_epsilon` in absolute value) or if the plane is behind it. The hit point is
/// then expressed in the basis `(b - a, c - a)` by solving a 2×2 system, and is accepted if
/// its coordinates `u`, `v` satisfy `u >= 0`, `v >= 0` and `u + v <= 1`.
///
/// Degenerate triangles are never hit. Both faces of the triangle can be hit.
pub fn local_ray_intersection_with_triangle(
    triangle: &Triangle,
    ray: &Ray,
    parallel_epsilon: Real,
) -> Option<TriangleRayHit> {
    let normal = triangle.normal()?;
    let n_dot_dir = normal.dot(&ray.dir);

    if n_dot_dir.abs() < parallel_epsilon {
        return None;
    }

    let t = normal.dot(&(triangle.a - ray.origin)) / n_dot_dir;

    if t < 0.0 {
        return None;
    }

    let pt = ray.point_at(t);
    let r = pt - triangle.a;
    let q1 = triangle.b - triangle.a;
    let q2 = triangle.c - triangle.a;

    let q1q2 = q1.dot(&q2);
    let gram = Matrix2::new(q1.norm_squared(), q1q2, q1q2, q2.norm_squared());
    let rhs = Vector2::new(r.dot(&q1), r.dot(&q2));
    let uv = gram.try_inverse()? * rhs;

    if uv.x < 0.0 || uv.y < 0.0 || uv.x + uv.y > 1.0 {
        return None;
    }

    Some(TriangleRayHit {
        hit: RayHit {
            time_of_impact: t,
            point: pt,
        },
        barycentric: [1.0 - uv.x - uv.y, uv.x, uv.y],
    })
}
