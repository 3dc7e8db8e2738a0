use crate::math::{Point, Real, Vector};
use crate::query::{QueryTolerances, Ray, RayCast, RayHit};
use crate::shape::{Plane, Segment};

impl RayCast for Plane {
    #[inline]
    fn cast_ray_with_tolerances(&self, ray: &Ray, _: &QueryTolerances) -> Option<RayHit> {
        ray_toi_with_plane(self, ray)
    }
}

// Parameter along `origin + dir * t` where the line crosses `n · x = d`.
//
// A line parallel to the plane yields a NaN or an infinity, rejected by the callers.
#[inline]
fn line_toi_with_plane(
    n: &Vector<Real>,
    d: Real,
    origin: &Point<Real>,
    dir: &Vector<Real>,
) -> Real {
    (d - n.dot(&origin.coords)) / n.dot(dir)
}

/// Computes where a ray crosses a plane.
///
/// The plane normal does not need to be normalized. Returns `None` if the plane is behind the
/// ray or parallel to it.
#[inline]
pub fn ray_toi_with_plane(plane: &Plane, ray: &Ray) -> Option<RayHit> {
    let t = line_toi_with_plane(&plane.normal(), plane.d, &ray.origin, &ray.dir);

    if t >= 0.0 && t.is_finite() {
        Some(RayHit::at(ray, t))
    } else {
        None
    }
}

/// Computes where a segment crosses a plane.
///
/// The time of impact is in `[0, 1]`: `0` at `segment.a` and `1` at `segment.b`. Returns `None`
/// if the segment does not reach the plane or is parallel to it.
#[inline]
pub fn segment_toi_with_plane(plane: &Plane, segment: &Segment) -> Option<RayHit> {
    let ray = Ray::new(segment.a, segment.scaled_direction());

    ray_toi_with_plane(plane, &ray).filter(|hit| hit.time_of_impact <= 1.0)
}

// The plane through `a`, `b`, `c` with the non-normalized normal `(b - a) × (c - a)`.
#[inline]
fn triangle_plane(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Plane {
    let n = (b - a).cross(&(c - a));
    Plane::new(n, n.dot(&a.coords))
}

/// Computes where a ray crosses the plane containing the triangle `(a, b, c)`.
///
/// The hit point is not required to lie inside of the triangle. Returns `None` if the plane is
/// behind the ray or parallel to it, or if the triangle is degenerate.
#[inline]
pub fn ray_toi_with_triangle_plane(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    ray: &Ray,
) -> Option<RayHit> {
    ray_toi_with_plane(&triangle_plane(a, b, c), ray)
}

/// Computes where a segment crosses the plane containing the triangle `(a, b, c)`.
///
/// See [`segment_toi_with_plane`] for the meaning of the result.
#[inline]
pub fn segment_toi_with_triangle_plane(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    segment: &Segment,
) -> Option<RayHit> {
    segment_toi_with_plane(&triangle_plane(a, b, c), segment)
}
