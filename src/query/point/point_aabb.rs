use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};

// Componentwise shift moving `pt` onto the closest point of `aabb`. Zero if `pt` is inside.
#[inline]
fn shift_to_aabb(pt: &Point<Real>, aabb: &Aabb) -> Vector<Real> {
    let mins_pt = aabb.mins() - pt;
    let pt_maxs = pt - aabb.maxs();
    mins_pt.sup(&Vector::zeros()) - pt_maxs.sup(&Vector::zeros())
}

/// The squared distance between `pt` and `aabb`, zero if `pt` is inside of the box.
///
/// This is the sum, over each axis, of the squared amount by which `pt` lies outside of the box.
#[inline]
pub fn squared_distance_point_aabb(pt: &Point<Real>, aabb: &Aabb) -> Real {
    shift_to_aabb(pt, aabb).norm_squared()
}

/// The point of `aabb` closest to `pt`, i.e., `pt` clamped to the box.
#[inline]
pub fn closest_point_on_aabb(pt: &Point<Real>, aabb: &Aabb) -> Point<Real> {
    pt + shift_to_aabb(pt, aabb)
}
