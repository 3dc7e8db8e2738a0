use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Transform};
use crate::utils::TransformOps;

/// Computes the AABB of a set of points transformed by `m`.
///
/// Returns `None` if `pts` yields no point.
pub fn point_cloud_aabb<'a, I>(m: &Transform<Real>, pts: I) -> Option<Aabb>
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    local_point_cloud_aabb_owned(pts.into_iter().map(|pt| m.transform_affine_point(pt)))
}

/// Computes the AABB of a set of points.
///
/// Returns `None` if `pts` yields no point.
pub fn local_point_cloud_aabb<'a, I>(pts: I) -> Option<Aabb>
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    local_point_cloud_aabb_owned(pts.into_iter().copied())
}

/// Computes the AABB of the points `pts[indices[0]]`, `pts[indices[1]]`, etc.
///
/// Indices may be repeated. Returns `None` if `indices` is empty.
///
/// # Panics
///
/// Panics if any index is out of bounds of `pts`.
pub fn indexed_point_cloud_aabb(pts: &[Point<Real>], indices: &[u32]) -> Option<Aabb> {
    local_point_cloud_aabb_owned(indices.iter().map(|i| pts[*i as usize]))
}

fn local_point_cloud_aabb_owned<I>(pts: I) -> Option<Aabb>
where
    I: IntoIterator<Item = Point<Real>>,
{
    let mut it = pts.into_iter();

    let p0 = it.next()?;
    let mut min: Point<Real> = p0;
    let mut max: Point<Real> = p0;

    for pt in it {
        min = min.inf(&pt);
        max = max.sup(&pt);
    }

    Some(Aabb::from_mins_maxs(min, max))
}
