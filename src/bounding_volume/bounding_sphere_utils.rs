use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real};

/// Finds an approximately most distant pair of points, looking only at the extreme points
/// along each coordinate axis.
///
/// For each axis, the points with the smallest and largest coordinate are found. The axis
/// whose extreme pair is the furthest apart wins, with ties resolved in favor of the first axis.
/// Returns the point indices of the winning pair, in `(min, max)` order, or `None` if `indices`
/// is empty.
pub fn most_separated_points_on_aabb<I>(pts: &[Point<Real>], indices: I) -> Option<(usize, usize)>
where
    I: IntoIterator<Item = usize>,
{
    let mut it = indices.into_iter();
    let first = it.next()?;
    let mut mins = [first; 3];
    let mut maxs = [first; 3];

    for i in it {
        let pt = &pts[i];
        for axis in 0..3 {
            if pt[axis] < pts[mins[axis]][axis] {
                mins[axis] = i;
            }
            if pt[axis] > pts[maxs[axis]][axis] {
                maxs[axis] = i;
            }
        }
    }

    let sq_dist = |axis: usize| (pts[maxs[axis]] - pts[mins[axis]]).norm_squared();
    let (dx, dy, dz) = (sq_dist(0), sq_dist(1), sq_dist(2));

    let best = if dy > dx && dy > dz {
        1
    } else if dz > dx && dz > dy {
        2
    } else {
        0
    };

    Some((mins[best], maxs[best]))
}

/// Computes an enclosing sphere of `pts` with Ritter's algorithm.
///
/// Returns `None` if `pts` is empty.
pub fn ritter_sphere(pts: &[Point<Real>]) -> Option<BoundingSphere> {
    ritter_sphere_with(pts, 0..pts.len())
}

/// Computes an enclosing sphere of the points of `pts` selected by `indices` with Ritter's
/// algorithm.
///
/// Returns `None` if `indices` is empty. Panics if an index is out of bounds.
pub fn indexed_ritter_sphere(pts: &[Point<Real>], indices: &[u32]) -> Option<BoundingSphere> {
    ritter_sphere_with(pts, indices.iter().map(|i| *i as usize))
}

fn ritter_sphere_with<I>(pts: &[Point<Real>], indices: I) -> Option<BoundingSphere>
where
    I: IntoIterator<Item = usize> + Clone,
{
    let (min, max) = most_separated_points_on_aabb(pts, indices.clone())?;
    let center = na::center(&pts[min], &pts[max]);
    let radius = na::distance(&pts[max], &center);
    let mut sphere = BoundingSphere::new(center, radius);

    for i in indices {
        sphere.grow_to_include(&pts[i]);
    }

    Some(sphere)
}
