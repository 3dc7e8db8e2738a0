//! Axis Aligned Bounding Box.

use crate::bounding_volume::{aabb_utils, BoundingVolume};
use crate::math::{Point, Real, Transform, Vector, DIM};
use crate::query::details::intersection_test_aabb_aabb;
use crate::query::QueryTolerances;
use crate::utils::TransformOps;

/// An Axis-Aligned Bounding Box (AABB).
///
/// The box is stored as its center and its half-extents, i.e., the distance from the center to
/// each face along each coordinate axis. Its corners are `center ∓ half_extents`.
///
/// Every component of `half_extents` is expected to be non-negative. All the constructors of
/// this type preserve this invariant.
///
/// # Example
///
/// ```rust
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use bvtree3d::bounding_volume::Aabb;
/// use bvtree3d::math::{Point, Vector};
///
/// let points = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
///     Point::new(1.0, 1.0, 1.0),
/// ];
/// let aabb = Aabb::from_points(&points).unwrap();
///
/// assert_eq!(aabb.center, Point::new(0.5, 0.5, 0.5));
/// assert_eq!(aabb.half_extents, Vector::new(0.5, 0.5, 0.5));
/// assert!(points.iter().all(|pt| aabb.contains_local_point(pt)));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The center of the box.
    pub center: Point<Real>,
    /// Half the size of the box along each coordinate axis.
    pub half_extents: Vector<Real>,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::new(Point::origin(), Vector::zeros())
    }
}

impl Aabb {
    /// Creates a new AABB from its center and its half-extents.
    ///
    /// Negative half-extents are replaced by their absolute value.
    #[inline]
    pub fn new(center: Point<Real>, half_extents: Vector<Real>) -> Aabb {
        Aabb {
            center,
            half_extents: half_extents.abs(),
        }
    }

    /// Creates a new AABB from two opposite corners.
    ///
    /// The corners do not need to be sorted: the minimum and maximum coordinates are taken
    /// componentwise.
    #[inline]
    pub fn from_mins_maxs(a: Point<Real>, b: Point<Real>) -> Aabb {
        let mins = a.inf(&b);
        let maxs = a.sup(&b);
        Aabb {
            center: na::center(&mins, &maxs),
            half_extents: (maxs - mins) * 0.5,
        }
    }

    /// Computes the smallest AABB enclosing all the given points.
    ///
    /// Returns `None` if `pts` is empty.
    #[inline]
    pub fn from_points(pts: &[Point<Real>]) -> Option<Aabb> {
        aabb_utils::local_point_cloud_aabb(pts)
    }

    /// Computes the smallest AABB enclosing the points of `pts` selected by `indices`.
    ///
    /// Returns `None` if `indices` is empty. Panics if an index is out of bounds.
    #[inline]
    pub fn from_indexed_points(pts: &[Point<Real>], indices: &[u32]) -> Option<Aabb> {
        aabb_utils::indexed_point_cloud_aabb(pts, indices)
    }

    /// Computes the smallest AABB enclosing all the given points after they are transformed by `m`.
    ///
    /// Returns `None` if `pts` is empty.
    #[inline]
    pub fn from_transformed_points(m: &Transform<Real>, pts: &[Point<Real>]) -> Option<Aabb> {
        aabb_utils::point_cloud_aabb(m, pts)
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        self.center
    }

    /// The half-extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        self.half_extents
    }

    /// The extents of this AABB, i.e., its full size along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.half_extents * 2.0
    }

    /// The corner of this AABB with the smallest coordinates.
    #[inline]
    pub fn mins(&self) -> Point<Real> {
        self.center - self.half_extents
    }

    /// The corner of this AABB with the largest coordinates.
    #[inline]
    pub fn maxs(&self) -> Point<Real> {
        self.center + self.half_extents
    }

    /// The volume of this AABB.
    #[inline]
    pub fn volume(&self) -> Real {
        self.extents().product()
    }

    /// Is this AABB flat along at least one axis?
    ///
    /// Uses [`QueryTolerances::planar_epsilon`] from the default tolerances.
    #[inline]
    pub fn is_planar(&self) -> bool {
        self.is_planar_with_tolerance(QueryTolerances::default().planar_epsilon)
    }

    /// Is any half-extent of this AABB smaller than or equal to `eps`?
    #[inline]
    pub fn is_planar_with_tolerance(&self, eps: Real) -> bool {
        self.half_extents.iter().any(|he| *he <= eps)
    }

    /// Moves the minimum corner of this AABB, keeping the maximum corner fixed.
    ///
    /// If the new corner is greater than the fixed one along some axis, both are swapped on that
    /// axis.
    #[inline]
    pub fn set_mins(&mut self, mins: &Point<Real>) {
        *self = Self::from_mins_maxs(*mins, self.maxs());
    }

    /// Moves the maximum corner of this AABB, keeping the minimum corner fixed.
    ///
    /// If the new corner is smaller than the fixed one along some axis, both are swapped on that
    /// axis.
    #[inline]
    pub fn set_maxs(&mut self, maxs: &Point<Real>) {
        *self = Self::from_mins_maxs(self.mins(), *maxs);
    }

    /// Moves the face of this AABB with the smallest coordinate along `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= 3`.
    #[inline]
    pub fn set_min_on_axis(&mut self, axis: usize, value: Real) {
        assert!(axis < DIM, "Invalid axis index.");
        let mut mins = self.mins();
        mins[axis] = value;
        self.set_mins(&mins);
    }

    /// Moves the face of this AABB with the largest coordinate along `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= 3`.
    #[inline]
    pub fn set_max_on_axis(&mut self, axis: usize, value: Real) {
        assert!(axis < DIM, "Invalid axis index.");
        let mut maxs = self.maxs();
        maxs[axis] = value;
        self.set_maxs(&maxs);
    }

    /// Computes an AABB enclosing the image of `self` by the affine transform `m`.
    ///
    /// The center is mapped by `m` and each new half-extent is
    /// `sum_j |m[(i, j)]| * half_extents[j]`. The result always contains the image of `self`
    /// but is not the tightest box when `m` mixes rotation with non-uniform scale or shear.
    #[inline]
    pub fn transform_by(&self, m: &Transform<Real>) -> Self {
        Aabb {
            center: m.transform_affine_point(&self.center),
            half_extents: m.absolute_transform_vector(&self.half_extents),
        }
    }

    /// Does this AABB contain a point expressed in the same coordinate frame as `self`?
    ///
    /// Points on the boundary are considered inside.
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        let delta = point - self.center;
        (0..DIM).all(|i| delta[i].abs() <= self.half_extents[i])
    }

    /// Computes the vertices of this `Aabb`.
    ///
    /// The vertices are given in the following order, in a right-handed coordinate system:
    /// ```text
    ///    y             3 - 2
    ///    |           7 − 6 |
    ///    ___ x       |   | 1  (the zero is below 3 and on the left of 1,
    ///   /            4 - 5     hidden by the 4-5-6-7 face.)
    ///  z
    /// ```
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 8] {
        let mins = self.mins();
        let maxs = self.maxs();
        [
            Point::new(mins.x, mins.y, mins.z),
            Point::new(maxs.x, mins.y, mins.z),
            Point::new(maxs.x, maxs.y, mins.z),
            Point::new(mins.x, maxs.y, mins.z),
            Point::new(mins.x, mins.y, maxs.z),
            Point::new(maxs.x, mins.y, maxs.z),
            Point::new(maxs.x, maxs.y, maxs.z),
            Point::new(mins.x, maxs.y, maxs.z),
        ]
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center
    }

    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        intersection_test_aabb_aabb(self, other)
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins(), &other.mins()) && na::partial_ge(&self.maxs(), &other.maxs())
    }

    #[inline]
    fn merge(&mut self, other: &Aabb) {
        *self = self.merged(other);
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        Aabb::from_mins_maxs(self.mins().inf(&other.mins()), self.maxs().sup(&other.maxs()))
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.half_extents += Vector::repeat(amount);
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Aabb {
            center: self.center,
            half_extents: self.half_extents + Vector::repeat(amount),
        }
    }
}
