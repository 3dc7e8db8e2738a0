//! Oriented Bounding Box.

use crate::math::{Matrix, Point, Real, Transform, Vector, DEFAULT_EPSILON, DIM};
use crate::shape::Triangle;
use crate::utils::{self, TransformOps};

/// An Oriented Bounding Box (OBB).
///
/// The box is centered at `center`, and extends by `half_extents[i]` on both sides of its
/// `i`-th local axis. The local axes are the **columns** of `axes` and form an orthonormal basis
/// when the OBB is built with [`Obb::from_model`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Obb {
    /// The center of the box.
    pub center: Point<Real>,
    /// Half the size of the box along each of its local axes.
    pub half_extents: Vector<Real>,
    /// The local axes of the box, stored as columns.
    pub axes: Matrix<Real>,
}

impl Default for Obb {
    fn default() -> Self {
        Self::new(Point::origin(), Vector::zeros(), Matrix::identity())
    }
}

impl Obb {
    /// Creates a new OBB from its center, half-extents and local axes (stored as columns).
    #[inline]
    pub fn new(center: Point<Real>, half_extents: Vector<Real>, axes: Matrix<Real>) -> Self {
        Self {
            center,
            half_extents,
            axes,
        }
    }

    /// Computes an OBB fitted to a triangle mesh.
    ///
    /// Every consecutive triple of `indices` is a triangle of `pts`. The local axes are obtained
    /// by orthonormalizing the area-weighted covariance matrix of the triangles with the modified
    /// Gram–Schmidt procedure; every indexed point is then projected on these axes to find the
    /// extents. Trailing indices that do not form a full triangle only contribute to the extents.
    ///
    /// The result encloses every indexed point but is not the smallest enclosing OBB.
    /// Returns `None` if `indices` is empty. Panics if an index is out of bounds.
    pub fn from_model(pts: &[Point<Real>], indices: &[u32]) -> Option<Self> {
        if indices.is_empty() {
            return None;
        }

        let triangles: Vec<Triangle> = indices
            .chunks_exact(3)
            .map(|idx| Triangle::from_indices(pts, [idx[0], idx[1], idx[2]]))
            .collect();
        let (_, cov) = utils::triangle_area_weighted_cov(&triangles);
        let axes = utils::modified_gram_schmidt(&cov);
        let inv_axes = axes.transpose();

        let mut mins = Vector::repeat(Real::MAX);
        let mut maxs = Vector::repeat(-Real::MAX);

        for i in indices {
            let local = inv_axes * pts[*i as usize].coords;
            mins = mins.inf(&local);
            maxs = maxs.sup(&local);
        }

        let local_center = (mins + maxs) * 0.5;

        Some(Self {
            center: Point::from(axes * local_center),
            half_extents: (maxs - mins) * 0.5,
            axes,
        })
    }

    /// The `i`-th local axis of this box.
    #[inline]
    pub fn axis(&self, i: usize) -> Vector<Real> {
        self.axes.column(i).into_owned()
    }

    /// Computes an OBB enclosing the image of `self` by the affine transform `m`.
    ///
    /// Each local axis scaled by its half-extent is mapped through the linear part of `m`. The
    /// lengths of the resulting vectors become the new half-extents, and their directions the new
    /// axes. The new axes are only orthogonal if `m` does not combine rotation with non-uniform
    /// scale or shear.
    pub fn transform_by(&self, m: &Transform<Real>) -> Self {
        let linear = m.linear_part();
        let scaled_axes = linear * self.axes * Matrix::from_diagonal(&self.half_extents);
        let mut half_extents = Vector::zeros();
        let mut axes = Matrix::zeros();

        for i in 0..DIM {
            let col: Vector<Real> = scaled_axes.column(i).into_owned();
            half_extents[i] = col.norm();

            let axis = col
                .try_normalize(DEFAULT_EPSILON)
                .or_else(|| (linear * self.axis(i)).try_normalize(DEFAULT_EPSILON))
                .unwrap_or_else(|| self.axis(i));
            axes.set_column(i, &axis);
        }

        Self {
            center: m.transform_affine_point(&self.center),
            half_extents,
            axes,
        }
    }

    /// The affine transform mapping the unit cube `[-0.5, 0.5]³` onto this box.
    pub fn box_transform(&self) -> Transform<Real> {
        let mut result = Transform::identity();

        for i in 0..DIM {
            let col = self.axis(i) * (self.half_extents[i] * 2.0);
            result.fixed_view_mut::<3, 1>(0, i).copy_from(&col);
        }

        result
            .fixed_view_mut::<3, 1>(0, 3)
            .copy_from(&self.center.coords);
        result
    }

    /// The point of this box closest to `pt`.
    ///
    /// Returns `pt` itself if it lies inside of the box.
    pub fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        let d = pt - self.center;
        let mut result = self.center;

        for i in 0..DIM {
            let axis = self.axis(i);
            let dist = d
                .dot(&axis)
                .clamp(-self.half_extents[i], self.half_extents[i]);
            result += axis * dist;
        }

        result
    }

    /// The squared distance between `pt` and this box. Zero if `pt` is inside.
    pub fn squared_distance_to_point(&self, pt: &Point<Real>) -> Real {
        let d = pt - self.center;
        let mut sq_dist = 0.0;

        for i in 0..DIM {
            let dist = d.dot(&self.axis(i));
            let excess = if dist < -self.half_extents[i] {
                dist + self.half_extents[i]
            } else if dist > self.half_extents[i] {
                dist - self.half_extents[i]
            } else {
                0.0
            };
            sq_dist += excess * excess;
        }

        sq_dist
    }

    /// Computes the vertices of this box.
    ///
    /// They follow the same ordering as [`Aabb::vertices`](crate::bounding_volume::Aabb::vertices)
    /// with the coordinate axes replaced by the local axes.
    pub fn vertices(&self) -> [Point<Real>; 8] {
        const SIGNS: [[Real; 3]; 8] = [
            [-1.0, -1.0, -1.0],
            [1.0, -1.0, -1.0],
            [1.0, 1.0, -1.0],
            [-1.0, 1.0, -1.0],
            [-1.0, -1.0, 1.0],
            [1.0, -1.0, 1.0],
            [1.0, 1.0, 1.0],
            [-1.0, 1.0, 1.0],
        ];

        SIGNS.map(|s| {
            let local = Vector::from(s).component_mul(&self.half_extents);
            self.center + self.axes * local
        })
    }
}
