use crate::math::{Matrix, Point, Real, Transform, Vector};

/// Extra operations with homogeneous affine transforms.
///
/// The methods of this trait never perform a perspective division: the last row of the
/// matrix is assumed to be `[0, 0, 0, 1]`.
pub trait TransformOps {
    /// The upper-left 3×3 block (rotation, scale and shear) of this transform.
    fn linear_part(&self) -> Matrix<Real>;
    /// The translation column of this transform.
    fn translation_part(&self) -> Vector<Real>;
    /// Computes `M * [p, 1]`.
    fn transform_affine_point(&self, p: &Point<Real>) -> Point<Real>;
    /// Computes `M * [v, 0]`.
    fn transform_affine_vector(&self, v: &Vector<Real>) -> Vector<Real>;
    /// Transform a vector by the absolute value of the linear part of `self`.
    fn absolute_transform_vector(&self, v: &Vector<Real>) -> Vector<Real>;
    /// The largest length among the images of the three unit axes.
    ///
    /// This bounds the factor by which any length is stretched by `self`.
    fn max_axis_scale(&self) -> Real;
    /// Checks that every entry of this matrix is finite.
    fn is_finite(&self) -> bool;
}

impl TransformOps for Transform<Real> {
    #[inline]
    fn linear_part(&self) -> Matrix<Real> {
        self.fixed_view::<3, 3>(0, 0).into_owned()
    }

    #[inline]
    fn translation_part(&self) -> Vector<Real> {
        Vector::new(self[(0, 3)], self[(1, 3)], self[(2, 3)])
    }

    #[inline]
    fn transform_affine_point(&self, p: &Point<Real>) -> Point<Real> {
        Point::from(self.linear_part() * p.coords + self.translation_part())
    }

    #[inline]
    fn transform_affine_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.linear_part() * v
    }

    #[inline]
    fn absolute_transform_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.linear_part().abs() * v
    }

    #[inline]
    fn max_axis_scale(&self) -> Real {
        let linear = self.linear_part();
        linear
            .column_iter()
            .map(|col| col.norm())
            .fold(0.0, Real::max)
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.iter().all(|e| e.is_finite())
    }
}
