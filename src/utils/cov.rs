use crate::math::{Matrix, Point, Real, Vector};
use crate::shape::Triangle;

/// Computes the area-weighted mean and covariance matrix of a triangle soup.
///
/// Each triangle contributes `A/12 * (9 * m * mᵀ + p * pᵀ + q * qᵀ + r * rᵀ)` where `A` is
/// its area, `m` its barycenter and `p`, `q`, `r` its vertices. The accumulated terms are
/// normalized by the total area before the outer product of the mean is subtracted.
///
/// If the total area is zero (e.g. all triangles are degenerate) the normalization is skipped.
pub fn triangle_area_weighted_cov<'a, I>(triangles: I) -> (Point<Real>, Matrix<Real>)
where
    I: IntoIterator<Item = &'a Triangle>,
{
    let mut total_area = 0.0;
    let mut mean = Vector::zeros();
    let mut cov = Matrix::zeros();

    for tri in triangles {
        let area = tri.area();
        let bc = tri.barycenter().coords;
        let (p, q, r) = (tri.a.coords, tri.b.coords, tri.c.coords);

        mean += bc * area;
        total_area += area;
        cov += (bc * bc.transpose() * 9.0
            + p * p.transpose()
            + q * q.transpose()
            + r * r.transpose())
            * (area / 12.0);
    }

    if total_area == 0.0 {
        total_area = 1.0;
    }

    mean /= total_area;
    cov /= total_area;
    cov -= mean * mean.transpose();

    (Point::from(mean), cov)
}
