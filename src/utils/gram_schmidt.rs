use crate::math::{Matrix, Real, Vector, DEFAULT_EPSILON};

/// Orthonormalizes the columns of `m` with the modified Gram–Schmidt procedure.
///
/// Columns are processed in order: the first output column is the normalized first input
/// column, every following column has the projections on the previously computed output
/// columns removed before being normalized.
///
/// If a column degenerates (because `m` is rank-deficient, e.g. the covariance of a planar
/// mesh), it is replaced by the canonical axis that is the least aligned with the columns
/// computed so far. The result is always a right-handed orthonormal basis.
pub fn modified_gram_schmidt(m: &Matrix<Real>) -> Matrix<Real> {
    let mut out = Matrix::zeros();

    for i in 0..3 {
        let mut col: Vector<Real> = m.column(i).into_owned();

        for j in 0..i {
            let basis: Vector<Real> = out.column(j).into_owned();
            col -= basis * col.dot(&basis);
        }

        let col = match col.try_normalize(DEFAULT_EPSILON) {
            Some(col) => col,
            None => least_aligned_axis(&out, i),
        };

        out.set_column(i, &col);
    }

    if out.determinant() < 0.0 {
        let flipped = -out.column(2);
        out.set_column(2, &flipped);
    }

    out
}

// Picks the canonical axis with the largest residual once projected out of the first `count`
// columns of `basis`, and returns that residual normalized.
fn least_aligned_axis(basis: &Matrix<Real>, count: usize) -> Vector<Real> {
    let mut best = Vector::x();
    let mut best_norm = -1.0;

    for k in 0..3 {
        let mut candidate = Vector::ith(k, 1.0);

        for j in 0..count {
            let b: Vector<Real> = basis.column(j).into_owned();
            candidate -= b * candidate.dot(&b);
        }

        let norm = candidate.norm();
        if norm > best_norm {
            best_norm = norm;
            best = candidate / norm;
        }
    }

    best
}
