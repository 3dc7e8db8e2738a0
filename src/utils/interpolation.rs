use crate::math::{Real, Vector, DEFAULT_EPSILON};

const SLERP_PARALLEL_THRESHOLD: Real = 1.0 - 1.0e-4;

/// Linear interpolation between `start` and `end`.
#[inline]
pub fn lerp(start: &Vector<Real>, end: &Vector<Real>, t: Real) -> Vector<Real> {
    start + (end - start) * t
}

/// Normalized linear interpolation between `start` and `end`.
///
/// Returns `start` unchanged if the interpolated vector is too small to be normalized.
#[inline]
pub fn nlerp(start: &Vector<Real>, end: &Vector<Real>, t: Real) -> Vector<Real> {
    lerp(start, end, t)
        .try_normalize(DEFAULT_EPSILON)
        .unwrap_or(*start)
}

/// Spherical linear interpolation between the unit vectors `start` and `end`.
///
/// The cosine between both vectors is clamped to `[-1, 1]`. Nearly parallel inputs fall back
/// to [`nlerp`]. Opposite inputs rotate around an arbitrary axis orthogonal to `start`.
pub fn slerp(start: &Vector<Real>, end: &Vector<Real>, t: Real) -> Vector<Real> {
    let cos = start.dot(end).clamp(-1.0, 1.0);

    if cos > SLERP_PARALLEL_THRESHOLD {
        return nlerp(start, end, t);
    }

    let theta = cos.acos() * t;
    let relative = (end - start * cos)
        .try_normalize(DEFAULT_EPSILON)
        .unwrap_or_else(|| any_orthonormal(start));

    start * theta.cos() + relative * theta.sin()
}

fn any_orthonormal(v: &Vector<Real>) -> Vector<Real> {
    let helper = if v.x.abs() < 0.5 {
        Vector::x()
    } else {
        Vector::y()
    };
    v.cross(&helper)
        .try_normalize(DEFAULT_EPSILON)
        .unwrap_or(Vector::z())
}
