use crate::bounding_volume::BoundingSphere;
use crate::math::{Real, Vector};

/// Time of impact of two spheres moving with constant velocities, reduced to one dimension.
///
/// With `d = s2.center - s1.center` and `v = vel2 - vel1`, the projection `p = d · v` is
/// compared to `|d|²`:
///
/// * if `p <= 0`, the spheres are closing in (or resting) and `0` is returned;
/// * if `p >= |d|²`, `time_bound` is returned;
/// * otherwise `p / |d|²` is returned.
///
/// The radii do not take part in the estimate.
pub fn time_of_impact_sphere_sphere(
    s1: &BoundingSphere,
    vel1: &Vector<Real>,
    s2: &BoundingSphere,
    vel2: &Vector<Real>,
    time_bound: Real,
) -> Real {
    let relative_velocity = vel2 - vel1;
    let relative_position = s2.center - s1.center;
    let direction = relative_position.dot(&relative_velocity);
    let sq_length = relative_position.norm_squared();

    if direction <= 0.0 {
        0.0
    } else if direction >= sq_length {
        time_bound
    } else {
        direction / sq_length
    }
}
