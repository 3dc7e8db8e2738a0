//! Implementation details of the time-of-impact estimations.

pub use self::time_of_impact_sphere_sphere::time_of_impact_sphere_sphere;

mod time_of_impact_sphere_sphere;
