//! Point queries.

pub use self::point_aabb::{closest_point_on_aabb, squared_distance_point_aabb};

mod point_aabb;
