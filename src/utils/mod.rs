//! Various unsorted geometrical and logical operators.

pub use self::center::triangle_barycenter;
pub use self::cov::triangle_area_weighted_cov;
pub use self::gram_schmidt::modified_gram_schmidt;
pub use self::interpolation::{lerp, nlerp, slerp};
pub use self::transform_ops::TransformOps;

mod center;
mod cov;
mod gram_schmidt;
mod interpolation;
mod transform_ops;
