/*!
bvtree3d
========

**bvtree3d** is a 3-dimensional bounding-volume library written with the rust programming
language.

It provides:

* per-object bounding primitives: [`Aabb`](bounding_volume::Aabb),
  [`BoundingSphere`](bounding_volume::BoundingSphere) and [`Obb`](bounding_volume::Obb);
* depth-bounded binary hierarchies of those primitives over a triangle mesh
  ([`partitioning::Hierarchy`]), with caller-driven traversal and cheap re-projection
  through an affine transform;
* pairwise intersection predicates, ray and segment casts, and a dual-tree descent that
  marks every overlapping node pair of two hierarchies ([`partitioning::mark_collided`]).

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![allow(clippy::type_complexity)] // Complains about closures that are fairly simple.

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod partitioning;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(not(feature = "f64"))]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Matrix3, Matrix4, Point3, UnitVector3, Vector3, Vector4};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The homogeneous affine transformation type.
    ///
    /// Positions are transformed as `M * [p, 1]`. Only affine matrices (last row `[0, 0, 0, 1]`)
    /// are expected: the bounding-volume updates ignore any projective component.
    pub use Matrix4 as Transform;
}
