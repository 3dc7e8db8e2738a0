use crate::math::Real;

/// Thresholds used by the geometric queries to absorb rounding errors.
///
/// The default values are small enough for unit-scale meshes in single precision. Scenes with
/// very large or very small coordinates may need to scale them accordingly.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(default))]
pub struct QueryTolerances {
    /// Added to the squared radius of the sphere in sphere-vs-AABB tests.
    ///
    /// A larger value turns near-misses at the box boundary into hits.
    pub sphere_aabb_offset: Real,
    /// Below this absolute value, a ray direction component (slab test) or the dot product
    /// between a ray direction and a triangle normal is treated as zero.
    pub parallel_epsilon: Real,
    /// An AABB with a half-extent smaller than or equal to this value is considered planar.
    pub planar_epsilon: Real,
}

impl QueryTolerances {
    /// The default offset added to the squared sphere radius in sphere-vs-AABB tests.
    pub const DEFAULT_SPHERE_AABB_OFFSET: Real = 2.0e-4;
    /// The default threshold below which a direction is considered parallel to a plane.
    pub const DEFAULT_PARALLEL_EPSILON: Real = 1.0e-5;
    /// The default threshold below which a half-extent is considered null.
    pub const DEFAULT_PLANAR_EPSILON: Real = 1.0e-5;
}

impl Default for QueryTolerances {
    fn default() -> Self {
        Self {
            sphere_aabb_offset: Self::DEFAULT_SPHERE_AABB_OFFSET,
            parallel_epsilon: Self::DEFAULT_PARALLEL_EPSILON,
            planar_epsilon: Self::DEFAULT_PLANAR_EPSILON,
        }
    }
}
