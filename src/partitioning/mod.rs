//! Spatial partitioning tools.

pub use self::hierarchy::{
    mark_collided, AabbHierarchy, Hierarchy, HierarchyBuildOptions, HierarchyError,
    HierarchyNode, HierarchyVolume, Leaves, SphereHierarchy, UnsplittablePolicy,
    MAX_HIERARCHY_DEPTH,
};

mod hierarchy;
