pub use hierarchy_traverse::Leaves;
pub use hierarchy_traverse_bvtt::mark_collided;
pub use hierarchy_tree::{
    AabbHierarchy, Hierarchy, HierarchyBuildOptions, HierarchyError, HierarchyNode,
    HierarchyVolume, SphereHierarchy, UnsplittablePolicy, MAX_HIERARCHY_DEPTH,
};

mod hierarchy_build;
mod hierarchy_transform;
mod hierarchy_traverse;
mod hierarchy_traverse_bvtt;
mod hierarchy_tree;
mod hierarchy_validation;
