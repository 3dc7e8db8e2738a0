use crate::bounding_volume::{Aabb, BoundingSphere, BoundingVolume};
use crate::math::{Point, Real, Transform};
use core::fmt::Debug;

/// The largest supported value of [`HierarchyBuildOptions::max_depth`].
///
/// A hierarchy of depth `d` allocates `2^d - 1` nodes upfront.
pub const MAX_HIERARCHY_DEPTH: u32 = 20;

/// A bounding volume that can be stored in a [`Hierarchy`].
pub trait HierarchyVolume: BoundingVolume + Copy + Debug + Default {
    /// Computes the volume enclosing the points of `pts` selected by `indices`.
    ///
    /// Returns `None` if `indices` is empty.
    fn from_indexed_points(pts: &[Point<Real>], indices: &[u32]) -> Option<Self>;

    /// Computes a volume enclosing the image of `self` by the affine transform `m`.
    fn transform_by(&self, m: &Transform<Real>) -> Self;
}

impl HierarchyVolume for Aabb {
    #[inline]
    fn from_indexed_points(pts: &[Point<Real>], indices: &[u32]) -> Option<Self> {
        Aabb::from_indexed_points(pts, indices)
    }

    #[inline]
    fn transform_by(&self, m: &Transform<Real>) -> Self {
        Aabb::transform_by(self, m)
    }
}

impl HierarchyVolume for BoundingSphere {
    #[inline]
    fn from_indexed_points(pts: &[Point<Real>], indices: &[u32]) -> Option<Self> {
        BoundingSphere::ritter_indexed(pts, indices)
    }

    #[inline]
    fn transform_by(&self, m: &Transform<Real>) -> Self {
        BoundingSphere::transform_by(self, m)
    }
}

/// What to do with a node whose triangles cannot be separated along any coordinate axis.
///
/// This happens when, along every axis, the barycenters of all the triangles lie on the same
/// side of the node's box center (e.g., many copies of the same triangle).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum UnsplittablePolicy {
    /// The node becomes a leaf holding all its triangles, even though it is not at the deepest
    /// level of the tree.
    #[default]
    MakeLeaf,
    /// The node is left without children and without triangles: its triangles are not reachable
    /// by any traversal.
    LeaveChildless,
}

/// Parameters of the hierarchy construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(default))]
pub struct HierarchyBuildOptions {
    /// The number of levels of the tree. A value of `0` or `1` builds a single leaf.
    ///
    /// Must not exceed [`MAX_HIERARCHY_DEPTH`].
    pub max_depth: u32,
    /// How to handle nodes whose triangles cannot be split.
    pub unsplittable: UnsplittablePolicy,
}

impl Default for HierarchyBuildOptions {
    fn default() -> Self {
        Self {
            max_depth: 1,
            unsplittable: UnsplittablePolicy::default(),
        }
    }
}

impl HierarchyBuildOptions {
    /// Default options with the given maximum depth.
    pub fn with_max_depth(max_depth: u32) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }
}

/// Errors returned when building or transforming a [`Hierarchy`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum HierarchyError {
    /// A hierarchy must contain at least one triangle.
    #[error("a hierarchy must contain at least one triangle.")]
    EmptyIndices,
    /// The index buffer length is not a multiple of three.
    #[error("the index buffer length ({0}) is not a multiple of three.")]
    IndexCountNotMultipleOfThree(usize),
    /// A triangle refers to a vertex that does not exist.
    #[error(
        "the triangle {triangle} refers to the vertex {index} but there are only {vertex_count} vertices."
    )]
    IndexOutOfBounds {
        /// The faulty triangle.
        triangle: usize,
        /// The out-of-bounds vertex index.
        index: u32,
        /// The number of vertices.
        vertex_count: usize,
    },
    /// A referenced vertex has a NaN or infinite coordinate.
    #[error("the vertex {0} has a non-finite coordinate.")]
    NonFiniteVertex(u32),
    /// The requested depth is larger than [`MAX_HIERARCHY_DEPTH`].
    #[error("the maximum depth {requested} exceeds the supported maximum {max}.")]
    MaxDepthTooLarge {
        /// The requested depth.
        requested: u32,
        /// The largest supported depth.
        max: u32,
    },
    /// The source hierarchy of a transform does not have as many nodes as the destination.
    #[error("expected a source hierarchy with {expected} nodes, found {found}.")]
    TopologyMismatch {
        /// The number of nodes of the destination hierarchy.
        expected: usize,
        /// The number of nodes of the source hierarchy.
        found: usize,
    },
    /// The source and destination hierarchies have the same size but a different structure.
    #[error("the source and destination hierarchies differ at node {slot}.")]
    NodeMismatch {
        /// The index of the first node that differs.
        slot: usize,
    },
    /// The transform has a NaN or infinite entry.
    #[error("the transform has a non-finite entry.")]
    NonFiniteTransform,
}

/// A node of a [`Hierarchy`].
///
/// Nodes are addressed by their index in [`Hierarchy::nodes`]. The slots of the complete
/// binary tree that are not used by the hierarchy hold invalid nodes, for which
/// [`Self::index`] returns `None`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct HierarchyNode<BV> {
    pub(crate) index: Option<u32>,
    pub(crate) parent: Option<u32>,
    pub(crate) left: Option<u32>,
    pub(crate) right: Option<u32>,
    pub(crate) depth: u32,
    pub(crate) volume: BV,
    pub(crate) collided: bool,
    pub(crate) triangles: Vec<[u32; 3]>,
    pub(crate) vertex_indices: Vec<u32>,
}

impl<BV: Default> Default for HierarchyNode<BV> {
    fn default() -> Self {
        Self {
            index: None,
            parent: None,
            left: None,
            right: None,
            depth: 0,
            volume: BV::default(),
            collided: false,
            triangles: Vec::new(),
            vertex_indices: Vec::new(),
        }
    }
}

impl<BV> HierarchyNode<BV> {
    /// The index of this node, or `None` if this slot is not used by the hierarchy.
    #[inline]
    pub fn index(&self) -> Option<u32> {
        self.index
    }

    /// Is this slot used by the hierarchy?
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.index.is_some()
    }

    /// The index of the parent node. `None` for the root and for invalid nodes.
    #[inline]
    pub fn parent(&self) -> Option<u32> {
        self.parent
    }

    /// The index of the left child, if any.
    #[inline]
    pub fn left_child(&self) -> Option<u32> {
        self.left
    }

    /// The index of the right child, if any.
    #[inline]
    pub fn right_child(&self) -> Option<u32> {
        self.right
    }

    /// The indices of the existing children of this node.
    #[inline]
    pub fn children(&self) -> impl Iterator<Item = u32> {
        self.left.into_iter().chain(self.right)
    }

    /// The depth of this node. The root has depth `0`.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The bounding volume of this node.
    #[inline]
    pub fn volume(&self) -> &BV {
        &self.volume
    }

    /// Was this node found overlapping the other hierarchy during the last
    /// [`mark_collided`](crate::partitioning::mark_collided)?
    #[inline]
    pub fn is_collided(&self) -> bool {
        self.collided
    }

    /// Is this a valid node without children?
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.is_valid() && (self.left.is_none() || self.right.is_none())
    }

    /// The triangles bounded by this leaf, in the order they appear in the index buffer.
    ///
    /// Always empty for internal nodes.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// The sorted, de-duplicated, vertex indices referenced by [`Self::triangles`].
    #[inline]
    pub fn vertex_indices(&self) -> &[u32] {
        &self.vertex_indices
    }
}

/// A depth-bounded binary bounding-volume hierarchy over the triangles of a mesh.
///
/// The nodes are stored in a flat array laid out as a complete binary tree: the root is at
/// index `0` and the children of the node `k` are at `2k + 1` and `2k + 2`. The array is
/// allocated for `max_depth` levels even if some branches stop early, so the position of every
/// node only depends on its path from the root.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use bvtree3d::bounding_volume::BoundingVolume;
/// use bvtree3d::math::Point;
/// use bvtree3d::partitioning::AabbHierarchy;
///
/// // A flat quad made of two triangles.
/// let vertices = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(2.0, 0.0, 0.0),
///     Point::new(2.0, 1.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
/// ];
/// let indices = [0, 1, 2, 0, 2, 3];
///
/// let tree = AabbHierarchy::build(&vertices, &indices, 2).unwrap();
/// assert_eq!(tree.len(), 3);
///
/// let mut visited = vec![];
/// tree.visit_nodes(|leaf| visited.extend_from_slice(leaf.triangles()), |_| true);
/// assert_eq!(visited.len(), 2);
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Hierarchy<BV> {
    pub(crate) nodes: Vec<HierarchyNode<BV>>,
    pub(crate) max_depth: u32,
    pub(crate) lowest_depth_start: u32,
}

/// A hierarchy of axis-aligned bounding boxes.
pub type AabbHierarchy = Hierarchy<Aabb>;
/// A hierarchy of bounding spheres.
pub type SphereHierarchy = Hierarchy<BoundingSphere>;

impl<BV> Default for Hierarchy<BV> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            max_depth: 0,
            lowest_depth_start: 0,
        }
    }
}

impl<BV> Hierarchy<BV> {
    /// The number of slots of this hierarchy, including the unused ones.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Does this hierarchy have no node at all?
    ///
    /// This is only the case for a default-constructed hierarchy.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The number of levels this hierarchy was built for.
    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// The index of the first slot of the deepest level.
    #[inline]
    pub fn lowest_depth_start(&self) -> u32 {
        self.lowest_depth_start
    }

    /// The root node, if the hierarchy is not empty.
    #[inline]
    pub fn root(&self) -> Option<&HierarchyNode<BV>> {
        self.nodes.first()
    }

    /// The node at index `i`, if it exists and is valid.
    #[inline]
    pub fn node(&self, i: u32) -> Option<&HierarchyNode<BV>> {
        self.nodes.get(i as usize).filter(|node| node.is_valid())
    }

    /// All the slots of this hierarchy, including the invalid ones.
    #[inline]
    pub fn nodes(&self) -> &[HierarchyNode<BV>] {
        &self.nodes
    }

    /// The number of valid nodes.
    pub fn valid_node_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_valid()).count()
    }

    /// The total number of triangles stored in the leaves.
    pub fn triangle_count(&self) -> usize {
        self.leaves().map(|leaf| leaf.triangles.len()).sum()
    }

    /// Clears the `collided` flag of every node.
    pub fn reset_collided(&mut self) {
        for node in &mut self.nodes {
            node.collided = false;
        }
    }
}
