use super::hierarchy_tree::{
    Hierarchy, HierarchyBuildOptions, HierarchyError, HierarchyNode, HierarchyVolume,
    UnsplittablePolicy, MAX_HIERARCHY_DEPTH,
};
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DIM};
use crate::utils;
use core::cmp::Ordering;

impl<BV: HierarchyVolume> Hierarchy<BV> {
    /// Builds a hierarchy with `max_depth` levels over the triangles of a mesh.
    ///
    /// Each consecutive triplet of `indices` is a triangle referencing `vertices`. Unsplittable
    /// nodes are turned into leaves (see [`UnsplittablePolicy::MakeLeaf`]).
    pub fn build(
        vertices: &[Point<Real>],
        indices: &[u32],
        max_depth: u32,
    ) -> Result<Self, HierarchyError> {
        Self::build_with_options(
            vertices,
            indices,
            HierarchyBuildOptions::with_max_depth(max_depth),
        )
    }

    /// Builds a hierarchy over the triangles of a mesh with custom options.
    ///
    /// The inputs are validated before anything is allocated:
    /// - `options.max_depth` must not exceed [`MAX_HIERARCHY_DEPTH`];
    /// - `indices` must be non-empty with a length multiple of three;
    /// - every index must refer to an existing vertex with finite coordinates.
    pub fn build_with_options(
        vertices: &[Point<Real>],
        indices: &[u32],
        options: HierarchyBuildOptions,
    ) -> Result<Self, HierarchyError> {
        let triangles = validate_mesh(vertices, indices, options.max_depth)?;

        let max_depth = options.max_depth.max(1);
        let node_count = (1usize << max_depth) - 1;
        let mut result = Hierarchy {
            nodes: vec![HierarchyNode::default(); node_count],
            max_depth,
            lowest_depth_start: (1u32 << (max_depth - 1)) - 1,
        };

        result.build_node(vertices, 0, None, 0, triangles, options.unsplittable);

        log::trace!(
            "built a hierarchy with {} valid nodes ({} leaves) over {} triangles, max depth {}",
            result.valid_node_count(),
            result.leaves().count(),
            indices.len() / 3,
            max_depth
        );

        Ok(result)
    }

    fn build_node(
        &mut self,
        vertices: &[Point<Real>],
        slot: usize,
        parent: Option<u32>,
        depth: u32,
        triangles: Vec<[u32; 3]>,
        unsplittable: UnsplittablePolicy,
    ) {
        let vertex_indices = referenced_vertices(&triangles);
        let volume = BV::from_indexed_points(vertices, &vertex_indices).unwrap_or_default();

        let node = &mut self.nodes[slot];
        node.index = Some(slot as u32);
        node.parent = parent;
        node.depth = depth;
        node.volume = volume;

        if depth + 1 >= self.max_depth {
            node.triangles = triangles;
            node.vertex_indices = vertex_indices;
            return;
        }

        let Some((left, right)) = split_triangles(vertices, &vertex_indices, &triangles) else {
            log::debug!(
                "node {} at depth {} has {} triangles that cannot be split: {:?}",
                slot,
                depth,
                triangles.len(),
                unsplittable
            );

            if unsplittable == UnsplittablePolicy::MakeLeaf {
                node.triangles = triangles;
                node.vertex_indices = vertex_indices;
            }

            return;
        };

        let left_slot = 2 * slot + 1;
        let right_slot = 2 * slot + 2;
        node.left = Some(left_slot as u32);
        node.right = Some(right_slot as u32);

        let me = Some(slot as u32);
        self.build_node(vertices, left_slot, me, depth + 1, left, unsplittable);
        self.build_node(vertices, right_slot, me, depth + 1, right, unsplittable);
    }
}

/// Checks the build inputs and groups the indices into triangles.
fn validate_mesh(
    vertices: &[Point<Real>],
    indices: &[u32],
    max_depth: u32,
) -> Result<Vec<[u32; 3]>, HierarchyError> {
    if max_depth > MAX_HIERARCHY_DEPTH {
        return Err(HierarchyError::MaxDepthTooLarge {
            requested: max_depth,
            max: MAX_HIERARCHY_DEPTH,
        });
    }

    if indices.is_empty() {
        return Err(HierarchyError::EmptyIndices);
    }

    if indices.len() % 3 != 0 {
        return Err(HierarchyError::IndexCountNotMultipleOfThree(indices.len()));
    }

    let triangles: Vec<[u32; 3]> = indices
        .chunks_exact(3)
        .map(|idx| [idx[0], idx[1], idx[2]])
        .collect();

    for (triangle, idx) in triangles.iter().enumerate() {
        for &index in idx {
            if index as usize >= vertices.len() {
                return Err(HierarchyError::IndexOutOfBounds {
                    triangle,
                    index,
                    vertex_count: vertices.len(),
                });
            }
        }
    }

    for idx in &triangles {
        for &index in idx {
            if !vertices[index as usize].coords.iter().all(|x| x.is_finite()) {
                return Err(HierarchyError::NonFiniteVertex(index));
            }
        }
    }

    Ok(triangles)
}

fn referenced_vertices(triangles: &[[u32; 3]]) -> Vec<u32> {
    let mut result: Vec<u32> = triangles.iter().flatten().copied().collect();
    result.sort_unstable();
    result.dedup();
    result
}

/// Splits the triangles in two non-empty groups along one of the coordinate axes.
///
/// The axes are tried by decreasing half-extent of the box bounding `vertex_indices`. A
/// triangle goes to the right group if its barycenter lies strictly on the positive side of
/// the box center along the tested axis. Returns `None` if no axis separates the triangles.
fn split_triangles(
    vertices: &[Point<Real>],
    vertex_indices: &[u32],
    triangles: &[[u32; 3]],
) -> Option<(Vec<[u32; 3]>, Vec<[u32; 3]>)> {
    let frame = Aabb::from_indexed_points(vertices, vertex_indices)?;
    let center = frame.center();
    let half_extents = frame.half_extents();

    let barycenters: Vec<Point<Real>> = triangles
        .iter()
        .map(|idx| {
            utils::triangle_barycenter(
                &vertices[idx[0] as usize],
                &vertices[idx[1] as usize],
                &vertices[idx[2] as usize],
            )
        })
        .collect();

    for axis in ranked_axes(&half_extents) {
        let dir = Vector::ith(axis, 1.0);
        let mut left = Vec::new();
        let mut right = Vec::new();

        for (tri, barycenter) in triangles.iter().zip(barycenters.iter()) {
            if dir.dot(&(barycenter - center)) > 0.0 {
                right.push(*tri);
            } else {
                left.push(*tri);
            }
        }

        if !left.is_empty() && !right.is_empty() {
            return Some((left, right));
        }
    }

    None
}

/// The coordinate axes sorted by decreasing half-extent, the last axis first on ties.
fn ranked_axes(half_extents: &Vector<Real>) -> [usize; DIM] {
    let mut axes = [0, 1, 2];
    axes.sort_by(|a, b| {
        half_extents[*b]
            .partial_cmp(&half_extents[*a])
            .unwrap_or(Ordering::Equal)
            .then(b.cmp(a))
    });
    axes
}
