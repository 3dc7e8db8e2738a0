use super::hierarchy_tree::Hierarchy;

impl<BV> Hierarchy<BV> {
    /// Counts the number of leaves that can be reached from the node at index `id`.
    ///
    /// This is mostly a utility for debugging.
    pub fn reachable_leaf_count(&self, id: u32) -> u32 {
        match self.node(id) {
            None => 0,
            Some(node) if node.is_leaf() => 1,
            Some(node) => node
                .children()
                .map(|child| self.reachable_leaf_count(child))
                .sum(),
        }
    }

    /// Panics if the hierarchy isn’t well-formed.
    ///
    /// The hierarchy is well-formed if:
    /// - its array has the size of a complete binary tree with `max_depth` levels;
    /// - every valid node is reachable from the root, and is stored at the slot matching its
    ///   index, parent, children and depth;
    /// - only leaves carry triangles, and their vertex indices are exactly the sorted and
    ///   de-duplicated indices of their triangles.
    pub fn assert_well_formed(&self) {
        if self.is_empty() {
            return;
        }

        let expected_len = (1usize << self.max_depth.max(1)) - 1;
        assert_eq!(self.nodes.len(), expected_len, "invalid node array length");
        assert_eq!(
            self.lowest_depth_start as usize,
            (1usize << (self.max_depth.max(1) - 1)) - 1
        );
        assert!(self.nodes[0].is_valid(), "the root must be valid");
        assert_eq!(self.nodes[0].parent, None);
        assert_eq!(self.nodes[0].depth, 0);

        let mut reached = vec![false; self.nodes.len()];
        self.assert_well_formed_recurse(0, &mut reached);

        for (slot, node) in self.nodes.iter().enumerate() {
            assert_eq!(
                node.is_valid(),
                reached[slot],
                "node {} is not reachable from the root",
                slot
            );
        }
    }

    fn assert_well_formed_recurse(&self, id: u32, reached: &mut [bool]) {
        let node = &self.nodes[id as usize];
        assert_eq!(node.index, Some(id));
        assert!(!reached[id as usize], "loop detected at node {}", id);
        assert!(node.depth < self.max_depth);
        reached[id as usize] = true;

        assert_eq!(
            node.left.is_some(),
            node.right.is_some(),
            "node {} has a single child",
            id
        );

        if let (Some(left), Some(right)) = (node.left, node.right) {
            assert_eq!(left, 2 * id + 1);
            assert_eq!(right, 2 * id + 2);
            assert!(node.triangles.is_empty() && node.vertex_indices.is_empty());

            for child in [left, right] {
                let child_node = &self.nodes[child as usize];
                assert_eq!(child_node.parent, Some(id));
                assert_eq!(child_node.depth, node.depth + 1);
                self.assert_well_formed_recurse(child, reached);
            }
        } else {
            let mut expected: Vec<u32> = node.triangles.iter().flatten().copied().collect();
            expected.sort_unstable();
            expected.dedup();
            assert_eq!(node.vertex_indices, expected);
        }
    }
}
