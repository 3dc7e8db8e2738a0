use super::hierarchy_traverse::TRAVERSAL_STACK_SIZE;
use super::hierarchy_tree::{Hierarchy, HierarchyVolume};
use smallvec::SmallVec;

/// Flags every node of `a` and `b` that belongs to a pair of overlapping nodes reached by a
/// simultaneous descent of both trees.
///
/// The `collided` flags of both hierarchies are cleared first. Then, starting with the pair of
/// roots, each pair of nodes whose volumes intersect is flagged and its four child pairs
/// (left/left, left/right, right/left, right/right) are examined in turn. A pair involving a
/// missing child is skipped, so the descent of a branch stops as soon as one of the two trees
/// runs out of levels.
///
/// Returns the number of overlapping node pairs found. Use
/// [`Hierarchy::collided_leaves`] to retrieve the flagged leaves afterward.
pub fn mark_collided<BV: HierarchyVolume>(a: &mut Hierarchy<BV>, b: &mut Hierarchy<BV>) -> usize {
    a.reset_collided();
    b.reset_collided();

    if a.node(0).is_none() || b.node(0).is_none() {
        return 0;
    }

    let mut stack: SmallVec<[(u32, u32); TRAVERSAL_STACK_SIZE]> = SmallVec::new();
    let mut num_pairs = 0;
    stack.push((0, 0));

    while let Some((ia, ib)) = stack.pop() {
        let (Some(node_a), Some(node_b)) = (a.node(ia), b.node(ib)) else {
            continue;
        };

        if !node_a.volume.intersects(&node_b.volume) {
            continue;
        }

        num_pairs += 1;

        for ca in [node_a.right, node_a.left] {
            for cb in [node_b.right, node_b.left] {
                if let (Some(ca), Some(cb)) = (ca, cb) {
                    stack.push((ca, cb));
                }
            }
        }

        a.nodes[ia as usize].collided = true;
        b.nodes[ib as usize].collided = true;
    }

    log::trace!(
        "dual-tree descent found {} overlapping node pairs ({} x {} nodes)",
        num_pairs,
        a.valid_node_count(),
        b.valid_node_count()
    );

    num_pairs
}

impl<BV: HierarchyVolume> Hierarchy<BV> {
    /// Flags the nodes of `self` and `other` that overlap each other.
    ///
    /// See [`mark_collided`].
    pub fn mark_collided_with(&mut self, other: &mut Self) -> usize {
        mark_collided(self, other)
    }
}
