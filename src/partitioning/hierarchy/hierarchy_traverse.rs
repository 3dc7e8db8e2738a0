use super::hierarchy_tree::{Hierarchy, HierarchyNode};
use smallvec::SmallVec;

pub(super) const TRAVERSAL_STACK_SIZE: usize = 32;

/// Iterator over the leaves of a [`Hierarchy`] whose whole ancestry passes a check.
pub struct Leaves<'a, BV, Check: Fn(&HierarchyNode<BV>) -> bool> {
    tree: &'a Hierarchy<BV>,
    stack: SmallVec<[&'a HierarchyNode<BV>; TRAVERSAL_STACK_SIZE]>,
    check: Check,
}

impl<'a, BV, Check: Fn(&HierarchyNode<BV>) -> bool> Leaves<'a, BV, Check> {
    fn new(tree: &'a Hierarchy<BV>, check: Check) -> Self {
        let mut stack = SmallVec::new();

        if let Some(root) = tree.root() {
            if root.is_valid() && check(root) {
                stack.push(root);
            }
        }

        Leaves { tree, stack, check }
    }
}

impl<'a, BV, Check: Fn(&HierarchyNode<BV>) -> bool> Iterator for Leaves<'a, BV, Check> {
    type Item = &'a HierarchyNode<BV>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.stack.pop()?;

            for child in [node.right, node.left].into_iter().flatten() {
                if let Some(child) = self.tree.node(child) {
                    if (self.check)(child) {
                        self.stack.push(child);
                    }
                }
            }

            if node.is_leaf() {
                return Some(node);
            }
        }
    }
}

impl<BV> Hierarchy<BV> {
    /// Depth-first traversal of this hierarchy, driven by the caller.
    ///
    /// Starting at the root, `prune` is evaluated on each reached node: if it returns `false`
    /// the node and its subtree are skipped. Otherwise, if the node is a leaf it is passed to
    /// `visitor`, and the traversal continues with its left child then its right child.
    ///
    /// `prune` typically tests the node's volume against a query volume, and `visitor` does
    /// the exact work on the leaf's triangles.
    pub fn visit_nodes(
        &self,
        mut visitor: impl FnMut(&HierarchyNode<BV>),
        mut prune: impl FnMut(&HierarchyNode<BV>) -> bool,
    ) {
        let mut stack: SmallVec<[u32; TRAVERSAL_STACK_SIZE]> = SmallVec::new();

        if !self.is_empty() {
            stack.push(0);
        }

        while let Some(id) = stack.pop() {
            let Some(node) = self.node(id) else {
                continue;
            };

            if !prune(node) {
                continue;
            }

            if node.is_leaf() {
                visitor(node);
            }

            stack.extend(node.right);
            stack.extend(node.left);
        }
    }

    /// Iterates through every leaf of this hierarchy, in depth-first order.
    pub fn leaves(&self) -> Leaves<'_, BV, impl Fn(&HierarchyNode<BV>) -> bool> {
        Leaves::new(self, |_| true)
    }

    /// Iterates through the leaves flagged as collided by the last
    /// [`mark_collided`](crate::partitioning::mark_collided).
    pub fn collided_leaves(&self) -> Leaves<'_, BV, impl Fn(&HierarchyNode<BV>) -> bool> {
        Leaves::new(self, |node| node.collided)
    }
}
