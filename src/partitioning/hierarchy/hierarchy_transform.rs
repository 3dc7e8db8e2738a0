use super::hierarchy_tree::{Hierarchy, HierarchyError, HierarchyVolume};
use crate::math::{Real, Transform};
use crate::utils::TransformOps;

impl<BV: HierarchyVolume> Hierarchy<BV> {
    /// Replaces the volume of every node of `self` by the image of the matching volume of
    /// `source` through the affine transform `m`.
    ///
    /// `source` is typically the model-space hierarchy `self` was cloned from, and `self` its
    /// world-space counterpart updated every time the model moves. The topology of `self` is
    /// never modified: only the volumes are replaced. The resulting volumes are conservative,
    /// i.e., they contain the transformed content of the source volumes but are not tight in
    /// general.
    ///
    /// Nothing is modified if an error is returned.
    pub fn apply_transform(
        &mut self,
        m: &Transform<Real>,
        source: &Hierarchy<BV>,
    ) -> Result<(), HierarchyError> {
        if !m.is_finite() {
            return Err(HierarchyError::NonFiniteTransform);
        }

        if self.nodes.len() != source.nodes.len() {
            return Err(HierarchyError::TopologyMismatch {
                expected: self.nodes.len(),
                found: source.nodes.len(),
            });
        }

        for (slot, (node, src)) in self.nodes.iter().zip(source.nodes.iter()).enumerate() {
            if node.index != src.index || node.left != src.left || node.right != src.right {
                return Err(HierarchyError::NodeMismatch { slot });
            }
        }

        for (node, src) in self.nodes.iter_mut().zip(source.nodes.iter()) {
            if node.is_valid() {
                node.volume = src.volume.transform_by(m);
            }
        }

        Ok(())
    }

    /// Returns a copy of `self` with every volume transformed by `m`.
    pub fn transformed(&self, m: &Transform<Real>) -> Result<Self, HierarchyError> {
        let mut result = self.clone();
        result.apply_transform(m, self)?;
        Ok(result)
    }
}
