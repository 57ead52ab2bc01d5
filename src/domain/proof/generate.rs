use log::trace;

use super::MerkleProof;
use crate::domain::{
    error::MerkleError,
    hash::HashMethod,
    index::ensure_in_range,
    node::Node,
    tree::MerkleTree,
};

impl<Method: HashMethod> MerkleTree<Method> {
    /// Generate the SPV proof for the leaf at `index`.
    ///
    /// Walks from the root down to the leaf, collecting the digest of the
    /// sibling at every level, then returns them leaf first.
    pub fn spv_proof(&self, index: usize) -> Result<MerkleProof<Method>, MerkleError> {
        let root = self.root.as_ref().ok_or(MerkleError::EmptyTree)?;
        ensure_in_range(index, Some(self.leaf_count()))?;

        let depth = self.depth();
        let mut width = 1usize << depth;
        let mut lower = 0usize;
        let mut node = root;
        let mut path = Vec::with_capacity(depth);

        while let Node::Internal { left, right, .. } = node {
            width /= 2;
            if index >= lower + width {
                path.push(*left.digest());
                node = right.as_ref();
                lower += width;
            } else {
                path.push(*right.digest());
                node = left.as_ref();
            }
            trace!("proof step {} for leaf {}: range start {}", path.len(), index, lower);
        }

        path.reverse();
        Ok(MerkleProof::new(path))
    }
}
