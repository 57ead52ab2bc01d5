//! Proof verification. Pure functions, no tree required.

use log::debug;

use super::MerkleProof;
use crate::domain::{
    error::MerkleError,
    hash::{Digest, HashMethod},
    index::ensure_in_range,
    tree::MerkleTree,
};

impl<Method: HashMethod> MerkleProof<Method> {
    /// Recompute the root implied by this proof for `leaf` at `index`.
    pub fn root(&self, index: usize, leaf: &[u8]) -> Digest {
        let mut index = index;
        let mut current = Method::hash_leaf(leaf);

        for sibling in self.hashes.iter() {
            current = if index % 2 == 0 {
                Method::hash_nodes(&current, sibling)
            } else {
                Method::hash_nodes(sibling, &current)
            };
            index /= 2;
        }
        current
    }

    /// Check that `leaf` sits at `index` under `expected_root`.
    ///
    /// `Err` is reserved for an index outside `leaf_count`; a proof that does
    /// not lead to `expected_root` yields `Ok(false)`.
    pub fn verify(
        &self,
        index: usize,
        leaf: &[u8],
        expected_root: &Digest,
        leaf_count: Option<usize>,
    ) -> Result<bool, MerkleError> {
        ensure_in_range(index, leaf_count)?;

        if let Some(count) = leaf_count.filter(|c| c.is_power_of_two()) {
            if self.len() != count.trailing_zeros() as usize {
                debug!(
                    "proof has {} hashes, {} leaves need {}",
                    self.len(),
                    count,
                    count.trailing_zeros()
                );
                return Ok(false);
            }
        }

        // An index with bits above the proof height cannot be reached by it.
        if self.len() < usize::BITS as usize && index >> self.len() != 0 {
            debug!("leaf index {} is beyond a proof of height {}", index, self.len());
            return Ok(false);
        }

        Ok(&self.root(index, leaf) == expected_root)
    }
}

/// Verify a leaf-to-root list of sibling digests against a trusted root.
pub fn verify_proof<Method: HashMethod>(
    index: usize,
    leaf: &[u8],
    proof: &[Digest],
    expected_root: &Digest,
    leaf_count: Option<usize>,
) -> Result<bool, MerkleError> {
    MerkleProof::<Method>::new(proof.to_vec()).verify(index, leaf, expected_root, leaf_count)
}

impl<Method: HashMethod> MerkleTree<Method> {
    /// Verify `proof` for the stored record at `index` against this tree's root.
    pub fn verify_leaf(&self, index: usize, proof: &MerkleProof<Method>) -> Result<bool, MerkleError> {
        let root = self.root_hash().ok_or(MerkleError::EmptyTree)?;
        ensure_in_range(index, Some(self.leaf_count()))?;
        proof.verify(index, &self.leaves[index], &root, Some(self.leaf_count()))
    }
}
