use log::{debug, info};
use rayon::prelude::*;
use std::marker::PhantomData;
use std::time::Instant;

use super::{
    error::MerkleError,
    hash::{encode_digest, sha256::Sha256Hasher, Digest, HashMethod},
    node::Node,
    options::TreeOptions,
};

mod builder;

/// A complete binary Merkle tree plus the padded records it was built from.
///
/// The tree is immutable once built; leaf indices refer to `leaves()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree<Method: HashMethod> {
    pub(crate) root: Option<Node>,
    pub(crate) leaves: Vec<Vec<u8>>,
    method: PhantomData<Method>,
}

pub type MerkleTreeSha256 = MerkleTree<Sha256Hasher>;

impl<Method: HashMethod> MerkleTree<Method> {
    pub fn empty() -> Self {
        Self {
            root: None,
            leaves: Vec::new(),
            method: PhantomData,
        }
    }

    /// Build a tree with the default options.
    pub fn from_leaves(records: Vec<Vec<u8>>) -> Result<Self, MerkleError> {
        Self::from_leaves_with_options(records, &TreeOptions::default())
    }

    pub fn from_leaves_with_options(
        records: Vec<Vec<u8>>,
        options: &TreeOptions,
    ) -> Result<Self, MerkleError> {
        let total_start = Instant::now();
        if records.is_empty() {
            debug!("No records supplied, returning an empty tree");
            return Ok(Self::empty());
        }

        let leaves = builder::pad_records(records, options.padding)?;

        let hash_start = Instant::now();
        let nodes: Vec<Node> = if options.parallel {
            leaves.par_iter().map(|r| Node::leaf::<Method>(r)).collect()
        } else {
            leaves.iter().map(|r| Node::leaf::<Method>(r)).collect()
        };
        debug!("Hashing {} leaves took {:?}", nodes.len(), hash_start.elapsed());

        let build_start = Instant::now();
        let root = if options.parallel {
            builder::assemble_subtree::<Method>(nodes)?
        } else {
            builder::assemble_levels::<Method>(nodes)?
        };
        debug!("Building the tree took {:?}", build_start.elapsed());

        info!(
            "Total duration of from_leaves for {} leaves: {:?}",
            leaves.len(),
            total_start.elapsed()
        );

        Ok(Self {
            root: Some(root),
            leaves,
            method: PhantomData,
        })
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn root_hash(&self) -> Option<Digest> {
        self.root.as_ref().map(|r| *r.digest())
    }

    pub fn root_hex(&self) -> Option<String> {
        self.root_hash().as_ref().map(encode_digest)
    }

    /// The padded record sequence.
    pub fn leaves(&self) -> &[Vec<u8>] {
        &self.leaves
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree, counted along the right spine.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut node = self.root.as_ref();
        while let Some(right) = node.and_then(Node::right) {
            depth += 1;
            node = Some(right);
        }
        depth
    }

    /// Return the first leaf index whose record equals `data`.
    pub fn get_index_by_data(&self, data: &[u8]) -> Result<usize, MerkleError> {
        if self.is_empty() {
            return Err(MerkleError::EmptyTree);
        }
        self.leaves
            .iter()
            .position(|leaf| leaf.as_slice() == data)
            .ok_or(MerkleError::LeafNotFound)
    }
}

impl<Method: HashMethod> Default for MerkleTree<Method> {
    fn default() -> Self {
        Self::empty()
    }
}
