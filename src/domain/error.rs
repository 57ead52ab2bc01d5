use thiserror::Error;

/// Structural failures of tree construction, proof generation and verification.
///
/// A proof that simply does not match a root is not an error; verification
/// reports that as `Ok(false)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MerkleError {
    #[error("leaf count {count} is not a power of two after padding")]
    InvalidLeafCount { count: usize },
    #[error("operation requires a root but the tree is empty")]
    EmptyTree,
    #[error("leaf index {index} out of range (leaf count {leaf_count:?})")]
    IndexOutOfRange {
        index: i64,
        leaf_count: Option<usize>,
    },
    #[error("leaf not found in the Merkle tree")]
    LeafNotFound,
    #[error("proof length {len} is not a multiple of the digest size")]
    MalformedProof { len: usize },
}
