#![deny(clippy::all)]

//! Binary Merkle tree over ordered byte records with SPV style inclusion proofs.

pub mod domain;
pub mod interfaces;

pub use domain::error::MerkleError;
pub use domain::hash::{sha256::Sha256Hasher, Digest, HashMethod};
pub use domain::node::Node;
pub use domain::options::{PaddingPolicy, TreeOptions};
pub use domain::proof::{verify_proof, MerkleProof, MerkleProofSha256};
pub use domain::tree::{MerkleTree, MerkleTreeSha256};

/// Install `env_logger` as the `log` backend. Safe to call more than once.
pub fn init_logging() {
  let _ = env_logger::builder().try_init();
}
