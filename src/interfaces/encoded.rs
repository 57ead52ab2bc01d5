//! Hex encoded boundary for callers that exchange digests and proofs as text
//! and pass indices as signed integers.

use anyhow::{anyhow, Context, Result};

pub use crate::domain::hash::encode_digest;

use crate::domain::{
    error::MerkleError,
    hash::{Digest, HashMethod, DIGEST_LEN},
    index::checked_leaf_index,
    proof::MerkleProof,
    tree::MerkleTree,
};

/// Decode a 32-byte digest from hex, with or without a `0x` prefix.
pub fn decode_digest(value: &str) -> Result<Digest> {
    let stripped = value.strip_prefix("0x").unwrap_or(value);
    let bytes = hex::decode(stripped).with_context(|| format!("invalid hex digest {value:?}"))?;
    <Digest>::try_from(bytes.as_slice()).map_err(|_| {
        anyhow!(
            "digest must be {} bytes, got {}",
            DIGEST_LEN,
            bytes.len()
        )
    })
}

/// Generate the proof for `index` as a list of `0x` prefixed hex digests.
pub fn proof_hex<Method: HashMethod>(tree: &MerkleTree<Method>, index: i64) -> Result<Vec<String>> {
    if tree.is_empty() {
        return Err(MerkleError::EmptyTree.into());
    }
    let index = checked_leaf_index(index, Some(tree.leaf_count()))?;
    let proof = tree
        .spv_proof(index)
        .with_context(|| format!("failed to generate proof for leaf {index}"))?;
    Ok(proof.hashes().iter().map(encode_digest).collect())
}

/// Verify a hex encoded proof. `Ok(false)` means the proof was rejected.
pub fn verify_hex<Method: HashMethod>(
    index: i64,
    leaf: &[u8],
    proof_hex: &[String],
    root_hex: &str,
    leaf_count: Option<usize>,
) -> Result<bool> {
    let index = checked_leaf_index(index, leaf_count)?;
    let root = decode_digest(root_hex).context("invalid root")?;
    let hashes = proof_hex
        .iter()
        .enumerate()
        .map(|(i, h)| decode_digest(h).with_context(|| format!("invalid proof entry {i}")))
        .collect::<Result<Vec<_>>>()?;

    Ok(MerkleProof::<Method>::new(hashes).verify(index, leaf, &root, leaf_count)?)
}
