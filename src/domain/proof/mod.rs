use std::marker::PhantomData;

use super::{
    error::MerkleError,
    hash::{sha256::Sha256Hasher, Digest, HashMethod, DIGEST_LEN},
};

mod generate;
mod verify;

pub use verify::verify_proof;

/// An SPV inclusion proof: sibling digests ordered from the leaf up to the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleProof<Method: HashMethod> {
    hashes: Vec<Digest>,
    method: PhantomData<Method>,
}

pub type MerkleProofSha256 = MerkleProof<Sha256Hasher>;

impl<Method: HashMethod> MerkleProof<Method> {
    pub fn new(hashes: Vec<Digest>) -> Self {
        Self {
            hashes,
            method: PhantomData,
        }
    }

    pub fn hashes(&self) -> &[Digest] {
        &self.hashes
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// Concatenate the digests in proof order.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.hashes.concat()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MerkleError> {
        if bytes.len() % DIGEST_LEN != 0 {
            return Err(MerkleError::MalformedProof { len: bytes.len() });
        }
        let hashes = bytes
            .chunks_exact(DIGEST_LEN)
            .map(|chunk| {
                let mut digest = [0u8; DIGEST_LEN];
                digest.copy_from_slice(chunk);
                digest
            })
            .collect();
        Ok(Self::new(hashes))
    }
}

impl<Method: HashMethod> From<Vec<Digest>> for MerkleProof<Method> {
    fn from(hashes: Vec<Digest>) -> Self {
        Self::new(hashes)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{
        error::MerkleError,
        hash::{sha256::Sha256Hasher, HashMethod},
        proof::MerkleProofSha256,
    };

    #[test]
    fn test_bytes_layout() {
        let a = Sha256Hasher::hash_leaf(b"A");
        let b = Sha256Hasher::hash_leaf(b"B");
        let proof = MerkleProofSha256::new(vec![a, b]);

        let bytes = proof.to_bytes();
        assert_eq!(bytes.len(), 64);
        assert_eq!(&bytes[..32], &a, "First digest must come first");
        assert_eq!(&bytes[32..], &b);
        assert_eq!(MerkleProofSha256::from_bytes(&bytes), Ok(proof));
    }

    #[test]
    fn test_empty_bytes_give_empty_proof() {
        let proof = MerkleProofSha256::from_bytes(&[]).unwrap();
        assert!(proof.is_empty());
        assert_eq!(proof.len(), 0);
    }

    #[test]
    fn test_truncated_bytes_rejected() {
        let bytes = vec![0u8; 33];
        assert_eq!(
            MerkleProofSha256::from_bytes(&bytes),
            Err(MerkleError::MalformedProof { len: 33 })
        );
    }
}
