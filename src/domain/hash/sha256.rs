use super::{Digest, HashMethod};
use sha2::{digest::FixedOutput, Digest as _, Sha256};

/// Single SHA-256 for both leaves and internal nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256Hasher;

impl HashMethod for Sha256Hasher {
    fn hash_leaf(data: &[u8]) -> Digest {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize_fixed().into()
    }

    fn hash_nodes(left: &Digest, right: &Digest) -> Digest {
        let mut hasher = Sha256::new();
        hasher.update(left);
        hasher.update(right);
        hasher.finalize_fixed().into()
    }
}
