/// Fixed-size output of the digest function.
pub type Digest = [u8; 32];

pub const DIGEST_LEN: usize = 32;

/// `0x` prefixed lowercase hex.
pub fn encode_digest(digest: &Digest) -> String {
    format!("0x{}", hex::encode(digest))
}

pub trait HashMethod {
    /// Hash a leaf record.
    fn hash_leaf(data: &[u8]) -> Digest;

    /// Hash two child digests together, `left ‖ right`.
    fn hash_nodes(left: &Digest, right: &Digest) -> Digest;
}

pub mod sha256;
