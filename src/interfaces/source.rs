use anyhow::{Context, Result};

use crate::domain::{hash::HashMethod, options::TreeOptions, tree::MerkleTree};

/// A producer of leaf payloads, e.g. a wallet exposing its address.
pub trait AddressSource {
    fn get_address_bytes(&self) -> Vec<u8>;
}

impl AddressSource for Vec<u8> {
    fn get_address_bytes(&self) -> Vec<u8> {
        self.clone()
    }
}

/// Build a tree over the address bytes of each source, in order.
pub fn tree_from_sources<Method, S>(sources: &[S], options: &TreeOptions) -> Result<MerkleTree<Method>>
where
    Method: HashMethod,
    S: AddressSource,
{
    let records = sources.iter().map(AddressSource::get_address_bytes).collect();
    MerkleTree::from_leaves_with_options(records, options)
        .with_context(|| format!("failed to build tree from {} sources", sources.len()))
}

#[cfg(test)]
mod tests {
    use super::{tree_from_sources, AddressSource};
    use crate::domain::{
        error::MerkleError,
        hash::sha256::Sha256Hasher,
        options::TreeOptions,
        tree::MerkleTreeSha256,
    };

    struct FixedAddress(&'static str);

    impl AddressSource for FixedAddress {
        fn get_address_bytes(&self) -> Vec<u8> {
            self.0.as_bytes().to_vec()
        }
    }

    #[test]
    fn test_tree_from_sources_matches_records() {
        let sources = [
            FixedAddress("1BoatSLRHtKNngkdXEeobR76b53LETtpyT"),
            FixedAddress("1JryTePceSiWVpoNBU8SbwiT7J4ghzijzW"),
        ];
        let tree = tree_from_sources::<Sha256Hasher, _>(&sources, &TreeOptions::default()).unwrap();
        let direct = MerkleTreeSha256::from_leaves(
            sources.iter().map(AddressSource::get_address_bytes).collect(),
        )
        .unwrap();

        assert_eq!(tree.root_hash(), direct.root_hash());
        let index = tree
            .get_index_by_data(b"1JryTePceSiWVpoNBU8SbwiT7J4ghzijzW")
            .unwrap();
        let proof = tree.spv_proof(index).unwrap();
        assert_eq!(tree.verify_leaf(index, &proof), Ok(true));
    }

    #[test]
    fn test_invalid_count_surfaces_error() {
        let sources: Vec<Vec<u8>> = (0..5u8).map(|i| vec![i]).collect();
        let err = tree_from_sources::<Sha256Hasher, _>(&sources, &TreeOptions::default()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<MerkleError>(),
            Some(&MerkleError::InvalidLeafCount { count: 6 })
        );
    }
}
