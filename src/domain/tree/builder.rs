use itertools::Itertools;
use log::debug;

use crate::domain::{
    error::MerkleError,
    hash::HashMethod,
    node::Node,
    options::PaddingPolicy,
};

/// Apply the padding policy to a non-empty record list.
pub(crate) fn pad_records(
    mut records: Vec<Vec<u8>>,
    policy: PaddingPolicy,
) -> Result<Vec<Vec<u8>>, MerkleError> {
    let original_len = records.len();
    let last = match records.last() {
        Some(last) => last.clone(),
        None => return Ok(records),
    };

    if records.len() % 2 != 0 {
        records.push(last.clone());
    }

    if policy == PaddingPolicy::NextPowerOfTwo {
        let target = records.len().next_power_of_two();
        records.resize(target, last);
    }

    if !records.len().is_power_of_two() {
        return Err(MerkleError::InvalidLeafCount {
            count: records.len(),
        });
    }

    if records.len() != original_len {
        debug!(
            "Padded {} records to {} leaves ({:?})",
            original_len,
            records.len(),
            policy
        );
    }
    Ok(records)
}

/// Pair adjacent nodes left to right, one level at a time, until one remains.
pub(crate) fn assemble_levels<Method: HashMethod>(nodes: Vec<Node>) -> Result<Node, MerkleError> {
    let mut level = nodes;
    while level.len() > 1 {
        level = level
            .into_iter()
            .tuples()
            .map(|(left, right)| Node::internal::<Method>(left, right))
            .collect();
    }
    level.pop().ok_or(MerkleError::EmptyTree)
}

/// Build the subtree over `nodes`, joining both halves on the rayon pool.
pub(crate) fn assemble_subtree<Method: HashMethod>(
    mut nodes: Vec<Node>,
) -> Result<Node, MerkleError> {
    if nodes.len() <= 1 {
        return nodes.pop().ok_or(MerkleError::EmptyTree);
    }

    let right = nodes.split_off(nodes.len() / 2);
    let (left_res, right_res) = rayon::join(
        || assemble_subtree::<Method>(nodes),
        || assemble_subtree::<Method>(right),
    );

    Ok(Node::internal::<Method>(left_res?, right_res?))
}

#[cfg(test)]
mod tests {
    use super::{assemble_levels, assemble_subtree, pad_records};
    use crate::domain::{
        error::MerkleError,
        hash::sha256::Sha256Hasher,
        node::Node,
        options::PaddingPolicy,
    };

    fn records(count: usize) -> Vec<Vec<u8>> {
        (0..count).map(|i| format!("record_{i}").into_bytes()).collect()
    }

    #[test]
    fn test_single_duplication() {
        let padded = pad_records(records(3), PaddingPolicy::DuplicateLast).unwrap();
        assert_eq!(padded.len(), 4);
        assert_eq!(padded[3], padded[2], "Last record must be duplicated");

        let padded = pad_records(records(1), PaddingPolicy::DuplicateLast).unwrap();
        assert_eq!(padded, vec![b"record_0".to_vec(), b"record_0".to_vec()]);
    }

    #[test]
    fn test_power_of_two_untouched() {
        let input = records(8);
        let padded = pad_records(input.clone(), PaddingPolicy::DuplicateLast).unwrap();
        assert_eq!(padded, input);
    }

    #[test]
    fn test_rejects_non_power_of_two() {
        assert_eq!(
            pad_records(records(5), PaddingPolicy::DuplicateLast),
            Err(MerkleError::InvalidLeafCount { count: 6 })
        );
        assert_eq!(
            pad_records(records(6), PaddingPolicy::DuplicateLast),
            Err(MerkleError::InvalidLeafCount { count: 6 })
        );
    }

    #[test]
    fn test_next_power_of_two_padding() {
        let padded = pad_records(records(5), PaddingPolicy::NextPowerOfTwo).unwrap();
        assert_eq!(padded.len(), 8);
        assert!(
            padded[4..].iter().all(|r| r == b"record_4"),
            "Padding must repeat the last record"
        );
    }

    #[test]
    fn test_assembly_strategies_agree() {
        for count in [1usize, 2, 4, 8, 64] {
            let leaves: Vec<Node> = records(count)
                .iter()
                .map(|r| Node::leaf::<Sha256Hasher>(r))
                .collect();
            let by_level = assemble_levels::<Sha256Hasher>(leaves.clone()).unwrap();
            let by_join = assemble_subtree::<Sha256Hasher>(leaves).unwrap();
            assert_eq!(by_level, by_join, "Both strategies must give the same tree");
        }
    }

    #[test]
    fn test_assembly_of_nothing_fails() {
        assert_eq!(
            assemble_levels::<Sha256Hasher>(vec![]),
            Err(MerkleError::EmptyTree)
        );
        assert_eq!(
            assemble_subtree::<Sha256Hasher>(vec![]),
            Err(MerkleError::EmptyTree)
        );
    }
}
