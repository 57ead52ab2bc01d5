use super::error::MerkleError;

/// Validate a caller supplied leaf index.
///
/// Negative indices are always rejected; the upper bound is only checked when
/// the leaf count is known.
pub fn checked_leaf_index(index: i64, leaf_count: Option<usize>) -> Result<usize, MerkleError> {
    let out_of_range = MerkleError::IndexOutOfRange { index, leaf_count };
    let idx = usize::try_from(index).map_err(|_| out_of_range.clone())?;
    match leaf_count {
        Some(count) if idx >= count => Err(out_of_range),
        _ => Ok(idx),
    }
}

/// Same as [`checked_leaf_index`] for indices that are already unsigned.
pub fn ensure_in_range(index: usize, leaf_count: Option<usize>) -> Result<usize, MerkleError> {
    match leaf_count {
        Some(count) if index >= count => Err(MerkleError::IndexOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            leaf_count,
        }),
        _ => Ok(index),
    }
}
