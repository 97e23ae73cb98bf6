use std::collections::BTreeSet;

use sod_core::{NodeId, SodError};

use crate::bound::max_number_of_subfaces;
use crate::subsets::subsets;
use crate::trie::Trie;

/// A sorted, duplicate-free node set compared structurally.
pub type Face = Vec<NodeId>;

/// Counts the proper subsets of `edge` with at least `min_size` members that
/// are present in `trie`.
pub fn count_present_subfaces(trie: &Trie, edge: &[NodeId], min_size: usize) -> u64 {
    let edge = canonical(edge);
    proper_subfaces(&edge, min_size)
        .filter(|face| trie.contains_sorted(face))
        .count() as u64
}

/// Proper subsets of `edge` with at least `min_size` members absent from `trie`.
pub fn find_missing_subfaces(trie: &Trie, edge: &[NodeId], min_size: usize) -> BTreeSet<Face> {
    let edge = canonical(edge);
    proper_subfaces(&edge, min_size)
        .filter(|face| !trie.contains_sorted(face))
        .collect()
}

/// Number of proper subsets of `edge` with at least `min_size` members that
/// are absent from `trie`.
///
/// Always equal to `find_missing_subfaces(trie, edge, min_size).len()`.
pub fn count_missing_subfaces(
    trie: &Trie,
    edge: &[NodeId],
    min_size: usize,
) -> Result<u64, SodError> {
    let edge = canonical(edge);
    let bound = max_number_of_subfaces(min_size, edge.len())?;
    Ok(bound - count_present_subfaces(trie, &edge, min_size))
}

/// Returns whether every proper subset of `edge` with at least `min_size`
/// members is present in `trie`.
pub fn is_simplex(trie: &Trie, edge: &[NodeId], min_size: usize) -> bool {
    let edge = canonical(edge);
    let simplex = proper_subfaces(&edge, min_size).all(|face| trie.contains_sorted(&face));
    simplex
}

fn proper_subfaces(edge: &[NodeId], min_size: usize) -> impl Iterator<Item = Face> + '_ {
    subsets(edge, min_size, Some(edge.len().saturating_sub(1)))
}

fn canonical(edge: &[NodeId]) -> Face {
    let mut face = edge.to_vec();
    face.sort_unstable();
    face.dedup();
    face
}
