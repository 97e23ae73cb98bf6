use std::collections::BTreeSet;

use sod_core::{EdgeId, NodeId};

/// Creates an [`EdgeId`] from a positional index.
pub(crate) fn make_edge(index: usize) -> EdgeId {
    EdgeId::from_raw(index as u64)
}

/// Creates a [`NodeId`] from a positional index.
pub(crate) fn make_node(index: usize) -> NodeId {
    NodeId::from_raw(index as u64)
}

/// Ensures that the list of node identifiers is sorted and contains no duplicates.
pub(crate) fn canonicalize_nodes<I>(nodes: I) -> Vec<NodeId>
where
    I: IntoIterator<Item = NodeId>,
{
    let set: BTreeSet<NodeId> = nodes.into_iter().collect();
    set.into_iter().collect()
}

/// Returns whether every element of the sorted slice `small` occurs in the sorted slice `large`.
pub(crate) fn is_sorted_subset(small: &[NodeId], large: &[NodeId]) -> bool {
    if small.len() > large.len() {
        return false;
    }
    let mut idx = 0;
    for node in small {
        while idx < large.len() && large[idx] < *node {
            idx += 1;
        }
        if idx == large.len() || large[idx] != *node {
            return false;
        }
        idx += 1;
    }
    true
}
