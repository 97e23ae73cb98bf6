use sha2::{Digest, Sha256};

use crate::hypergraph::HypergraphImpl;
use sod_core::Hypergraph;

/// Computes the canonical structural hash for the provided graph.
///
/// The digest covers the node set and the sorted multiset of member lists,
/// so it is independent of edge identifiers.
pub fn canonical_hash(graph: &HypergraphImpl) -> String {
    let mut hasher = Sha256::new();

    let nodes: Vec<u64> = graph.nodes().map(|node| node.as_raw()).collect();
    update_slice(&nodes, &mut hasher);

    let mut signatures: Vec<Vec<u64>> = graph
        .edge_members()
        .map(|(_, members)| members.iter().map(|node| node.as_raw()).collect())
        .collect();
    signatures.sort();
    hasher.update((signatures.len() as u64).to_le_bytes());
    for signature in &signatures {
        update_slice(signature, &mut hasher);
    }

    format!("{:x}", hasher.finalize())
}

fn update_slice(values: &[u64], hasher: &mut Sha256) {
    hasher.update((values.len() as u64).to_le_bytes());
    for value in values {
        hasher.update(value.to_le_bytes());
    }
}
