use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use sod_core::{Hypergraph, NodeId, SodError};
use sod_graph::HypergraphImpl;
use tracing::debug;

use crate::options::SimplicialityOptions;
use crate::subfaces::{count_missing_subfaces, Face};
use crate::subsets::subsets;
use crate::trie::Trie;

/// Quantities the edit distance is derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditCounts {
    /// Distinct subfaces that must be added to complete every maximal edge.
    pub missing: u64,
    /// Distinct edges with at least `min_size` members.
    pub qualifying: usize,
    /// Maximal edges at or above the candidate threshold.
    pub maximal: usize,
}

impl EditCounts {
    /// `missing / (missing + qualifying - maximal)`, or `NaN` when undefined.
    pub fn normalized(&self) -> f64 {
        if self.maximal == 0 {
            return f64::NAN;
        }
        let denominator = self.missing as f64 + self.qualifying as f64 - self.maximal as f64;
        if denominator == 0.0 {
            return f64::NAN;
        }
        self.missing as f64 / denominator
    }
}

/// Counts the subfaces missing from the maximal edges of `graph`.
///
/// A face missing from several maximal edges is only counted once.
pub fn edit_counts(
    graph: &HypergraphImpl,
    opts: &SimplicialityOptions,
) -> Result<EditCounts, SodError> {
    opts.validate()?;
    let min_size = opts.min_size;
    let trie = Trie::build(
        graph
            .edges_with_min_size(min_size)
            .into_iter()
            .map(|members| members.iter().copied()),
    );

    let mut maximal: Vec<&[NodeId]> = Vec::new();
    for edge in graph.maximal_edges() {
        let members = graph.members(edge)?;
        if members.len() >= opts.threshold() {
            maximal.push(members);
        }
    }

    let mut missing = 0u64;
    for members in &maximal {
        missing += count_missing_subfaces(&trie, members, min_size)?;
    }

    // Faces missing from k maximal edges were counted k times above.
    let mut shared: BTreeMap<Face, BTreeSet<usize>> = BTreeMap::new();
    for (i, left) in maximal.iter().enumerate() {
        for (j, right) in maximal.iter().enumerate().skip(i + 1) {
            let common = intersection(left, right);
            if common.len() < min_size {
                continue;
            }
            for face in subsets(&common, min_size, None) {
                if !trie.contains_sorted(&face) {
                    let owners = shared.entry(face).or_default();
                    owners.insert(i);
                    owners.insert(j);
                }
            }
        }
    }
    for owners in shared.values() {
        missing -= owners.len() as u64 - 1;
    }

    let counts = EditCounts {
        missing,
        qualifying: trie.len(),
        maximal: maximal.len(),
    };
    debug!(
        missing = counts.missing,
        qualifying = counts.qualifying,
        maximal = counts.maximal,
        "edit counts"
    );
    Ok(counts)
}

/// Number of subfaces to add before every maximal edge is a simplex.
///
/// Normalised by `missing + qualifying - maximal` when `normalize` is set.
/// `NaN` when no maximal edge reaches the candidate threshold.
pub fn simplicial_edit_distance(
    graph: &HypergraphImpl,
    opts: &SimplicialityOptions,
    normalize: bool,
) -> Result<f64, SodError> {
    let counts = edit_counts(graph, opts)?;
    if counts.maximal == 0 {
        return Ok(f64::NAN);
    }
    if normalize {
        Ok(counts.normalized())
    } else {
        Ok(counts.missing as f64)
    }
}

/// One minus the normalised simplicial edit distance.
pub fn edit_simpliciality(
    graph: &HypergraphImpl,
    opts: &SimplicialityOptions,
) -> Result<f64, SodError> {
    Ok(1.0 - simplicial_edit_distance(graph, opts, true)?)
}

fn intersection(left: &[NodeId], right: &[NodeId]) -> Vec<NodeId> {
    let right: BTreeSet<&NodeId> = right.iter().collect();
    left.iter().filter(|node| right.contains(node)).copied().collect()
}
