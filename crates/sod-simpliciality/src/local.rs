use std::collections::{BTreeMap, BTreeSet};

use sod_core::{Hypergraph, NodeId, SodError};
use sod_graph::HypergraphImpl;

use crate::edit::edit_simpliciality;
use crate::face_edit::face_edit_simpliciality;
use crate::fraction::simplicial_fraction;
use crate::options::SimplicialityOptions;

/// Simplicial fraction of each node's neighbourhood.
///
/// `nodes` restricts the evaluation; `None` scores every node.
pub fn local_simplicial_fraction(
    graph: &HypergraphImpl,
    nodes: Option<&BTreeSet<NodeId>>,
    opts: &SimplicialityOptions,
) -> Result<BTreeMap<NodeId, f64>, SodError> {
    local_scores(graph, nodes, |sub| simplicial_fraction(sub, opts))
}

/// Edit simpliciality of each node's neighbourhood.
pub fn local_edit_simpliciality(
    graph: &HypergraphImpl,
    nodes: Option<&BTreeSet<NodeId>>,
    opts: &SimplicialityOptions,
) -> Result<BTreeMap<NodeId, f64>, SodError> {
    local_scores(graph, nodes, |sub| edit_simpliciality(sub, opts))
}

/// Face edit simpliciality of each node's neighbourhood.
pub fn local_face_edit_simpliciality(
    graph: &HypergraphImpl,
    nodes: Option<&BTreeSet<NodeId>>,
    opts: &SimplicialityOptions,
) -> Result<BTreeMap<NodeId, f64>, SodError> {
    local_scores(graph, nodes, |sub| face_edit_simpliciality(sub, opts))
}

/// Scores the sub-hypergraph induced by each node and its neighbours.
/// Nodes without neighbours score `NaN`.
pub(crate) fn local_scores<F>(
    graph: &HypergraphImpl,
    nodes: Option<&BTreeSet<NodeId>>,
    metric: F,
) -> Result<BTreeMap<NodeId, f64>, SodError>
where
    F: Fn(&HypergraphImpl) -> Result<f64, SodError>,
{
    let targets: Vec<NodeId> = match nodes {
        Some(nodes) => nodes.iter().copied().collect(),
        None => graph.nodes().collect(),
    };
    let mut scores = BTreeMap::new();
    for node in targets {
        let mut neighbourhood = graph.neighbors(node)?;
        let score = if neighbourhood.is_empty() {
            f64::NAN
        } else {
            neighbourhood.insert(node);
            metric(&graph.subhypergraph(&neighbourhood))?
        };
        scores.insert(node, score);
    }
    Ok(scores)
}
