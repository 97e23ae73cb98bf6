use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sod_core::errors::{ErrorInfo, SodError};
use sod_core::{EdgeId, Hypergraph, NodeId};

use crate::hypergraph::HypergraphImpl;

/// Serializes the graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes(graph: &HypergraphImpl) -> Result<Vec<u8>, SodError> {
    let serializable = SerializableGraph::from_graph(graph);
    bincode::serialize(&serializable)
        .map_err(|err| SodError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<HypergraphImpl, SodError> {
    let serializable: SerializableGraph = bincode::deserialize(bytes)
        .map_err(|err| SodError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_graph()
}

/// Serializes the graph to a JSON string.
pub fn graph_to_json(graph: &HypergraphImpl) -> Result<String, SodError> {
    let serializable = SerializableGraph::from_graph(graph);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| SodError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON string.
///
/// Accepts either the snapshot layout produced by [`graph_to_json`]
/// (`{"nodes": [...], "edges": {"0": [1, 2]}}`) or a bare edge list
/// (`[[1, 2], [2, 3, 4]]`) whose edges receive ids `0..`.
pub fn graph_from_json(json: &str) -> Result<HypergraphImpl, SodError> {
    // Snapshot edge ids are string keys, so the layout is picked by the
    // top-level shape before decoding into typed structures.
    if json.trim_start().starts_with('[') {
        let edges: Vec<Vec<u64>> = serde_json::from_str(json).map_err(deserialize_error)?;
        HypergraphImpl::from_edge_lists(edges)
    } else {
        let snapshot: SerializableGraph = serde_json::from_str(json).map_err(deserialize_error)?;
        snapshot.into_graph()
    }
}

fn deserialize_error(err: serde_json::Error) -> SodError {
    SodError::Serde(ErrorInfo::new("deserialize-json", err.to_string()))
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph {
    #[serde(default)]
    nodes: Vec<u64>,
    edges: BTreeMap<u64, Vec<u64>>,
}

impl SerializableGraph {
    fn from_graph(graph: &HypergraphImpl) -> Self {
        let nodes = graph.nodes().map(|node| node.as_raw()).collect();
        let edges = graph
            .edge_members()
            .map(|(id, members)| {
                (
                    id.as_raw(),
                    members.iter().map(|node| node.as_raw()).collect(),
                )
            })
            .collect();
        Self { nodes, edges }
    }

    fn into_graph(self) -> Result<HypergraphImpl, SodError> {
        let graph = HypergraphImpl::from_edge_map(self.edges.into_iter().map(|(id, members)| {
            (
                EdgeId::from_raw(id),
                members.into_iter().map(NodeId::from_raw),
            )
        }))?;
        Ok(graph.with_nodes(self.nodes.into_iter().map(NodeId::from_raw)))
    }
}
