use std::collections::BTreeSet;

use sod_core::{EdgeId, Hypergraph, NodeId};
use sod_graph::{CleanupOptions, HypergraphImpl};

fn nodes(raw: &[u64]) -> BTreeSet<NodeId> {
    raw.iter().copied().map(NodeId::from_raw).collect()
}

fn members(graph: &HypergraphImpl, edge: u64) -> Vec<u64> {
    graph
        .members(EdgeId::from_raw(edge))
        .unwrap()
        .iter()
        .map(|node| node.as_raw())
        .collect()
}

#[test]
fn members_are_canonicalized() {
    let graph = HypergraphImpl::from_edge_lists([vec![3u64, 1, 2, 1], vec![5, 4]]).unwrap();
    assert_eq!(members(&graph, 0), vec![1, 2, 3]);
    assert_eq!(graph.num_nodes(), 5);
    assert_eq!(graph.num_edges(), 2);
    assert_eq!(graph.edge_size(EdgeId::from_raw(1)).unwrap(), 2);
}

#[test]
fn empty_edges_and_unknown_ids_are_rejected() {
    let err = HypergraphImpl::from_edge_lists([Vec::<u64>::new()]).unwrap_err();
    assert_eq!(err.info().code, "empty-edge");

    let graph = HypergraphImpl::from_edge_lists([vec![1u64, 2]]).unwrap();
    let err = graph.members(EdgeId::from_raw(9)).unwrap_err();
    assert_eq!(err.info().code, "unknown-edge");
    let err = graph.neighbors(NodeId::from_raw(9)).unwrap_err();
    assert_eq!(err.info().code, "unknown-node");
}

#[test]
fn neighbors_follow_cooccurrence() {
    let graph =
        HypergraphImpl::from_edge_lists([vec![1u64, 2, 3], vec![2u64, 3, 4, 5], vec![5u64, 6, 7]])
            .unwrap()
            .with_nodes([NodeId::from_raw(10)]);
    assert_eq!(graph.neighbors(NodeId::from_raw(2)).unwrap(), nodes(&[1, 3, 4, 5]));
    assert_eq!(graph.neighbors(NodeId::from_raw(5)).unwrap(), nodes(&[2, 3, 4, 6, 7]));
    assert!(graph.neighbors(NodeId::from_raw(10)).unwrap().is_empty());
    assert_eq!(graph.degree(NodeId::from_raw(5)).unwrap(), 2);
}

#[test]
fn maximal_edges_skip_subsets_and_duplicates() {
    let graph = HypergraphImpl::from_edge_lists([
        vec![1u64, 2, 3],
        vec![2, 3, 4, 5],
        vec![5, 6, 7],
        vec![5, 6],
        vec![7, 6, 5],
    ])
    .unwrap();
    let maximal: Vec<u64> = graph.maximal_edges().iter().map(|e| e.as_raw()).collect();
    assert_eq!(maximal, vec![0, 1, 2]);
}

#[test]
fn size_filter_keeps_edge_order() {
    let graph =
        HypergraphImpl::from_edge_lists([vec![1u64], vec![1, 2], vec![1, 2, 3], vec![4]]).unwrap();
    let filtered = graph.edges_with_min_size(2);
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[1].len(), 3);
    assert_eq!(graph.count_edges_with_min_size(1), 4);
}

#[test]
fn subhypergraph_is_induced() {
    let graph =
        HypergraphImpl::from_edge_lists([vec![1u64, 2, 3], vec![2, 3, 4, 5], vec![5, 6, 7], vec![5, 6]])
            .unwrap();
    let sub = graph.subhypergraph(&nodes(&[5, 6, 7, 99]));
    assert_eq!(sub.nodes().collect::<BTreeSet<_>>(), nodes(&[5, 6, 7]));
    let kept: Vec<u64> = sub.edges().map(|e| e.as_raw()).collect();
    assert_eq!(kept, vec![2, 3]);
    assert_eq!(sub.degree(NodeId::from_raw(5)).unwrap(), 2);
}

#[test]
fn edge_multiplicity_counts_shared_edges() {
    let graph =
        HypergraphImpl::from_edge_lists([vec![1u64, 2], vec![1, 2, 3], vec![2, 3]]).unwrap();
    assert_eq!(graph.edge_multiplicity(NodeId::from_raw(1), NodeId::from_raw(2)).unwrap(), 2);
    assert_eq!(graph.edge_multiplicity(NodeId::from_raw(1), NodeId::from_raw(3)).unwrap(), 1);
}

#[test]
fn truncate_order_drops_large_edges() {
    let graph =
        HypergraphImpl::from_edge_lists([vec![1u64, 2], vec![1, 2, 3], vec![1, 2, 3, 4]]).unwrap();
    let truncated = graph.truncate_order(2);
    assert_eq!(truncated.num_edges(), 2);
    assert_eq!(truncated.num_nodes(), 4);
}

#[test]
fn cleanup_removes_noise_and_relabels() {
    let graph = HypergraphImpl::from_edge_lists([
        vec![10u64, 20],
        vec![20, 10],
        vec![30],
        vec![20, 30, 40],
        vec![50, 60],
    ])
    .unwrap()
    .with_nodes([NodeId::from_raw(70)]);

    let cleaned = graph.cleanup(&CleanupOptions::default());
    assert_eq!(cleaned.num_edges(), 2);
    assert_eq!(cleaned.num_nodes(), 4);
    assert_eq!(members(&cleaned, 0), vec![0, 1]);
    assert_eq!(members(&cleaned, 1), vec![1, 2, 3]);

    let kept = graph.cleanup(&CleanupOptions::keep_singletons());
    assert_eq!(kept.num_edges(), 3);

    let everything = graph.cleanup(&CleanupOptions {
        isolates: true,
        singletons: true,
        multiedges: true,
        connected: false,
        relabel: false,
    });
    assert_eq!(everything, graph);
}
