#![allow(dead_code)]

use sod_core::NodeId;
use sod_graph::HypergraphImpl;
use sod_simpliciality::{SimplicialityOptions, Trie};

pub fn graph(edges: &[&[u64]]) -> HypergraphImpl {
    HypergraphImpl::from_edge_lists(edges.iter().map(|edge| edge.iter().copied())).unwrap()
}

pub fn nodes(raw: &[u64]) -> Vec<NodeId> {
    raw.iter().copied().map(NodeId::from_raw).collect()
}

pub fn trie_of(graph: &HypergraphImpl) -> Trie {
    Trie::build(graph.edge_members().map(|(_, members)| members.iter().copied()))
}

pub fn opts(min_size: usize, exclude_min_size: bool) -> SimplicialityOptions {
    SimplicialityOptions::new(min_size, exclude_min_size)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {expected}, got {actual}"
    );
}

/// Complete 2-simplex on {1, 2, 3} with every face present.
pub fn sc1_with_singletons() -> HypergraphImpl {
    graph(&[&[1], &[2], &[3], &[1, 2], &[1, 3], &[2, 3], &[1, 2, 3]])
}

pub fn h_missing_one_singleton() -> HypergraphImpl {
    graph(&[&[1], &[2], &[1, 2], &[1, 3], &[2, 3], &[1, 2, 3]])
}

pub fn h_missing_one_link() -> HypergraphImpl {
    graph(&[&[1], &[2], &[3], &[1, 3], &[2, 3], &[1, 2, 3]])
}

pub fn h_links_and_triangles() -> HypergraphImpl {
    graph(&[&[1, 3], &[2, 3], &[1, 2, 3]])
}

pub fn h_links_and_triangles2() -> HypergraphImpl {
    graph(&[&[1, 3], &[2, 3], &[1, 2, 3], &[1, 4], &[2, 3, 4], &[2, 4]])
}

pub fn h1() -> HypergraphImpl {
    graph(&[&[1, 2, 3], &[2, 3, 4, 5], &[5, 6, 7], &[5, 6]])
}
