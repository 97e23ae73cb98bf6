use std::collections::BTreeSet;

use proptest::prelude::*;
use sod_core::{Hypergraph, NodeId};
use sod_graph::HypergraphImpl;
use sod_simpliciality::{
    count_missing_subfaces, count_present_subfaces, edit_counts, edit_simpliciality,
    face_edit_simpliciality, find_missing_subfaces, max_number_of_subfaces, simplicial_fraction,
    subsets, SimplicialityOptions, Trie,
};

fn edge_lists() -> impl Strategy<Value = Vec<BTreeSet<u64>>> {
    prop::collection::vec(prop::collection::btree_set(0u64..8, 1..6), 1..8)
}

fn to_nodes(edge: &BTreeSet<u64>) -> Vec<NodeId> {
    edge.iter().copied().map(NodeId::from_raw).collect()
}

proptest! {
    #[test]
    fn present_and_missing_partition_the_subfaces(
        edges in edge_lists(),
        probe in prop::collection::btree_set(0u64..8, 1..7),
        min_size in 1usize..4,
    ) {
        let trie = Trie::build(edges.iter().map(to_nodes));
        let probe = to_nodes(&probe);
        let present = count_present_subfaces(&trie, &probe, min_size);
        let missing = find_missing_subfaces(&trie, &probe, min_size);
        let bound = max_number_of_subfaces(min_size, probe.len()).unwrap();
        prop_assert_eq!(present + missing.len() as u64, bound);
        prop_assert_eq!(
            count_missing_subfaces(&trie, &probe, min_size).unwrap(),
            missing.len() as u64
        );
    }

    #[test]
    fn trie_membership_ignores_insertion_order(edges in edge_lists()) {
        let forward = Trie::build(edges.iter().map(to_nodes));
        let backward = Trie::build(edges.iter().rev().map(to_nodes));
        prop_assert_eq!(forward.len(), backward.len());
        let universe: Vec<NodeId> = (0u64..8).map(NodeId::from_raw).collect();
        for query in subsets(&universe, 1, Some(3)) {
            prop_assert_eq!(forward.contains_sorted(&query), backward.contains_sorted(&query));
        }
        for edge in &edges {
            prop_assert!(forward.contains(edge.iter().copied()));
        }
    }

    #[test]
    fn simplicial_complexes_score_one(
        facets in prop::collection::vec(prop::collection::btree_set(0u64..8, 3..5), 1..4),
        min_size in 1usize..3,
    ) {
        let mut faces: BTreeSet<Vec<NodeId>> = BTreeSet::new();
        for facet in &facets {
            faces.extend(subsets(&to_nodes(facet), 1, None));
        }
        let complex = HypergraphImpl::from_edge_lists(faces).unwrap();
        let opts = SimplicialityOptions::new(min_size, true);
        prop_assert_eq!(simplicial_fraction(&complex, &opts).unwrap(), 1.0);
        prop_assert_eq!(edit_simpliciality(&complex, &opts).unwrap(), 1.0);
        prop_assert_eq!(face_edit_simpliciality(&complex, &opts).unwrap(), 1.0);
    }

    #[test]
    fn edit_counts_match_the_union_of_missing_faces(
        edges in edge_lists(),
        min_size in 1usize..3,
        exclude_min_size in any::<bool>(),
    ) {
        let graph = HypergraphImpl::from_edge_lists(edges).unwrap();
        let opts = SimplicialityOptions::new(min_size, exclude_min_size);
        let trie = Trie::build(
            graph
                .edges_with_min_size(min_size)
                .into_iter()
                .map(|members| members.iter().copied()),
        );
        let mut union = BTreeSet::new();
        for edge in graph.maximal_edges() {
            let members = graph.members(edge).unwrap();
            if members.len() >= opts.threshold() {
                union.extend(find_missing_subfaces(&trie, members, min_size));
            }
        }
        let counts = edit_counts(&graph, &opts).unwrap();
        prop_assert_eq!(counts.missing, union.len() as u64);
        let distance = counts.normalized();
        prop_assert!(distance.is_nan() || (0.0..=1.0).contains(&distance));
    }
}
