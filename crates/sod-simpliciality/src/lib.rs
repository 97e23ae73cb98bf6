#![deny(missing_docs)]
//! Simpliciality metrics for hypergraphs.
//!
//! Every metric builds a [`Trie`] over the relevant edges, then counts the
//! subfaces of candidate edges that are present or missing. Results that are
//! structurally undefined (no candidate edges, no maximal edges) are `NaN`
//! rather than errors.

mod assortativity;
mod bound;
mod edit;
mod face_edit;
mod fraction;
mod local;
mod metric;
mod options;
mod report;
mod subfaces;
mod subsets;
mod trie;

pub use assortativity::{pearson_correlation, simplicial_assortativity};
pub use bound::max_number_of_subfaces;
pub use edit::{edit_counts, edit_simpliciality, simplicial_edit_distance, EditCounts};
pub use face_edit::{face_edit_simpliciality, mean_face_edit_distance};
pub use fraction::{count_simplices, potential_simplices, simplicial_fraction};
pub use local::{local_edit_simpliciality, local_face_edit_simpliciality, local_simplicial_fraction};
pub use metric::SimplicialMetric;
pub use options::SimplicialityOptions;
pub use report::SimplicialityReport;
pub use subfaces::{
    count_missing_subfaces, count_present_subfaces, find_missing_subfaces, is_simplex, Face,
};
pub use subsets::subsets;
pub use trie::Trie;
