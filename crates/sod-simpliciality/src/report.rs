use serde::{Deserialize, Serialize};
use sod_core::{Hypergraph, SodError};
use sod_graph::HypergraphImpl;

use crate::edit::{edit_counts, EditCounts};
use crate::face_edit::face_edit_simpliciality;
use crate::fraction::{count_simplices, potential_simplices};
use crate::options::SimplicialityOptions;

/// All three global metrics together with the counts behind them.
///
/// Undefined metrics are `NaN` and serialise as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplicialityReport {
    /// Options the report was computed with.
    pub options: SimplicialityOptions,
    /// Number of nodes in the hypergraph.
    pub num_nodes: usize,
    /// Number of edges in the hypergraph.
    pub num_edges: usize,
    /// Candidate edges that are simplices.
    pub simplices: usize,
    /// Candidate edges evaluated by the simplicial fraction.
    pub potential_simplices: usize,
    /// Counts behind the edit distance.
    pub edit: EditCounts,
    /// `simplices / potential_simplices`.
    #[serde(deserialize_with = "nan_or_f64")]
    pub simplicial_fraction: f64,
    /// One minus the normalised simplicial edit distance.
    #[serde(deserialize_with = "nan_or_f64")]
    pub edit_simpliciality: f64,
    /// One minus the normalised mean face edit distance.
    #[serde(deserialize_with = "nan_or_f64")]
    pub face_edit_simpliciality: f64,
}

impl SimplicialityReport {
    /// Evaluates every metric on `graph`.
    pub fn compute(graph: &HypergraphImpl, opts: &SimplicialityOptions) -> Result<Self, SodError> {
        let simplices = count_simplices(graph, opts)?;
        let potential = potential_simplices(graph, opts)?;
        let simplicial_fraction = if potential == 0 {
            f64::NAN
        } else {
            simplices as f64 / potential as f64
        };
        let edit = edit_counts(graph, opts)?;
        Ok(Self {
            options: *opts,
            num_nodes: graph.num_nodes(),
            num_edges: graph.num_edges(),
            simplices,
            potential_simplices: potential,
            edit,
            simplicial_fraction,
            edit_simpliciality: 1.0 - edit.normalized(),
            face_edit_simpliciality: face_edit_simpliciality(graph, opts)?,
        })
    }
}

fn nan_or_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
