use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sod_core::{NodeId, SodError};
use sod_graph::HypergraphImpl;

use crate::edit::edit_simpliciality;
use crate::face_edit::face_edit_simpliciality;
use crate::fraction::simplicial_fraction;
use crate::local::{
    local_edit_simpliciality, local_face_edit_simpliciality, local_simplicial_fraction,
};
use crate::options::SimplicialityOptions;

/// The simpliciality measures available to local scoring and assortativity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SimplicialMetric {
    /// Share of candidate edges that are simplices.
    #[serde(rename = "sf")]
    SimplicialFraction,
    /// One minus the normalised simplicial edit distance.
    #[serde(rename = "es")]
    EditSimpliciality,
    /// One minus the normalised mean face edit distance.
    #[serde(rename = "fes")]
    FaceEditSimpliciality,
}

impl SimplicialMetric {
    /// Every metric, in a stable order.
    pub const ALL: [SimplicialMetric; 3] = [
        SimplicialMetric::SimplicialFraction,
        SimplicialMetric::EditSimpliciality,
        SimplicialMetric::FaceEditSimpliciality,
    ];

    /// Short name used on the command line and in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SimplicialMetric::SimplicialFraction => "sf",
            SimplicialMetric::EditSimpliciality => "es",
            SimplicialMetric::FaceEditSimpliciality => "fes",
        }
    }

    /// Evaluates the metric on the whole hypergraph.
    pub fn evaluate(
        &self,
        graph: &HypergraphImpl,
        opts: &SimplicialityOptions,
    ) -> Result<f64, SodError> {
        match self {
            SimplicialMetric::SimplicialFraction => simplicial_fraction(graph, opts),
            SimplicialMetric::EditSimpliciality => edit_simpliciality(graph, opts),
            SimplicialMetric::FaceEditSimpliciality => face_edit_simpliciality(graph, opts),
        }
    }

    /// Evaluates the metric on every node's neighbourhood.
    pub fn local(
        &self,
        graph: &HypergraphImpl,
        nodes: Option<&BTreeSet<NodeId>>,
        opts: &SimplicialityOptions,
    ) -> Result<BTreeMap<NodeId, f64>, SodError> {
        match self {
            SimplicialMetric::SimplicialFraction => local_simplicial_fraction(graph, nodes, opts),
            SimplicialMetric::EditSimpliciality => local_edit_simpliciality(graph, nodes, opts),
            SimplicialMetric::FaceEditSimpliciality => {
                local_face_edit_simpliciality(graph, nodes, opts)
            }
        }
    }
}

impl fmt::Display for SimplicialMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimplicialMetric {
    type Err = SodError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "sf" | "simplicial-fraction" => Ok(SimplicialMetric::SimplicialFraction),
            "es" | "edit-simpliciality" => Ok(SimplicialMetric::EditSimpliciality),
            "fes" | "face-edit-simpliciality" => Ok(SimplicialMetric::FaceEditSimpliciality),
            other => Err(SodError::input("unknown-metric", "unrecognised simpliciality metric")
                .with_context("metric", other)
                .with_hint("expected one of: sf, es, fes")),
        }
    }
}
