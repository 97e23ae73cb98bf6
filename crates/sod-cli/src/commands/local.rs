use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use sod_core::{NodeId, RunProvenance, SchemaVersion};
use sod_simpliciality::{SimplicialMetric, SimplicialityOptions};

use super::{provenance, schema_version, GraphArgs};
use crate::io::write_json;

#[derive(Args, Debug, Clone)]
pub struct LocalArgs {
    #[command(flatten)]
    pub graph: GraphArgs,
    /// Metric to evaluate: sf, es or fes.
    #[arg(long, default_value = "es")]
    pub metric: SimplicialMetric,
    /// Restrict scoring to these nodes.
    #[arg(long = "node", value_name = "ID")]
    pub nodes: Vec<u64>,
    /// Output file; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct LocalOutput {
    schema_version: SchemaVersion,
    provenance: RunProvenance,
    metric: SimplicialMetric,
    options: SimplicialityOptions,
    /// Undefined scores are written as `null`.
    scores: BTreeMap<NodeId, f64>,
}

pub fn run(args: &LocalArgs) -> Result<(), Box<dyn Error>> {
    let (graph, config) = args.graph.resolve()?;
    let subset: Option<BTreeSet<NodeId>> = (!args.nodes.is_empty())
        .then(|| args.nodes.iter().copied().map(NodeId::from_raw).collect());
    let scores = args.metric.local(&graph, subset.as_ref(), &config.options)?;
    let output = LocalOutput {
        schema_version: schema_version(),
        provenance: provenance(&graph),
        metric: args.metric,
        options: config.options,
        scores,
    };
    write_json(args.out.as_deref(), &output)
}
