use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use sod_core::{RunProvenance, SchemaVersion};
use sod_simpliciality::{simplicial_assortativity, SimplicialMetric, SimplicialityOptions};
use tracing::info;

use super::{provenance, schema_version, GraphArgs};
use crate::io::write_json;

#[derive(Args, Debug, Clone)]
pub struct AssortativityArgs {
    #[command(flatten)]
    pub graph: GraphArgs,
    /// Metric to correlate: sf, es or fes.
    #[arg(long, default_value = "es")]
    pub metric: SimplicialMetric,
    /// Count a node pair once per shared edge.
    #[arg(long)]
    pub weighted: bool,
    /// Output file; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct AssortativityOutput {
    schema_version: SchemaVersion,
    provenance: RunProvenance,
    metric: SimplicialMetric,
    options: SimplicialityOptions,
    weighted: bool,
    assortativity: f64,
}

pub fn run(args: &AssortativityArgs) -> Result<(), Box<dyn Error>> {
    let (graph, config) = args.graph.resolve()?;
    let assortativity =
        simplicial_assortativity(&graph, args.metric, &config.options, args.weighted)?;
    info!(metric = %args.metric, assortativity, "simplicial assortativity");
    let output = AssortativityOutput {
        schema_version: schema_version(),
        provenance: provenance(&graph),
        metric: args.metric,
        options: config.options,
        weighted: args.weighted,
        assortativity,
    };
    write_json(args.out.as_deref(), &output)
}
