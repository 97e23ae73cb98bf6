use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use serde::{Deserialize, Serialize};
use sod_core::{RunProvenance, SchemaVersion};
use sod_simpliciality::SimplicialityReport;
use tracing::info;

use super::{provenance, schema_version, GraphArgs};
use crate::io::write_json;

#[derive(Args, Debug, Clone)]
pub struct MeasureArgs {
    #[command(flatten)]
    pub graph: GraphArgs,
    /// Output file; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Document written by `sod measure`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureOutput {
    pub schema_version: SchemaVersion,
    pub provenance: RunProvenance,
    pub report: SimplicialityReport,
}

pub fn run(args: &MeasureArgs) -> Result<(), Box<dyn Error>> {
    let (graph, config) = args.graph.resolve()?;
    let report = SimplicialityReport::compute(&graph, &config.options)?;
    info!(
        simplicial_fraction = report.simplicial_fraction,
        edit_simpliciality = report.edit_simpliciality,
        face_edit_simpliciality = report.face_edit_simpliciality,
        "measured hypergraph"
    );
    let output = MeasureOutput {
        schema_version: schema_version(),
        provenance: provenance(&graph),
        report,
    };
    write_json(args.out.as_deref(), &output)
}
