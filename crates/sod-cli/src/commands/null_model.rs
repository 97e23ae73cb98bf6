use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use serde::{Deserialize, Serialize};
use sod_core::{derive_substream_seed, Hypergraph, RngHandle, RunProvenance, SchemaVersion};
use sod_graph::{ConfigurationModel, NullModel};
use sod_simpliciality::SimplicialityReport;
use tracing::info;

use super::{provenance, schema_version, GraphArgs};
use crate::io::write_json;

#[derive(Args, Debug, Clone)]
pub struct NullModelArgs {
    #[command(flatten)]
    pub graph: GraphArgs,
    /// Realizations per swap count.
    #[arg(long)]
    pub realizations: Option<usize>,
    /// Master seed for the sweep.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Swap counts to sweep; repeat the flag for several values.
    #[arg(long = "num-swaps", value_name = "N")]
    pub num_swaps: Vec<usize>,
    /// Output file; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Metrics of one configuration-model realization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Realization {
    pub num_swaps: usize,
    pub realization: usize,
    pub accepted_swaps: usize,
    pub report: SimplicialityReport,
}

/// Document written by `sod null-model`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NullModelOutput {
    pub schema_version: SchemaVersion,
    pub provenance: RunProvenance,
    pub model: String,
    pub observed: SimplicialityReport,
    pub realizations: Vec<Realization>,
}

pub fn run(args: &NullModelArgs) -> Result<(), Box<dyn Error>> {
    let (graph, mut config) = args.graph.resolve()?;
    if let Some(realizations) = args.realizations {
        config.null_model.realizations = realizations;
    }
    if let Some(seed) = args.seed {
        config.null_model.seed = seed;
    }
    if !args.num_swaps.is_empty() {
        config.null_model.num_swaps = args.num_swaps.clone();
    }
    let sweep = if config.null_model.num_swaps.is_empty() {
        vec![10 * graph.num_edges()]
    } else {
        config.null_model.num_swaps.clone()
    };

    let observed = SimplicialityReport::compute(&graph, &config.options)?;
    let mut realizations = Vec::with_capacity(sweep.len() * config.null_model.realizations);
    for &num_swaps in &sweep {
        let model = ConfigurationModel::with_swaps(num_swaps);
        for realization in 0..config.null_model.realizations {
            let mut rng = realization_rng(config.null_model.seed, num_swaps, realization);
            let (sample, stats) = model.sample_with_stats(&graph, &mut rng)?;
            realizations.push(Realization {
                num_swaps,
                realization,
                accepted_swaps: stats.accepted,
                report: SimplicialityReport::compute(&sample, &config.options)?,
            });
        }
        info!(
            model = model.name(),
            num_swaps,
            realizations = config.null_model.realizations,
            "null-model sweep step complete"
        );
    }

    let output = NullModelOutput {
        schema_version: schema_version(),
        provenance: provenance(&graph).with_seed(config.null_model.seed),
        model: ConfigurationModel::default().name().to_string(),
        observed,
        realizations,
    };
    write_json(args.out.as_deref(), &output)
}

/// Stream for one `(num_swaps, realization)` cell, independent of which other
/// swap counts are part of the sweep.
fn realization_rng(seed: u64, num_swaps: usize, realization: usize) -> RngHandle {
    RngHandle::substream(
        derive_substream_seed(seed, num_swaps as u64),
        realization as u64,
    )
}
