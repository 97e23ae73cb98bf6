pub mod assortativity;
pub mod local;
pub mod measure;
pub mod null_model;

use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use sod_core::{RunProvenance, SchemaVersion};
use sod_graph::{canonical_hash, CleanupOptions, HypergraphImpl};

use crate::config::RunConfig;
use crate::io::{load_graph, prepare_graph};

/// Input and filtering flags shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Hypergraph JSON: a snapshot or a plain list of edges.
    #[arg(long)]
    pub input: PathBuf,
    /// Optional YAML run configuration; flags below override it.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Smallest edge size taken into account.
    #[arg(long)]
    pub min_size: Option<usize>,
    /// Also evaluate edges of exactly `min_size` members.
    #[arg(long)]
    pub include_min_size: bool,
    /// Drop edges of order above this value.
    #[arg(long)]
    pub max_order: Option<usize>,
    /// Apply the default cleanup before measuring.
    #[arg(long)]
    pub cleanup: bool,
}

impl GraphArgs {
    /// Loads the configuration, applies command line overrides and loads
    /// the prepared hypergraph.
    pub fn resolve(&self) -> Result<(HypergraphImpl, RunConfig), Box<dyn Error>> {
        let mut config = RunConfig::load_or_default(self.config.as_deref())?;
        if let Some(min_size) = self.min_size {
            config.options.min_size = min_size;
        }
        if self.include_min_size {
            config.options.exclude_min_size = false;
        }
        if self.max_order.is_some() {
            config.max_order = self.max_order;
        }
        if self.cleanup && config.cleanup.is_none() {
            config.cleanup = Some(CleanupOptions::default());
        }
        config.options.validate()?;
        let graph = prepare_graph(load_graph(&self.input)?, &config);
        Ok((graph, config))
    }
}

/// Provenance record for a report computed on `graph`.
pub(crate) fn provenance(graph: &HypergraphImpl) -> RunProvenance {
    RunProvenance::for_graph(canonical_hash(graph))
        .with_tool("sod", env!("CARGO_PKG_VERSION"))
}

/// Schema version of every JSON document the CLI writes.
pub(crate) fn schema_version() -> SchemaVersion {
    SchemaVersion::default()
}
