use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use sod_core::errors::{ErrorInfo, SodError};
use sod_core::Hypergraph;
use sod_graph::{graph_from_json, HypergraphImpl};
use tracing::info;

use crate::config::RunConfig;

/// Loads a snapshot or plain edge-list JSON file.
pub fn load_graph(path: &Path) -> Result<HypergraphImpl, SodError> {
    let json = fs::read_to_string(path).map_err(|err| {
        SodError::Io(
            ErrorInfo::new("graph-read", err.to_string()).with_context("path", path.display()),
        )
    })?;
    graph_from_json(&json).map_err(|err| err.with_context("path", path.display()))
}

/// Applies the order truncation and cleanup requested by `config`.
pub fn prepare_graph(graph: HypergraphImpl, config: &RunConfig) -> HypergraphImpl {
    let graph = match config.max_order {
        Some(max_order) => graph.truncate_order(max_order),
        None => graph,
    };
    let graph = match &config.cleanup {
        Some(cleanup) => graph.cleanup(cleanup),
        None => graph,
    };
    info!(
        nodes = graph.num_nodes(),
        edges = graph.num_edges(),
        "hypergraph ready"
    );
    graph
}

/// Writes pretty JSON to `path`, or to stdout when no path is given.
pub fn write_json<T: Serialize>(path: Option<&Path>, value: &T) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(value)?;
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json)?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}
