#![deny(missing_docs)]

//! Immutable undirected hypergraph snapshots implementing the `sod-core`
//! contract, plus the rewiring primitives behind the configuration null model.

mod flags;
mod hash;
mod hypergraph;
mod ids;
mod null_model;
mod rewire;
mod serialization;

pub use flags::CleanupOptions;
pub use hash::canonical_hash;
pub use hypergraph::HypergraphImpl;
pub use null_model::{ConfigurationModel, NullModel, SwapStats};
pub use rewire::{double_edge_swap, double_edge_swap_dry_run, SwapDryRun};

/// Re-export serialization helpers for downstream crates.
pub use serialization::{graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json};
