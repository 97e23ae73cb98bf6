#![deny(missing_docs)]
//! Core identifiers, errors and the read-only hypergraph contract shared by
//! the simpliciality crates.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod provenance;
pub mod rng;

pub use errors::{ErrorInfo, SodError};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RngHandle};

/// Identifier for a node within a [`Hypergraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub const fn as_raw(&self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a hyperedge within a [`Hypergraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Creates a new identifier from its raw integer representation.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub const fn as_raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only contract for undirected hypergraphs.
///
/// Only borrowed views are handed out, so a snapshot passed to a metric is
/// never mutated.
pub trait Hypergraph: Send + Sync {
    /// Returns an iterator over all node identifiers in ascending order.
    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = NodeId> + '_>;

    /// Returns an iterator over all edge identifiers in ascending order.
    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = EdgeId> + '_>;

    /// Returns the sorted, duplicate-free members of a hyperedge.
    fn members(&self, edge: EdgeId) -> Result<&[NodeId], SodError>;

    /// Returns the edges containing a node.
    fn memberships(&self, node: NodeId) -> Result<&BTreeSet<EdgeId>, SodError>;

    /// Number of nodes.
    fn num_nodes(&self) -> usize {
        self.nodes().len()
    }

    /// Number of edges.
    fn num_edges(&self) -> usize {
        self.edges().len()
    }

    /// Size of a hyperedge.
    fn edge_size(&self, edge: EdgeId) -> Result<usize, SodError> {
        Ok(self.members(edge)?.len())
    }

    /// Nodes sharing at least one edge with `node`, excluding `node` itself.
    fn neighbors(&self, node: NodeId) -> Result<BTreeSet<NodeId>, SodError> {
        let mut neighbors = BTreeSet::new();
        for edge in self.memberships(node)? {
            neighbors.extend(self.members(*edge)?.iter().copied());
        }
        neighbors.remove(&node);
        Ok(neighbors)
    }
}
