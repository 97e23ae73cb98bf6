use serde::{Deserialize, Serialize};

/// Options controlling [`HypergraphImpl::cleanup`](crate::HypergraphImpl::cleanup).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanupOptions {
    /// Keep nodes that belong to no edge.
    pub isolates: bool,
    /// Keep edges of size one.
    pub singletons: bool,
    /// Keep edges whose member set duplicates an edge with a smaller id.
    pub multiedges: bool,
    /// Restrict the result to its largest connected component.
    pub connected: bool,
    /// Relabel nodes and edges to consecutive identifiers starting at zero.
    pub relabel: bool,
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self {
            isolates: false,
            singletons: false,
            multiedges: false,
            connected: true,
            relabel: true,
        }
    }
}

impl CleanupOptions {
    /// Default cleanup that keeps singleton edges.
    pub fn keep_singletons() -> Self {
        Self {
            singletons: true,
            ..Self::default()
        }
    }
}
