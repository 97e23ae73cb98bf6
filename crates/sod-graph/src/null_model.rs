use rand::seq::{index, SliceRandom};
use serde::{Deserialize, Serialize};
use sod_core::errors::{ErrorInfo, SodError};
use sod_core::rng::RngHandle;
use sod_core::{EdgeId, Hypergraph, NodeId};
use tracing::{debug, info};

use crate::hypergraph::HypergraphImpl;
use crate::rewire::{is_soft_error, swap_in_place};

/// A randomized producer of alternative hypergraphs.
///
/// Randomness always comes from the caller's handle so realizations are
/// reproducible from a seed.
pub trait NullModel {
    /// Short stable name used to key persisted results.
    fn name(&self) -> &'static str;

    /// Draws one realization derived from `graph`.
    fn sample(&self, graph: &HypergraphImpl, rng: &mut RngHandle)
        -> Result<HypergraphImpl, SodError>;
}

/// Bookkeeping for a configuration-model run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapStats {
    /// Number of swap proposals drawn.
    pub proposed: usize,
    /// Proposals that rewired the graph.
    pub accepted: usize,
    /// Proposals skipped because they would have produced an invalid graph.
    pub rejected: usize,
}

/// Degree- and size-preserving configuration model driven by double edge swaps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationModel {
    /// Number of proposed swaps; defaults to ten per edge.
    #[serde(default)]
    pub num_swaps: Option<usize>,
}

impl ConfigurationModel {
    /// Configuration model proposing exactly `num_swaps` swaps.
    pub fn with_swaps(num_swaps: usize) -> Self {
        Self {
            num_swaps: Some(num_swaps),
        }
    }

    /// Draws a realization and reports how many proposals were accepted.
    pub fn sample_with_stats(
        &self,
        graph: &HypergraphImpl,
        rng: &mut RngHandle,
    ) -> Result<(HypergraphImpl, SwapStats), SodError> {
        let edges: Vec<EdgeId> = graph.edges().collect();
        if edges.len() < 2 {
            return Err(SodError::Input(
                ErrorInfo::new(
                    "too-few-edges",
                    "configuration model requires at least two edges",
                )
                .with_context("edges", edges.len()),
            ));
        }
        let num_swaps = self.num_swaps.unwrap_or(10 * edges.len());
        let mut shuffled = graph.clone();
        let mut stats = SwapStats::default();

        for _ in 0..num_swaps {
            stats.proposed += 1;
            let picked = index::sample(rng, edges.len(), 2);
            let (edge_a, edge_b) = (edges[picked.index(0)], edges[picked.index(1)]);
            let node_a = *pick_member(&shuffled, edge_a, rng)?;
            let node_b = *pick_member(&shuffled, edge_b, rng)?;
            match swap_in_place(&mut shuffled, node_a, node_b, edge_a, edge_b) {
                Ok(()) => stats.accepted += 1,
                Err(err) if is_soft_error(&err) => {
                    debug!(code = %err.info().code, "skipping invalid swap proposal");
                    stats.rejected += 1;
                }
                Err(err) => return Err(err),
            }
        }

        info!(
            proposed = stats.proposed,
            accepted = stats.accepted,
            rejected = stats.rejected,
            "configuration model realization complete"
        );
        Ok((shuffled, stats))
    }
}

impl NullModel for ConfigurationModel {
    fn name(&self) -> &'static str {
        "cm"
    }

    fn sample(
        &self,
        graph: &HypergraphImpl,
        rng: &mut RngHandle,
    ) -> Result<HypergraphImpl, SodError> {
        self.sample_with_stats(graph, rng).map(|(graph, _)| graph)
    }
}

fn pick_member<'a>(
    graph: &'a HypergraphImpl,
    edge: EdgeId,
    rng: &mut RngHandle,
) -> Result<&'a NodeId, SodError> {
    graph
        .members(edge)?
        .choose(rng)
        .ok_or_else(|| SodError::graph("empty-edge", "edge has no members").with_context("edge", edge))
}
