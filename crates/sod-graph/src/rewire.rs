use sod_core::errors::{ErrorInfo, SodError};
use sod_core::{EdgeId, Hypergraph, NodeId};

use crate::hash::canonical_hash;
use crate::hypergraph::HypergraphImpl;
use crate::ids::canonicalize_nodes;

/// Outcome of validating a swap without producing a new graph.
#[derive(Debug)]
pub enum SwapDryRun {
    /// The swap would succeed.
    Valid {
        /// Canonical hash of the graph the swap would produce.
        hash_preview: String,
    },
    /// The swap would fail with the provided error.
    Invalid(SodError),
}

/// Exchanges `node_a` (a member of `edge_a`) with `node_b` (a member of
/// `edge_b`), returning the rewired snapshot.
///
/// Node degrees and edge sizes are preserved. The swap is rejected when a
/// node is not a member of its edge, when a node already belongs to the
/// other edge, or when either rewired edge would duplicate an existing one.
pub fn double_edge_swap(
    graph: &HypergraphImpl,
    node_a: NodeId,
    node_b: NodeId,
    edge_a: EdgeId,
    edge_b: EdgeId,
) -> Result<HypergraphImpl, SodError> {
    let mut rewired = graph.clone();
    swap_in_place(&mut rewired, node_a, node_b, edge_a, edge_b)?;
    Ok(rewired)
}

/// Dry-run validator for [`double_edge_swap`].
pub fn double_edge_swap_dry_run(
    graph: &HypergraphImpl,
    node_a: NodeId,
    node_b: NodeId,
    edge_a: EdgeId,
    edge_b: EdgeId,
) -> SwapDryRun {
    match double_edge_swap(graph, node_a, node_b, edge_a, edge_b) {
        Ok(trial) => SwapDryRun::Valid {
            hash_preview: canonical_hash(&trial),
        },
        Err(err) => SwapDryRun::Invalid(err),
    }
}

pub(crate) fn swap_in_place(
    graph: &mut HypergraphImpl,
    node_a: NodeId,
    node_b: NodeId,
    edge_a: EdgeId,
    edge_b: EdgeId,
) -> Result<(), SodError> {
    if edge_a == edge_b {
        return Err(swap_error("same-edge", "swap requires two distinct edges")
            .with_context("edge", edge_a));
    }
    let members_a = graph.members(edge_a)?.to_vec();
    let members_b = graph.members(edge_b)?.to_vec();
    ensure_member(&members_a, node_a, edge_a)?;
    ensure_member(&members_b, node_b, edge_b)?;
    if members_b.binary_search(&node_a).is_ok() || members_a.binary_search(&node_b).is_ok() {
        return Err(swap_error(
            "would-duplicate-member",
            "swap would place a node twice in the same edge",
        )
        .with_context("node_a", node_a)
        .with_context("node_b", node_b));
    }

    let rewired_a = replace_member(&members_a, node_a, node_b);
    let rewired_b = replace_member(&members_b, node_b, node_a);
    ensure_not_duplicate(graph, &rewired_a, node_b, edge_b)?;
    ensure_not_duplicate(graph, &rewired_b, node_a, edge_a)?;

    graph.overwrite_edge(edge_a, rewired_a)?;
    graph.overwrite_edge(edge_b, rewired_b)?;
    Ok(())
}

/// Returns whether `error` is a rejected swap proposal that a sampler may skip.
pub(crate) fn is_soft_error(error: &SodError) -> bool {
    matches!(
        error,
        SodError::Graph(info)
            if matches!(
                info.code.as_str(),
                "same-edge" | "would-duplicate-member" | "duplicate-edge"
            )
    )
}

fn ensure_member(members: &[NodeId], node: NodeId, edge: EdgeId) -> Result<(), SodError> {
    if members.binary_search(&node).is_err() {
        return Err(swap_error("missing-member", "node is not part of the edge")
            .with_context("edge", edge)
            .with_context("node", node));
    }
    Ok(())
}

fn replace_member(members: &[NodeId], removed: NodeId, added: NodeId) -> Vec<NodeId> {
    canonicalize_nodes(
        members
            .iter()
            .copied()
            .filter(|node| *node != removed)
            .chain(std::iter::once(added)),
    )
}

/// The rewired edge contains `anchor`, so only edges through `anchor` can
/// collide with it; `replaced` is the edge that is about to lose `anchor`.
fn ensure_not_duplicate(
    graph: &HypergraphImpl,
    rewired: &[NodeId],
    anchor: NodeId,
    replaced: EdgeId,
) -> Result<(), SodError> {
    for edge in graph.memberships(anchor)? {
        if *edge == replaced {
            continue;
        }
        if graph.members(*edge)? == rewired {
            return Err(swap_error("duplicate-edge", "swap would duplicate an existing edge")
                .with_context("edge", *edge));
        }
    }
    Ok(())
}

fn swap_error(code: &str, message: &str) -> SodError {
    SodError::Graph(ErrorInfo::new(code, message))
}
