use itertools::Itertools;
use sod_core::NodeId;

/// Lazily enumerates the subsets of `edge` with sizes in `[min_size, max_size]`.
///
/// Subsets come grouped by increasing size; within a size class they follow
/// the combination order of `edge` as given, so callers wanting sorted output
/// pass a sorted slice. `max_size` defaults to `edge.len()` and is clamped to
/// it. Each call starts a fresh enumeration.
pub fn subsets(
    edge: &[NodeId],
    min_size: usize,
    max_size: Option<usize>,
) -> impl Iterator<Item = Vec<NodeId>> + '_ {
    let max_size = max_size.map_or(edge.len(), |max| max.min(edge.len()));
    (min_size..=max_size).flat_map(move |size| edge.iter().copied().combinations(size))
}
