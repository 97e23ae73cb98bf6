use sod_core::SodError;
use sod_graph::HypergraphImpl;
use tracing::debug;

use crate::options::SimplicialityOptions;
use crate::subfaces::is_simplex;
use crate::trie::Trie;

/// Number of candidate edges (size at least the threshold) whose proper
/// subfaces are all present in the hypergraph.
pub fn count_simplices(
    graph: &HypergraphImpl,
    opts: &SimplicialityOptions,
) -> Result<usize, SodError> {
    opts.validate()?;
    let trie = Trie::build(graph.edge_members().map(|(_, members)| members.iter().copied()));
    Ok(graph
        .edges_with_min_size(opts.threshold())
        .into_iter()
        .filter(|members| is_simplex(&trie, members, opts.min_size))
        .count())
}

/// Number of candidate edges, counted with multiplicity.
pub fn potential_simplices(
    graph: &HypergraphImpl,
    opts: &SimplicialityOptions,
) -> Result<usize, SodError> {
    opts.validate()?;
    Ok(graph.count_edges_with_min_size(opts.threshold()))
}

/// Fraction of candidate edges that are simplices; `NaN` without candidates.
pub fn simplicial_fraction(
    graph: &HypergraphImpl,
    opts: &SimplicialityOptions,
) -> Result<f64, SodError> {
    let potential = potential_simplices(graph, opts)?;
    if potential == 0 {
        debug!(min_size = opts.min_size, "no candidate simplices");
        return Ok(f64::NAN);
    }
    let simplices = count_simplices(graph, opts)?;
    debug!(simplices, potential, "simplicial fraction");
    Ok(simplices as f64 / potential as f64)
}
