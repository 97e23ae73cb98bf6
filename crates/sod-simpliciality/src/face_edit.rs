use sod_core::{Hypergraph, SodError};
use sod_graph::HypergraphImpl;
use tracing::debug;

use crate::bound::max_number_of_subfaces;
use crate::options::SimplicialityOptions;
use crate::subfaces::count_missing_subfaces;
use crate::trie::Trie;

/// Average over maximal candidate edges of the subfaces each one misses.
///
/// With `normalize`, each edge contributes its missing count divided by the
/// number of subfaces it could have (zero when it can have none). `NaN`
/// when no maximal edge reaches the candidate threshold.
pub fn mean_face_edit_distance(
    graph: &HypergraphImpl,
    opts: &SimplicialityOptions,
    normalize: bool,
) -> Result<f64, SodError> {
    opts.validate()?;
    let trie = Trie::build(
        graph
            .edges_with_min_size(opts.min_size)
            .into_iter()
            .map(|members| members.iter().copied()),
    );

    let mut total = 0.0;
    let mut evaluated = 0usize;
    for edge in graph.maximal_edges() {
        let members = graph.members(edge)?;
        if members.len() < opts.threshold() {
            continue;
        }
        let missing = count_missing_subfaces(&trie, members, opts.min_size)? as f64;
        total += if normalize {
            let bound = max_number_of_subfaces(opts.min_size, members.len())?;
            if bound == 0 {
                0.0
            } else {
                missing / bound as f64
            }
        } else {
            missing
        };
        evaluated += 1;
    }

    if evaluated == 0 {
        debug!(min_size = opts.min_size, "no maximal candidate edges");
        return Ok(f64::NAN);
    }
    Ok(total / evaluated as f64)
}

/// One minus the normalised mean face edit distance.
pub fn face_edit_simpliciality(
    graph: &HypergraphImpl,
    opts: &SimplicialityOptions,
) -> Result<f64, SodError> {
    Ok(1.0 - mean_face_edit_distance(graph, opts, true)?)
}
