use sod_core::{Hypergraph, SodError};
use sod_graph::HypergraphImpl;
use tracing::{debug, warn};

use crate::metric::SimplicialMetric;
use crate::options::SimplicialityOptions;

/// Pearson correlation between the local scores of co-occurring nodes.
///
/// Every pair of nodes sharing an edge contributes `(score_a, score_b)` and
/// `(score_b, score_a)`; with `weighted` the pair is repeated once per shared
/// edge. Pairs involving a `NaN` score are dropped. The result is `NaN` when
/// fewer than two pairs remain or the scores have no variance.
pub fn simplicial_assortativity(
    graph: &HypergraphImpl,
    metric: SimplicialMetric,
    opts: &SimplicialityOptions,
    weighted: bool,
) -> Result<f64, SodError> {
    let scores = metric.local(graph, None, opts)?;

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut dropped = 0usize;
    for (node, score) in &scores {
        for neighbour in graph.neighbors(*node)? {
            if neighbour <= *node {
                continue;
            }
            let other = scores[&neighbour];
            if score.is_nan() || other.is_nan() {
                dropped += 1;
                continue;
            }
            let copies = if weighted {
                graph.edge_multiplicity(*node, neighbour)?
            } else {
                1
            };
            for _ in 0..copies {
                xs.extend([*score, other]);
                ys.extend([other, *score]);
            }
        }
    }

    if dropped > 0 {
        debug!(dropped, "skipped node pairs with undefined local scores");
    }
    if xs.len() < 2 {
        warn!(metric = %metric, pairs = xs.len(), "too few node pairs for assortativity");
        return Ok(f64::NAN);
    }
    Ok(pearson_correlation(&xs, &ys))
}

/// Sample Pearson correlation coefficient.
///
/// `NaN` when the inputs differ in length, hold fewer than two values, or
/// either side has zero variance.
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() != ys.len() || xs.len() < 2 {
        return f64::NAN;
    }
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}
