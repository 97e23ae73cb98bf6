use sod_core::SodError;

/// Number of proper subsets of an `edge_size`-set with at least `min_size` members.
///
/// Equals `sum_{i = min_size}^{edge_size - 1} C(edge_size, i)`, which is zero
/// whenever `edge_size <= min_size`.
pub fn max_number_of_subfaces(min_size: usize, edge_size: usize) -> Result<u64, SodError> {
    if min_size == 0 {
        return Err(SodError::input("invalid-min-size", "min_size must be positive"));
    }
    if edge_size == 0 {
        return Err(SodError::input("invalid-edge-size", "edge_size must be positive"));
    }
    if edge_size <= min_size {
        return Ok(0);
    }

    // Sum the mirrored head C(n, 1) + ... + C(n, n - min_size) so only the
    // binomials that are part of the result are ever built.
    let n = edge_size as u128;
    let mut binomial: u128 = 1;
    let mut total: u64 = 0;
    for j in 1..=(edge_size - min_size) as u128 {
        binomial = binomial
            .checked_mul(n - j + 1)
            .map(|product| product / j)
            .ok_or_else(|| overflow(min_size, edge_size))?;
        total = u64::try_from(binomial)
            .ok()
            .and_then(|term| total.checked_add(term))
            .ok_or_else(|| overflow(min_size, edge_size))?;
    }
    Ok(total)
}

fn overflow(min_size: usize, edge_size: usize) -> SodError {
    SodError::input("subface-overflow", "subface count does not fit in 64 bits")
        .with_context("min_size", min_size)
        .with_context("edge_size", edge_size)
}
