//! Exhaustive search restricted to tours whose every edge exists.
//!
//! Same enumeration as the exact solver; a tour is dropped as soon as one of its
//! edges, the closing edge included, is missing.

use crate::permutations::Permutations;
use anyhow::Result;
use tsp_challenges::{Cost, CostMatrix, EdgeMatrix, Tour};

/// Reads zero off-diagonal costs as missing edges.
pub fn solve_challenge(matrix: &CostMatrix<f64>) -> Result<Option<Tour<f64>>> {
    Ok(solve(&EdgeMatrix::from_zero_sentinel(matrix)))
}

/// Cheapest tour starting at city 0 that uses only existing edges, or `None` if there is none.
pub fn solve<C: Cost>(edges: &EdgeMatrix<C>) -> Option<Tour<C>> {
    let mut best: Option<Tour<C>> = None;
    let mut rejected = 0usize;
    for route in Permutations::with_fixed_first(edges.num_cities()) {
        let Some(cost) = edges.cyclic_cost(&route) else {
            rejected += 1;
            continue;
        };
        if best.as_ref().map_or(true, |b| cost < b.cost) {
            best = Some(Tour { route, cost });
        }
    }
    log::debug!(
        "greedy: {} cities, {} tours rejected for missing edges, found: {}",
        edges.num_cities(),
        rejected,
        best.is_some()
    );
    best
}
