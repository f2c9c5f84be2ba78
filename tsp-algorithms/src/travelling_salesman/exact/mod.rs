//! Exhaustive search over every tour.
//!
//! Evaluates `(n - 1)!` tours of `n` cities, so only practical for roughly ten
//! cities or fewer. Among equally cheap tours the first one enumerated wins.

use crate::permutations::Permutations;
use anyhow::Result;
use tsp_challenges::{cyclic_cost, Cost, CostMatrix, CostModel, Tour};

pub fn solve_challenge(matrix: &CostMatrix<f64>) -> Result<Option<Tour<f64>>> {
    Ok(Some(solve(matrix)))
}

/// Optimal tour, enumerating only tours that start at city 0.
pub fn solve<M: CostModel>(model: &M) -> Tour<M::Cost> {
    search(model, Permutations::with_fixed_first(model.num_cities()))
}

/// Optimal tour, enumerating all `n!` orderings including every rotation.
pub fn solve_unanchored<M: CostModel>(model: &M) -> Tour<M::Cost> {
    search(model, Permutations::new(model.num_cities()))
}

fn search<M: CostModel>(model: &M, permutations: Permutations) -> Tour<M::Cost> {
    let mut best: Option<Tour<M::Cost>> = None;
    let mut evaluated = 0usize;
    for route in permutations {
        evaluated += 1;
        let cost = cyclic_cost(model, &route);
        if best.as_ref().map_or(true, |b| cost < b.cost) {
            best = Some(Tour { route, cost });
        }
    }
    log::debug!(
        "exact: evaluated {} tours of {} cities",
        evaluated,
        model.num_cities()
    );
    // The enumeration always yields at least the identity ordering.
    best.unwrap_or(Tour {
        route: Vec::new(),
        cost: M::Cost::ZERO,
    })
}
