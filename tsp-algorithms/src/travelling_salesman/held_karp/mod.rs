//! Held-Karp dynamic programming over subsets of cities.
//!
//! `dp[[mask, last]]` is the cheapest path that starts at city 0, visits exactly the
//! cities in `mask` and ends at `last`. City 0 is always in `mask`, so only odd masks
//! are ever reachable, and `last == 0` only for the start state `mask == 1`. Every
//! other `(mask, last)` pair with `last` in `mask` is reachable on a complete graph.
//! Runs in `O(n^2 * 2^n)` time and `O(n * 2^n)` memory.

use anyhow::Result;
use ndarray::Array2;
use tsp_challenges::{Cost, CostMatrix, CostModel, Tour, TspError};

/// Largest input the tables are allocated for.
pub const MAX_CITIES: usize = 20;

pub fn solve_challenge(matrix: &CostMatrix<f64>) -> Result<Option<Tour<f64>>> {
    Ok(Some(solve(matrix)?))
}

pub fn solve<M: CostModel>(model: &M) -> Result<Tour<M::Cost>, TspError> {
    let n = model.num_cities();
    if n > MAX_CITIES {
        return Err(TspError::TooManyCities {
            cities: n,
            limit: MAX_CITIES,
        });
    }
    if n <= 1 {
        return Ok(Tour {
            route: (0..n).collect(),
            cost: M::Cost::ZERO,
        });
    }

    let num_masks = 1usize << n;
    let full_mask = num_masks - 1;
    let mut dp: Array2<M::Cost> = Array2::from_elem((num_masks, n), M::Cost::MAX);
    let mut parent: Array2<u8> = Array2::zeros((num_masks, n));
    dp[[1, 0]] = M::Cost::ZERO;

    // Increasing masks: every mask ^ (1 << last) is smaller and already final.
    for mask in (3..num_masks).step_by(2) {
        for last in 1..n {
            if mask & (1 << last) == 0 {
                continue;
            }
            let prev_mask = mask ^ (1 << last);
            let mut best: Option<(M::Cost, usize)> = None;
            for current in (0..n).filter(|&c| prev_mask & (1 << c) != 0) {
                if current == 0 && prev_mask != 1 {
                    continue;
                }
                let cost = dp[[prev_mask, current]] + model.cost(current, last);
                if best.map_or(true, |(b, _)| cost < b) {
                    best = Some((cost, current));
                }
            }
            if let Some((cost, current)) = best {
                dp[[mask, last]] = cost;
                parent[[mask, last]] = current as u8;
            }
        }
    }

    let mut best: Option<(M::Cost, usize)> = None;
    for last in 1..n {
        let cost = dp[[full_mask, last]] + model.cost(last, 0);
        if best.map_or(true, |(b, _)| cost < b) {
            best = Some((cost, last));
        }
    }
    let (cost, mut last) = best.ok_or(TspError::NoValidTour)?;

    let mut route = Vec::with_capacity(n);
    let mut mask = full_mask;
    while last != 0 {
        route.push(last);
        let previous = parent[[mask, last]] as usize;
        mask ^= 1 << last;
        last = previous;
    }
    route.push(0);
    route.reverse();

    log::debug!(
        "held_karp: {} cities, {} subset states, cost {}",
        n,
        num_masks / 2,
        cost
    );
    Ok(Tour { route, cost })
}
