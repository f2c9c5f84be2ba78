use anyhow::Result;
use tsp_challenges::{CostMatrix, Tour};

pub mod exact;
pub mod greedy;
pub mod held_karp;

/// Returns `Ok(None)` when the input admits no tour.
pub type SolveFn = fn(&CostMatrix<f64>) -> Result<Option<Tour<f64>>>;

pub const ALGORITHMS: [&str; 3] = ["exact", "greedy", "held_karp"];

pub fn algorithm_exists(name: &str) -> bool {
    get_algorithm(name).is_some()
}

pub fn get_algorithm(name: &str) -> Option<SolveFn> {
    match name {
        "exact" => Some(exact::solve_challenge),
        "greedy" => Some(greedy::solve_challenge),
        "held_karp" => Some(held_karp::solve_challenge),
        _ => None,
    }
}

/// Largest city count worth handing to `name` in a benchmark run.
pub fn max_cities(name: &str) -> Option<usize> {
    match name {
        "exact" | "greedy" => Some(11),
        "held_karp" => Some(held_karp::MAX_CITIES),
        _ => None,
    }
}
