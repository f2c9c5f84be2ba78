use anyhow::{anyhow, Result};
use std::time::Instant;
use tsp_algorithms::travelling_salesman::{get_algorithm, max_cities, ALGORITHMS};
use tsp_challenges::{travelling_salesman::Challenge, CostMatrix, Tour};
use tsp_structs::{
    config::BenchmarkSettings,
    core::{BenchmarkSample, SolveOutput},
};
use tsp_utils::load_json_arg;

/// Settings json string, path to a `.json` file, or `-` for stdin.
pub fn load_settings(arg: &str) -> Result<BenchmarkSettings> {
    let settings: BenchmarkSettings =
        load_json_arg(arg).map_err(|e| anyhow!("Failed to load settings: {}", e))?;
    validate_settings(&settings)?;
    Ok(settings)
}

/// Matrix json (`[[0, 1], [1, 0]]`), path to a `.json` file, or `-` for stdin.
pub fn load_matrix(arg: &str) -> Result<CostMatrix<f64>> {
    load_json_arg(arg).map_err(|e| anyhow!("Failed to load matrix: {}", e))
}

pub fn load_route(arg: &str) -> Result<Vec<usize>> {
    load_json_arg(arg).map_err(|e| anyhow!("Failed to load route: {}", e))
}

pub fn validate_settings(settings: &BenchmarkSettings) -> Result<()> {
    if let Some(name) = settings
        .algorithms
        .iter()
        .find(|name| get_algorithm(name).is_none())
    {
        return Err(anyhow!(
            "Unknown algorithm '{}', expected one of {}",
            name,
            ALGORITHMS.join(", ")
        ));
    }
    if settings.algorithms.is_empty()
        || settings.cases.is_empty()
        || settings.city_counts.is_empty()
    {
        return Err(anyhow!(
            "Settings must list at least one algorithm, case and city count"
        ));
    }
    Ok(())
}

fn timed_solve(algorithm: &str, matrix: &CostMatrix<f64>) -> Result<(Option<Tour<f64>>, f64)> {
    let solve = get_algorithm(algorithm).ok_or_else(|| {
        anyhow!(
            "Unknown algorithm '{}', expected one of {}",
            algorithm,
            ALGORITHMS.join(", ")
        )
    })?;
    let start = Instant::now();
    let tour = solve(matrix)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    Ok((tour, elapsed_ms))
}

pub fn solve(algorithm: &str, matrix: &CostMatrix<f64>) -> Result<SolveOutput> {
    let (tour, elapsed_ms) = timed_solve(algorithm, matrix)?;
    let (route, cost) = match tour {
        Some(tour) => (tour.route, Some(tour.cost)),
        None => (Vec::new(), None),
    };
    Ok(SolveOutput {
        algorithm: algorithm.to_string(),
        elapsed_ms,
        route,
        cost,
    })
}

/// Solves one generated instance per (case, city count) with every configured algorithm.
///
/// Sizes above an algorithm's limit are skipped rather than left to run for hours.
pub fn run_benchmark(settings: &BenchmarkSettings) -> Result<Vec<BenchmarkSample>> {
    validate_settings(settings)?;
    let mut samples = Vec::new();
    for &case in &settings.cases {
        for &num_cities in &settings.city_counts {
            let seed = settings.calc_seed(case, num_cities);
            let challenge =
                Challenge::generate_instance(&seed, &settings.difficulty(case, num_cities))?;

            for algorithm in &settings.algorithms {
                let limit = max_cities(algorithm).unwrap_or(usize::MAX);
                if num_cities > limit {
                    log::warn!(
                        "Skipping {} with {} cities ({} case): limit is {}",
                        algorithm,
                        num_cities,
                        case,
                        limit
                    );
                    continue;
                }

                let (tour, elapsed_ms) = timed_solve(algorithm, &challenge.distance_matrix)?;
                let (route, cost) = match tour {
                    Some(tour) => {
                        challenge.verify_solution(&tour.route)?;
                        (tour.route, Some(tour.cost))
                    }
                    None => {
                        log::warn!(
                            "{} found no valid tour for {} cities ({} case)",
                            algorithm,
                            num_cities,
                            case
                        );
                        (Vec::new(), None)
                    }
                };
                log::info!(
                    "{} cities, {} case, {}: {:.3} ms, cost {:?}",
                    num_cities,
                    case,
                    algorithm,
                    elapsed_ms,
                    cost
                );
                samples.push(BenchmarkSample {
                    city_count: num_cities,
                    algorithm: algorithm.clone(),
                    case,
                    elapsed_ms,
                    route,
                    cost,
                });
            }
        }
    }
    Ok(samples)
}
