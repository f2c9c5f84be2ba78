use crate::{
    generators::{
        generate_average_case_input_with_rng, generate_best_case_input,
        generate_worst_case_input_with, WorstCaseLayout,
    },
    Coordinates, CostMatrix, CostModel, TspError,
};
use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};

pub const GRID_SIZE: i32 = 1000;
/// Slack allowed when comparing floating point tour costs against the baseline.
pub const COST_TOLERANCE: f64 = 1e-9;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InputCase {
    Best,
    Average,
    Worst,
    /// Cities on a grid with straight line distances
    Euclidean,
}

impl InputCase {
    pub const ALL: [InputCase; 4] = [
        InputCase::Best,
        InputCase::Average,
        InputCase::Worst,
        InputCase::Euclidean,
    ];
}

impl fmt::Display for InputCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputCase::Best => "best",
            InputCase::Average => "average",
            InputCase::Worst => "worst",
            InputCase::Euclidean => "euclidean",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for InputCase {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputCase::ALL
            .into_iter()
            .find(|case| case.to_string() == s)
            .ok_or_else(|| {
                anyhow!(
                    "Unknown input case '{}', expected one of best, average, worst, euclidean",
                    s
                )
            })
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Difficulty {
    pub num_cities: usize,
    pub case: InputCase,
    #[serde(default)]
    pub layout: WorstCaseLayout,
}

impl Difficulty {
    pub fn new(num_cities: usize, case: InputCase) -> Self {
        Self {
            num_cities,
            case,
            layout: WorstCaseLayout::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub difficulty: Difficulty,
    pub node_positions: Option<Coordinates>,
    pub distance_matrix: CostMatrix<f64>,
    pub baseline_route: Vec<usize>,
    pub baseline_distance: f64,
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        let num_cities = difficulty.num_cities;
        let mut rng = SmallRng::from_seed(*seed);

        let (node_positions, distance_matrix) = match difficulty.case {
            InputCase::Best => (None, generate_best_case_input(num_cities).map(f64::from)),
            InputCase::Average => (
                None,
                generate_average_case_input_with_rng(num_cities, &mut rng).map(f64::from),
            ),
            InputCase::Worst => (
                None,
                generate_worst_case_input_with(num_cities, difficulty.layout).map(f64::from),
            ),
            InputCase::Euclidean => {
                let positions = generate_positions(num_cities, &mut rng)?;
                let matrix = positions.to_matrix();
                (Some(positions), matrix)
            }
        };

        let baseline_route = nearest_neighbour_route(&distance_matrix);
        let baseline_distance = distance_matrix.tour_cost(&baseline_route)?;
        Ok(Self {
            seed: *seed,
            difficulty: *difficulty,
            node_positions,
            distance_matrix,
            baseline_route,
            baseline_distance,
        })
    }

    pub fn calc_total_distance(&self, route: &[usize]) -> Result<f64, TspError> {
        self.distance_matrix.tour_cost(route)
    }

    /// Checks `route` is a tour of this instance no longer than the nearest neighbour baseline.
    pub fn verify_solution(&self, route: &[usize]) -> Result<f64> {
        let total_distance = self.calc_total_distance(route)?;
        if total_distance > self.baseline_distance + COST_TOLERANCE {
            Err(anyhow!(
                "Total distance ({}) is greater than baseline ({})",
                total_distance,
                self.baseline_distance
            ))
        } else {
            log::debug!(
                "Total distance ({}) is within baseline ({})",
                total_distance,
                self.baseline_distance
            );
            Ok(total_distance)
        }
    }
}

fn generate_positions(num_cities: usize, rng: &mut SmallRng) -> Result<Coordinates> {
    let capacity = ((GRID_SIZE + 1) as usize).pow(2);
    if num_cities > capacity {
        return Err(anyhow!(
            "Cannot place {} distinct cities on a {}x{} grid",
            num_cities,
            GRID_SIZE + 1,
            GRID_SIZE + 1
        ));
    }
    let mut positions: Vec<(i32, i32)> = Vec::with_capacity(num_cities);
    let mut positions_set: HashSet<(i32, i32)> = HashSet::with_capacity(num_cities);
    while positions.len() < num_cities {
        let pos = (rng.gen_range(0..=GRID_SIZE), rng.gen_range(0..=GRID_SIZE));
        if positions_set.insert(pos) {
            positions.push(pos);
        }
    }
    Ok(Coordinates::new(positions))
}

/// Walks from city 0, always stepping to the cheapest unvisited city. Ties go to the lower index.
pub fn nearest_neighbour_route<M: CostModel>(model: &M) -> Vec<usize> {
    let num_cities = model.num_cities();
    let mut route = Vec::with_capacity(num_cities);
    if num_cities == 0 {
        return route;
    }
    let mut visited = vec![false; num_cities];
    let mut current = 0;
    visited[current] = true;
    route.push(current);
    while route.len() < num_cities {
        let mut next: Option<(usize, M::Cost)> = None;
        for city in (0..num_cities).filter(|&c| !visited[c]) {
            let cost = model.cost(current, city);
            let improves = match next {
                Some((_, best)) => cost < best,
                None => true,
            };
            if improves {
                next = Some((city, cost));
            }
        }
        let Some((city, _)) = next else {
            break;
        };
        visited[city] = true;
        route.push(city);
        current = city;
    }
    route
}
