//! Synthetic cost matrices used to compare how the solvers scale.
//!
//! Every generator returns a square matrix of the requested size with a zero
//! diagonal. Only the average case consumes randomness.

use crate::CostMatrix;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::{fmt, ops::RangeInclusive, str::FromStr};

pub const AVERAGE_CASE_RANGE: RangeInclusive<u32> = 1..=100;
/// Cost of the edges the worst case makes deliberately expensive.
pub const EXPENSIVE_EDGE: u32 = 9999;
/// Cost of every other off-diagonal edge in the worst case.
pub const CHEAP_EDGE: u32 = 1;

/// Where the worst case places its expensive edges.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorstCaseLayout {
    /// Every edge touching city 0
    Hub,
    /// Edges between consecutive indices, plus the wraparound edge
    #[default]
    Cycle,
}

impl WorstCaseLayout {
    pub fn is_expensive(&self, num_cities: usize, from: usize, to: usize) -> bool {
        if from == to {
            return false;
        }
        match self {
            WorstCaseLayout::Hub => from == 0 || to == 0,
            WorstCaseLayout::Cycle => {
                to == (from + 1) % num_cities || from == (to + 1) % num_cities
            }
        }
    }
}

impl fmt::Display for WorstCaseLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorstCaseLayout::Hub => write!(f, "hub"),
            WorstCaseLayout::Cycle => write!(f, "cycle"),
        }
    }
}

impl FromStr for WorstCaseLayout {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hub" => Ok(WorstCaseLayout::Hub),
            "cycle" => Ok(WorstCaseLayout::Cycle),
            _ => Err(anyhow::anyhow!(
                "Unknown worst case layout '{}', expected 'hub' or 'cycle'",
                s
            )),
        }
    }
}

/// Complete graph with unit costs: every tour of `n >= 2` cities costs exactly `n`.
pub fn generate_best_case_input(num_cities: usize) -> CostMatrix<u32> {
    CostMatrix::from_fn(num_cities, |_, _| 1)
}

/// Symmetric matrix with costs drawn uniformly from [`AVERAGE_CASE_RANGE`], seeded from entropy.
pub fn generate_average_case_input(num_cities: usize) -> CostMatrix<u32> {
    generate_average_case_input_with_rng(num_cities, &mut SmallRng::from_entropy())
}

pub fn generate_average_case_input_with_rng<R: Rng>(
    num_cities: usize,
    rng: &mut R,
) -> CostMatrix<u32> {
    let mut upper = vec![0u32; num_cities * num_cities];
    for i in 0..num_cities {
        for j in (i + 1)..num_cities {
            upper[i * num_cities + j] = rng.gen_range(AVERAGE_CASE_RANGE);
        }
    }
    CostMatrix::from_fn(num_cities, |i, j| {
        if i < j {
            upper[i * num_cities + j]
        } else {
            upper[j * num_cities + i]
        }
    })
}

/// Worst case with expensive edges along the cycle `0 -> 1 -> .. -> n-1 -> 0`.
pub fn generate_worst_case_input(num_cities: usize) -> CostMatrix<u32> {
    generate_worst_case_input_with(num_cities, WorstCaseLayout::Cycle)
}

pub fn generate_worst_case_input_with(
    num_cities: usize,
    layout: WorstCaseLayout,
) -> CostMatrix<u32> {
    CostMatrix::from_fn(num_cities, |i, j| {
        if layout.is_expensive(num_cities, i, j) {
            EXPENSIVE_EDGE
        } else {
            CHEAP_EDGE
        }
    })
}
