use crate::{Cost, TspError};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;

/// Pairwise travel costs between cities `0..num_cities`.
///
/// `cost(i, i)` is never asked for; the diagonal carries no meaning.
pub trait CostModel {
    type Cost: Cost;

    fn num_cities(&self) -> usize;

    fn cost(&self, from: usize, to: usize) -> Self::Cost;

    /// Total cost of the closed tour, including the edge from the last city back to the first.
    fn tour_cost(&self, tour: &[usize]) -> Result<Self::Cost, TspError> {
        validate_tour(tour, self.num_cities())?;
        Ok(cyclic_cost(self, tour))
    }
}

pub fn validate_tour(tour: &[usize], num_cities: usize) -> Result<(), TspError> {
    if tour.len() != num_cities {
        return Err(TspError::InvalidTour(format!(
            "Route length ({}) does not match number of cities ({})",
            tour.len(),
            num_cities
        )));
    }
    if let Some(&city) = tour.iter().find(|&&city| city >= num_cities) {
        return Err(TspError::InvalidTour(format!(
            "Route contains invalid city {}",
            city
        )));
    }
    let visited = tour.iter().cloned().collect::<HashSet<usize>>();
    if visited.len() != tour.len() {
        return Err(TspError::InvalidTour(
            "Route contains duplicate cities".to_string(),
        ));
    }
    Ok(())
}

/// Bound on the cost of any tour: a tour leaves every city exactly once, so it costs
/// at most the sum of each row's largest entry. `None` when that sum overflows `C`.
pub fn max_tour_cost<C: Cost, F: Fn(usize, usize) -> Option<C>>(
    num_cities: usize,
    entry: F,
) -> Option<C> {
    (0..num_cities).try_fold(C::ZERO, |total, i| {
        let row_max = (0..num_cities)
            .filter(|&j| j != i)
            .filter_map(|j| entry(i, j))
            .fold(C::ZERO, |max, cost| if cost > max { cost } else { max });
        total.checked_add(row_max)
    })
}

fn check_tour_bound<C: Cost, F: Fn(usize, usize) -> Option<C>>(
    num_cities: usize,
    entry: F,
) -> Result<(), TspError> {
    match max_tour_cost(num_cities, entry) {
        Some(_) => Ok(()),
        None => Err(TspError::InvalidMatrix(format!(
            "Tour costs can exceed the largest representable cost ({})",
            C::MAX
        ))),
    }
}

/// Cyclic sum without validating the route. Tours with fewer than two cities cost nothing.
///
/// Matrices reject entries whose tours could overflow, so plain addition is exact here.
pub fn cyclic_cost<M: CostModel + ?Sized>(model: &M, tour: &[usize]) -> M::Cost {
    if tour.len() < 2 {
        return M::Cost::ZERO;
    }
    tour.windows(2)
        .fold(M::Cost::ZERO, |total, w| total + model.cost(w[0], w[1]))
        + model.cost(tour[tour.len() - 1], tour[0])
}

/// A closed tour produced by a solver.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Tour<C> {
    pub route: Vec<usize>,
    pub cost: C,
}

/// Dense row-major `n x n` cost matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix<C> {
    num_cities: usize,
    costs: Vec<C>,
}

impl<C: Cost> CostMatrix<C> {
    pub fn new(rows: Vec<Vec<C>>) -> Result<Self, TspError> {
        let num_cities = rows.len();
        let mut costs = Vec::with_capacity(num_cities * num_cities);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != num_cities {
                return Err(TspError::InvalidMatrix(format!(
                    "Row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    num_cities
                )));
            }
            for (j, cost) in row.into_iter().enumerate() {
                if i != j && !cost.is_valid() {
                    return Err(TspError::InvalidMatrix(format!(
                        "Entry ({}, {}) is not a valid cost: {}",
                        i, j, cost
                    )));
                }
                costs.push(if i == j { C::ZERO } else { cost });
            }
        }
        check_tour_bound(num_cities, |i, j| Some(costs[i * num_cities + j]))?;
        Ok(Self { num_cities, costs })
    }

    /// Builds a matrix from `f(from, to)` for every off-diagonal pair. The diagonal is zero.
    ///
    /// Panics if an entry is invalid or tours could overflow `C`; use [`CostMatrix::new`]
    /// for untrusted input.
    pub fn from_fn<F: FnMut(usize, usize) -> C>(num_cities: usize, mut f: F) -> Self {
        let mut costs = Vec::with_capacity(num_cities * num_cities);
        for i in 0..num_cities {
            for j in 0..num_cities {
                let cost = if i == j { C::ZERO } else { f(i, j) };
                assert!(cost.is_valid(), "({}, {}) = {}", i, j, cost);
                costs.push(cost);
            }
        }
        assert!(
            max_tour_cost(num_cities, |i, j| Some(costs[i * num_cities + j])).is_some(),
            "tour costs overflow"
        );
        Self { num_cities, costs }
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> C {
        self.costs[from * self.num_cities + to]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[C]> {
        self.costs.chunks(self.num_cities.max(1))
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.num_cities;
        (0..n).all(|i| (i + 1..n).all(|j| self.get(i, j) == self.get(j, i)))
    }

    pub fn map<D: Cost, F: Fn(C) -> D>(&self, f: F) -> CostMatrix<D> {
        CostMatrix {
            num_cities: self.num_cities,
            costs: self.costs.iter().map(|&c| f(c)).collect(),
        }
    }
}

impl<C: Cost> CostModel for CostMatrix<C> {
    type Cost = C;

    fn num_cities(&self) -> usize {
        self.num_cities
    }

    #[inline]
    fn cost(&self, from: usize, to: usize) -> C {
        self.get(from, to)
    }
}

impl<C: Cost> TryFrom<Vec<Vec<C>>> for CostMatrix<C> {
    type Error = TspError;

    fn try_from(rows: Vec<Vec<C>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl<C: Cost + Serialize> Serialize for CostMatrix<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.rows())
    }
}

impl<'de, C: Cost + Deserialize<'de>> Deserialize<'de> for CostMatrix<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vec<C>>::deserialize(deserializer)?;
        CostMatrix::new(rows).map_err(de::Error::custom)
    }
}

/// Cost matrix where some city pairs are not connected.
///
/// `None` marks a missing edge; a present edge may legitimately cost zero.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeMatrix<C> {
    num_cities: usize,
    edges: Vec<Option<C>>,
}

impl<C: Cost> EdgeMatrix<C> {
    pub fn new(rows: Vec<Vec<Option<C>>>) -> Result<Self, TspError> {
        let num_cities = rows.len();
        let mut edges = Vec::with_capacity(num_cities * num_cities);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != num_cities {
                return Err(TspError::InvalidMatrix(format!(
                    "Row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    num_cities
                )));
            }
            for (j, edge) in row.into_iter().enumerate() {
                match edge {
                    Some(cost) if i != j && !cost.is_valid() => {
                        return Err(TspError::InvalidMatrix(format!(
                            "Entry ({}, {}) is not a valid cost: {}",
                            i, j, cost
                        )));
                    }
                    _ => edges.push(if i == j { None } else { edge }),
                }
            }
        }
        check_tour_bound(num_cities, |i, j| edges[i * num_cities + j])?;
        Ok(Self { num_cities, edges })
    }

    /// Reads a matrix that uses zero off the diagonal to mean "no edge".
    pub fn from_zero_sentinel(matrix: &CostMatrix<C>) -> Self {
        let n = matrix.num_cities();
        let mut edges = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                let cost = matrix.get(i, j);
                edges.push(if i == j || cost == C::ZERO {
                    None
                } else {
                    Some(cost)
                });
            }
        }
        Self {
            num_cities: n,
            edges,
        }
    }

    pub fn num_cities(&self) -> usize {
        self.num_cities
    }

    #[inline]
    pub fn edge(&self, from: usize, to: usize) -> Option<C> {
        self.edges[from * self.num_cities + to]
    }

    pub fn num_missing_edges(&self) -> usize {
        let n = self.num_cities;
        (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .filter(|&(i, j)| i != j && self.edge(i, j).is_none())
            .count()
    }

    /// Cost of the closed tour, or `None` if any of its edges is missing.
    pub fn tour_cost(&self, tour: &[usize]) -> Result<Option<C>, TspError> {
        validate_tour(tour, self.num_cities)?;
        Ok(self.cyclic_cost(tour))
    }

    pub fn cyclic_cost(&self, tour: &[usize]) -> Option<C> {
        if tour.len() < 2 {
            return Some(C::ZERO);
        }
        let mut total = C::ZERO;
        for w in tour.windows(2) {
            total = total + self.edge(w[0], w[1])?;
        }
        Some(total + self.edge(tour[tour.len() - 1], tour[0])?)
    }
}

impl<C: Cost> From<&CostMatrix<C>> for EdgeMatrix<C> {
    fn from(matrix: &CostMatrix<C>) -> Self {
        let n = matrix.num_cities();
        let mut edges = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                edges.push(if i == j { None } else { Some(matrix.get(i, j)) });
            }
        }
        Self {
            num_cities: n,
            edges,
        }
    }
}

/// Cities placed on an integer grid, travelling in straight lines.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Coordinates {
    positions: Vec<(i32, i32)>,
}

impl Coordinates {
    pub fn new(positions: Vec<(i32, i32)>) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[(i32, i32)] {
        &self.positions
    }

    pub fn distance(&self, from: usize, to: usize) -> f64 {
        let (x1, y1) = self.positions[from];
        let (x2, y2) = self.positions[to];
        let dx = x1 as f64 - x2 as f64;
        let dy = y1 as f64 - y2 as f64;
        dx.hypot(dy)
    }

    pub fn to_matrix(&self) -> CostMatrix<f64> {
        CostMatrix::from_fn(self.positions.len(), |i, j| self.distance(i, j))
    }
}

impl CostModel for Coordinates {
    type Cost = f64;

    fn num_cities(&self) -> usize {
        self.positions.len()
    }

    fn cost(&self, from: usize, to: usize) -> f64 {
        self.distance(from, to)
    }
}
