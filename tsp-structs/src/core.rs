use crate::serializable_struct_with_getters;
use serde::{Deserialize, Serialize};
use tsp_challenges::travelling_salesman::InputCase;

serializable_struct_with_getters! {
    BenchmarkSample {
        city_count: usize,
        algorithm: String,
        case: InputCase,
        elapsed_ms: f64,
        route: Vec<usize>,
        cost: Option<f64>,
    }
}

impl BenchmarkSample {
    /// `false` when the solver reported that no tour exists.
    pub fn found_tour(&self) -> bool {
        self.cost.is_some()
    }
}

serializable_struct_with_getters! {
    SolveOutput {
        algorithm: String,
        elapsed_ms: f64,
        route: Vec<usize>,
        cost: Option<f64>,
    }
}
