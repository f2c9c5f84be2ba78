use crate::serializable_struct_with_getters;
use serde::{Deserialize, Serialize};
use tsp_challenges::{
    generators::WorstCaseLayout,
    travelling_salesman::{Difficulty, InputCase},
};
use tsp_utils::seed_from_parts;

serializable_struct_with_getters! {
    BenchmarkSettings {
        algorithms: Vec<String>,
        cases: Vec<InputCase>,
        city_counts: Vec<usize>,
        seed: String,
        layout: Option<WorstCaseLayout>,
    }
}

impl BenchmarkSettings {
    /// Every (case, city count) pair gets its own instance seed.
    pub fn calc_seed(&self, case: InputCase, num_cities: usize) -> [u8; 32] {
        seed_from_parts(
            &self.seed,
            &[case.to_string().as_str(), num_cities.to_string().as_str()],
        )
    }

    pub fn difficulty(&self, case: InputCase, num_cities: usize) -> Difficulty {
        Difficulty {
            num_cities,
            case,
            layout: self.layout.unwrap_or_default(),
        }
    }
}
