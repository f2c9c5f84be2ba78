pub mod permutations;
pub mod travelling_salesman;
