use std::fmt;

/// Validation failures surfaced by cost models and solvers.
#[derive(Debug, Clone, PartialEq)]
pub enum TspError {
    /// Non-square matrix, or an entry outside the cost domain
    InvalidMatrix(String),
    /// Route that is not a permutation of the model's cities
    InvalidTour(String),
    /// Every candidate tour uses at least one missing edge
    NoValidTour,
    /// Input is larger than the solver can hold in memory
    TooManyCities { cities: usize, limit: usize },
}

impl fmt::Display for TspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TspError::InvalidMatrix(msg) => write!(f, "Invalid matrix: {}", msg),
            TspError::InvalidTour(msg) => write!(f, "Invalid tour: {}", msg),
            TspError::NoValidTour => write!(f, "No valid tour exists"),
            TspError::TooManyCities { cities, limit } => write!(
                f,
                "Too many cities ({}), this solver supports at most {}",
                cities, limit
            ),
        }
    }
}

impl std::error::Error for TspError {}
