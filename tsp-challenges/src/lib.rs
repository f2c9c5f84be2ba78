mod cost;
pub use cost::Cost;
mod error;
pub use error::TspError;
mod model;
pub use model::*;

pub mod generators;
pub mod travelling_salesman;
