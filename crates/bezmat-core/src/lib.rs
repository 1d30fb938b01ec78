pub mod config;
pub mod error;
pub mod traits;

pub use config::{DegenerateWeightPolicy, EvalConfig, MAX_DEGREE};
pub use error::{BezmatError, Result};
