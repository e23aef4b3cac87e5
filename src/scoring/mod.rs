pub mod engine;
pub mod error;
pub mod generate;
pub mod validation;

pub use engine::{compute_score, sensitivity_overrides};
pub use error::ScoreError;
pub use generate::generate_config;
pub use validation::validate_config;
