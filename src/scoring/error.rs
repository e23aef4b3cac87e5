use thiserror::Error;

/// Failures raised while computing or deriving a score.
///
/// Configuration problems and data problems are separate variants so callers
/// can tell a broken frozen config apart from a broken result file.
#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("missing data for '{name}': {count} matching measurements, expected exactly 1")]
    MissingMeasurement { name: String, count: usize },

    #[error("bad configuration: weights sum to {sum}, not 1.0")]
    InvalidConfiguration { sum: f64 },

    #[error("non-positive mean {mean} for '{name}'")]
    NonPositiveMeasurement { name: String, mean: f64 },

    #[error("no benchmarks matched while deriving a configuration")]
    EmptyConfiguration,
}

/// Result type for scoring operations
pub type Result<T> = std::result::Result<T, ScoreError>;
