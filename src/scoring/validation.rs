use super::engine::WEIGHT_SUM_TOLERANCE;
use crate::config::ScoreConfig;

/// Validate a score configuration before any scoring happens.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &ScoreConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.target <= 0.0 {
        errors.push(format!("target: must be positive, got {}", config.target));
    }

    if config.benchmarks.is_empty() {
        errors.push("benchmarks: at least one benchmark is required".to_string());
    }

    for (name, cfg) in &config.benchmarks {
        if cfg.weight <= 0.0 || cfg.weight > 1.0 {
            errors.push(format!(
                "benchmarks.{}.weight: must be in (0, 1], got {}",
                name, cfg.weight
            ));
        }
        if cfg.norm <= 0.0 {
            errors.push(format!(
                "benchmarks.{}.norm: must be positive, got {}",
                name, cfg.norm
            ));
        }
    }

    let weight_sum: f64 = config.benchmarks.values().map(|cfg| cfg.weight).sum();
    if !config.benchmarks.is_empty() && (weight_sum - 1.0).abs() >= WEIGHT_SUM_TOLERANCE {
        errors.push(format!("benchmarks: weights sum to {weight_sum}, not 1.0"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
