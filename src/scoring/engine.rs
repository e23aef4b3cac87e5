use super::error::ScoreError;
use crate::config::ScoreConfig;
use crate::data::ResultSet;
use std::collections::BTreeMap;

/// Tolerance for the weight-sum invariant
pub(crate) const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Compute the aggregate benchmark score for one result set.
///
/// Each configured benchmark contributes `weight * ln(norm / measured)`; the
/// summed log-ratios are re-exponentiated and scaled by the configuration's
/// target. A run where every measured mean equals its norm scores exactly
/// `target`. Weights must sum to 1 so that a uniform proportional change in
/// all means shifts the score by the same factor regardless of weighting.
///
/// `overrides` substitutes measured means by benchmark name, used to probe
/// how sensitive the score is to particular benchmarks. The primary reported
/// score is always computed without overrides.
pub fn compute_score(
    config: &ScoreConfig,
    data: &ResultSet,
    overrides: Option<&BTreeMap<String, f64>>,
) -> Result<f64, ScoreError> {
    let weight_sum: f64 = config.benchmarks.values().map(|cfg| cfg.weight).sum();
    if (weight_sum - 1.0).abs() >= WEIGHT_SUM_TOLERANCE {
        return Err(ScoreError::InvalidConfiguration { sum: weight_sum });
    }

    let mut score = 0.0;
    for (name, cfg) in &config.benchmarks {
        let matches: Vec<f64> = data
            .benchmarks
            .iter()
            .filter(|b| b.name == *name)
            .map(|b| b.stats.mean)
            .collect();
        if matches.len() != 1 {
            return Err(ScoreError::MissingMeasurement {
                name: name.clone(),
                count: matches.len(),
            });
        }

        let measured = match overrides.and_then(|o| o.get(name)) {
            Some(faked) => *faked,
            None => matches[0],
        };
        if measured <= 0.0 {
            return Err(ScoreError::NonPositiveMeasurement {
                name: name.clone(),
                mean: measured,
            });
        }

        score += cfg.weight * (cfg.norm / measured).ln();
    }

    Ok(config.target * score.exp())
}

/// Build a sensitivity-override map from keyword/factor pairs.
///
/// Every measurement whose name case-insensitively contains a keyword is
/// overridden to `mean * factor`. Later pairs win when keywords overlap.
pub fn sensitivity_overrides(data: &ResultSet, hacks: &[(String, f64)]) -> BTreeMap<String, f64> {
    let mut overrides = BTreeMap::new();
    for (keyword, factor) in hacks {
        let needle = keyword.to_lowercase();
        for record in &data.benchmarks {
            if record.name.to_lowercase().contains(&needle) {
                overrides.insert(record.name.clone(), record.stats.mean * factor);
            }
        }
    }
    overrides
}
