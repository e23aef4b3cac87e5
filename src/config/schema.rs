use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Frozen score configuration.
///
/// Pins the reference norms and contribution weights for every benchmark in
/// the suite. `target` is the score produced when every measured mean equals
/// its norm, so a run at parity with the baseline scores exactly `target`.
///
/// Example YAML:
/// ```yaml
/// target: 1000
/// benchmarks:
///   resnet50-cpu-eager:
///     weight: 0.5
///     norm: 2.31
///   resnet50-cuda-jit:
///     weight: 0.5
///     norm: 0.42
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoreConfig {
    /// Score of the reference baseline
    pub target: f64,

    /// Per-benchmark weight and reference norm, keyed by measurement name
    pub benchmarks: BTreeMap<String, BenchmarkWeight>,
}

/// One benchmark's share of the score and its reference mean.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BenchmarkWeight {
    /// Contribution share in (0, 1]; weights across the config sum to 1
    pub weight: f64,

    /// Baseline measured mean this benchmark is ratioed against
    pub norm: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
target: 1000
benchmarks:
  resnet50-cpu-eager:
    weight: 0.5
    norm: 2.31
  resnet50-cuda-jit:
    weight: 0.5
    norm: 0.42
"#;
        let config: ScoreConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.target, 1000.0);
        assert_eq!(config.benchmarks.len(), 2);

        let entry = &config.benchmarks["resnet50-cpu-eager"];
        assert_eq!(entry.weight, 0.5);
        assert_eq!(entry.norm, 2.31);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let mut benchmarks = BTreeMap::new();
        benchmarks.insert(
            "alexnet-cpu".to_string(),
            BenchmarkWeight {
                weight: 1.0,
                norm: 3.5,
            },
        );
        let config = ScoreConfig {
            target: 1000.0,
            benchmarks,
        };

        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: ScoreConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let yaml = r#"
target: 1000
benchmarks: {}
extra: true
"#;
        let result: Result<ScoreConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_target_rejected() {
        let yaml = r#"
benchmarks:
  alexnet-cpu:
    weight: 1.0
    norm: 3.5
"#;
        let result: Result<ScoreConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
