use super::error::ScoreError;
use crate::config::{BenchmarkWeight, ScoreConfig};
use crate::data::ResultSet;
use crate::suite::Taxonomy;
use std::collections::BTreeMap;

/// Derive a default score configuration from a suite taxonomy and a sample
/// result set.
///
/// Weight assignment is hierarchical equal split: each domain gets an equal
/// share of 1.0, each task an equal share of its domain, each benchmark name
/// an equal share of its task. A taxonomy name claims every measurement
/// whose record name contains it as a substring (measurement names embed the
/// entity name plus device/mode qualifiers) and splits its share equally
/// across them. Names, tasks, and domains with no matching measurement are
/// pruned before shares are assigned, so the produced weights sum to 1.
///
/// The sample result set only determines which measurements exist and their
/// baseline norms; it is not otherwise trusted.
pub fn generate_config(
    taxonomy: &Taxonomy,
    sample: &ResultSet,
    target: f64,
) -> Result<ScoreConfig, ScoreError> {
    // domain -> task -> name -> matched (record name, mean), pruned of empties
    let mut matched: BTreeMap<&str, BTreeMap<&str, BTreeMap<&str, Vec<(&str, f64)>>>> =
        BTreeMap::new();

    for (domain, tasks) in taxonomy.domains() {
        for (task, names) in tasks {
            for name in names {
                let records: Vec<(&str, f64)> = sample
                    .benchmarks
                    .iter()
                    .filter(|b| b.name.contains(name.as_str()))
                    .map(|b| (b.name.as_str(), b.stats.mean))
                    .collect();
                for (record_name, mean) in &records {
                    if *mean <= 0.0 {
                        return Err(ScoreError::NonPositiveMeasurement {
                            name: record_name.to_string(),
                            mean: *mean,
                        });
                    }
                }
                if !records.is_empty() {
                    matched
                        .entry(domain)
                        .or_default()
                        .entry(task.as_str())
                        .or_default()
                        .insert(name.as_str(), records);
                }
            }
        }
    }

    if matched.is_empty() {
        return Err(ScoreError::EmptyConfiguration);
    }

    let mut benchmarks: BTreeMap<String, BenchmarkWeight> = BTreeMap::new();
    let domain_share = 1.0 / matched.len() as f64;
    for tasks in matched.values() {
        let task_share = domain_share / tasks.len() as f64;
        for names in tasks.values() {
            let name_share = task_share / names.len() as f64;
            for records in names.values() {
                let record_share = name_share / records.len() as f64;
                for (record_name, mean) in records {
                    // The same measurement can be claimed by overlapping
                    // taxonomy names; shares accumulate to keep the sum at 1.
                    benchmarks
                        .entry(record_name.to_string())
                        .and_modify(|entry| entry.weight += record_share)
                        .or_insert(BenchmarkWeight {
                            weight: record_share,
                            norm: *mean,
                        });
                }
            }
        }
    }

    Ok(ScoreConfig { target, benchmarks })
}
