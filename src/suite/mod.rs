mod taxonomy;

pub use taxonomy::{build_taxonomy, display_name, Taxonomy, UNCLASSIFIED_TASK};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One runnable benchmark known to the suite.
///
/// `domain` and `task` are optional; entities without a domain never enter a
/// taxonomy.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct BenchmarkEntity {
    pub name: String,

    #[serde(default)]
    pub domain: Option<String>,

    #[serde(default)]
    pub task: Option<String>,
}

/// Source of the benchmark entities available to a suite.
///
/// Taxonomy construction takes its entities through this seam instead of
/// discovering them ambiently, so tests and alternate suites can supply
/// their own enumeration.
pub trait EntityProvider {
    fn entities(&self) -> Result<Vec<BenchmarkEntity>>;
}

/// Suite manifest file: a YAML list of benchmark entities.
///
/// Example YAML:
/// ```yaml
/// benchmarks:
///   - name: alexnet
///     domain: vision
///     task: classification
///   - name: bert
///     domain: nlp
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SuiteManifest {
    pub benchmarks: Vec<BenchmarkEntity>,
}

impl SuiteManifest {
    /// Load a suite manifest from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Suite manifest not found at {}", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read suite manifest at {}", path.display()))?;

        let manifest: SuiteManifest = serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse suite manifest: invalid YAML in {}", path.display()))?;

        Ok(manifest)
    }
}

impl EntityProvider for SuiteManifest {
    fn entities(&self) -> Result<Vec<BenchmarkEntity>> {
        Ok(self.benchmarks.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_manifest_parse() {
        let yaml = r#"
benchmarks:
  - name: alexnet
    domain: vision
    task: classification
  - name: bert
    domain: nlp
"#;
        let manifest: SuiteManifest = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(manifest.benchmarks.len(), 2);
        assert_eq!(manifest.benchmarks[0].name, "alexnet");
        assert_eq!(manifest.benchmarks[1].task, None);
    }

    #[test]
    fn test_manifest_load_and_build_taxonomy() {
        let path = env::temp_dir().join("benchscore_test_suite.yaml");
        fs::write(
            &path,
            "benchmarks:\n  - name: alexnet\n    domain: vision\n    task: classification\n",
        )
        .unwrap();

        let manifest = SuiteManifest::load(&path).unwrap();
        let entities = manifest.entities().unwrap();
        let taxonomy = build_taxonomy(&entities);
        assert!(taxonomy.contains("vision", "classification", "alexnet"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_manifest_load_missing_errors() {
        let path = env::temp_dir().join("benchscore_test_no_such_suite.yaml");
        let _ = fs::remove_file(&path);

        assert!(SuiteManifest::load(&path).is_err());
    }
}
