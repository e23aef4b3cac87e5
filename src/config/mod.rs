mod schema;

pub use schema::{BenchmarkWeight, ScoreConfig};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a frozen score configuration from a YAML file
///
/// # Errors
///
/// Returns an error if:
/// - The config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: &Path) -> Result<ScoreConfig> {
    if !path.exists() {
        anyhow::bail!("Configuration file not found at {}", path.display());
    }

    let config_content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration at {}", path.display()))?;

    let config: ScoreConfig = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse configuration: invalid YAML in {}", path.display()))?;

    Ok(config)
}
