use serde::Deserialize;

/// One pytest-benchmark result document.
///
/// Real result files carry far more than what scoring needs (commit info,
/// per-round timings, interquartile stats); unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultSet {
    pub benchmarks: Vec<BenchmarkRecord>,

    #[serde(default)]
    pub machine_info: Option<MachineInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkRecord {
    pub name: String,
    pub stats: Stats,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stats {
    /// Mean wall-clock time for the benchmark, in seconds
    pub mean: f64,
}

/// Host metadata recorded alongside the measurements, used only for display.
#[derive(Debug, Clone, Deserialize)]
pub struct MachineInfo {
    #[serde(default)]
    pub pytorch_version: Option<String>,
}

impl ResultSet {
    /// Version tag shown in directory reports, `-` when the file has none
    pub fn version_tag(&self) -> &str {
        self.machine_info
            .as_ref()
            .and_then(|info| info.pytorch_version.as_deref())
            .unwrap_or("-")
    }
}
