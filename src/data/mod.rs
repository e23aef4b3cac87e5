mod schema;

pub use schema::{BenchmarkRecord, MachineInfo, ResultSet, Stats};

use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Load one benchmark result document from a JSON file
pub fn load_result_set(path: &Path) -> Result<ResultSet> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open benchmark data at {}", path.display()))?;

    let data: ResultSet = serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse benchmark data in {}", path.display()))?;

    Ok(data)
}

/// List the `.json` result files in a directory, sorted by file name
///
/// Non-JSON entries and subdirectories are skipped, matching the layout of a
/// results directory where one file is written per benchmark run.
pub fn list_result_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = dir.join("*.json");
    let pattern = pattern
        .to_str()
        .with_context(|| format!("Non-UTF-8 data directory path: {}", dir.display()))?;

    let mut files: Vec<PathBuf> = glob::glob(pattern)
        .context("Failed to read benchmark data directory")?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_load_result_set_roundtrip() {
        let path = env::temp_dir().join("benchscore_test_result.json");
        fs::write(
            &path,
            r#"{"benchmarks": [{"name": "alexnet-cpu", "stats": {"mean": 3.5}}]}"#,
        )
        .unwrap();

        let data = load_result_set(&path).unwrap();
        assert_eq!(data.benchmarks.len(), 1);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let path = env::temp_dir().join("benchscore_test_no_such_result.json");
        let _ = fs::remove_file(&path);

        assert!(load_result_set(&path).is_err());
    }

    #[test]
    fn test_list_result_files_filters_and_sorts() {
        let dir = env::temp_dir().join("benchscore_test_data_dir");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        fs::write(dir.join("b.json"), "{}").unwrap();
        fs::write(dir.join("a.json"), "{}").unwrap();
        fs::write(dir.join("notes.txt"), "").unwrap();
        fs::create_dir_all(dir.join("nested.json")).unwrap();

        let files = list_result_files(&dir).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_list_result_files_empty_dir() {
        let dir = env::temp_dir().join("benchscore_test_empty_dir");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        let files = list_result_files(&dir).unwrap();
        assert!(files.is_empty());

        let _ = fs::remove_dir_all(&dir);
    }
}
