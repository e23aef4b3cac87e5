use benchscore::config::ScoreConfig;
use benchscore::data::ResultSet;
use benchscore::output::{format_report_table, should_use_colors, ScoredFile};
use benchscore::scoring::{
    compute_score, generate_config, sensitivity_overrides, validate_config, ScoreError,
};
use benchscore::suite::{build_taxonomy, BenchmarkEntity, EntityProvider, SuiteManifest};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::time::Instant;

const EXIT_SUCCESS: i32 = 0;
const EXIT_USAGE: i32 = 1;
const EXIT_CONFIG: i32 = 2;
const EXIT_DATA: i32 = 3;

/// Domain used when deriving a configuration without a suite manifest;
/// every measurement lands in it, which degenerates to flat equal weighting.
const FALLBACK_DOMAIN: &str = "benchmarks";

#[derive(Parser, Debug)]
#[command(name = "benchscore")]
#[command(about = "Compute a benchmark suite score against a frozen baseline", long_about = None)]
#[command(version)]
struct Cli {
    /// Frozen score configuration (YAML); derived from the data when omitted
    #[arg(long)]
    configuration: Option<PathBuf>,

    /// Single pytest-benchmark JSON file; prints one score
    #[arg(long = "benchmark_data_file")]
    benchmark_data_file: Option<PathBuf>,

    /// Directory of .json result files; prints a score per file
    #[arg(long = "benchmark_data_dir")]
    benchmark_data_dir: Option<PathBuf>,

    /// Keyword and factor: multiply every matching measurement's mean and
    /// report a second, adjusted score (repeatable; file mode only)
    #[arg(long = "hack_data", num_args = 2, value_names = ["KEYWORD", "FACTOR"], action = clap::ArgAction::Append)]
    hack_data: Vec<String>,

    /// Suite manifest (YAML) used to derive a default configuration
    #[arg(long)]
    suite: Option<PathBuf>,

    /// Baseline score for derived configurations
    #[arg(long, default_value_t = 1000.0)]
    target: f64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    // Exactly one input mode
    if cli.benchmark_data_file.is_some() == cli.benchmark_data_dir.is_some() {
        let mut cmd = Cli::command();
        eprintln!("{}", cmd.render_help());
        eprintln!("Specify exactly one of --benchmark_data_file and --benchmark_data_dir.");
        std::process::exit(EXIT_USAGE);
    }

    let hacks = match parse_hacks(&cli.hack_data) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("Invalid --hack_data: {}", e);
            std::process::exit(EXIT_USAGE);
        }
    };

    // Load and validate the frozen configuration up front
    let frozen = cli.configuration.as_ref().map(|path| {
        let config = match benchscore::config::load_config(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Configuration error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        };
        if let Err(errors) = validate_config(&config) {
            eprintln!("Configuration errors in {}:", path.display());
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
        if cli.verbose {
            eprintln!(
                "Loaded configuration with {} benchmarks from {}",
                config.benchmarks.len(),
                path.display()
            );
        }
        config
    });

    if let Some(path) = &cli.benchmark_data_file {
        let data = load_data_or_exit(path);
        let config = frozen.unwrap_or_else(|| derive_config_or_exit(&cli, &data));

        let score = score_or_exit(&config, &data, None);
        println!("{}", score);

        if !hacks.is_empty() {
            let overrides = sensitivity_overrides(&data, &hacks);
            if cli.verbose {
                eprintln!("{} measurements overridden", overrides.len());
            }
            let hacked = score_or_exit(&config, &data, Some(&overrides));
            println!("Using hacks {:?}, hacked score {}", hacks, hacked);
        }
    } else if let Some(dir) = &cli.benchmark_data_dir {
        let files = match benchscore::data::list_result_files(dir) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Data error: {:#}", e);
                std::process::exit(EXIT_DATA);
            }
        };
        if files.is_empty() {
            println!("No benchmark data files found.");
            std::process::exit(EXIT_SUCCESS);
        }

        // Derive once from the first result file when no frozen config given
        let config = frozen.unwrap_or_else(|| {
            let sample = load_data_or_exit(&files[0]);
            derive_config_or_exit(&cli, &sample)
        });

        let mut rows = Vec::with_capacity(files.len());
        for path in &files {
            let file_start = Instant::now();
            let data = load_data_or_exit(path);
            let score = score_or_exit(&config, &data, None);

            let file = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            if cli.verbose {
                eprintln!("Scored {} in {:?}", file, file_start.elapsed());
            }
            rows.push(ScoredFile {
                file,
                score,
                version: data.version_tag().to_string(),
            });
        }

        println!("{}", format_report_table(&rows, should_use_colors()));

        if cli.verbose {
            eprintln!();
            eprintln!("Total: {} files in {:?}", rows.len(), start_time.elapsed());
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Parse the flattened keyword/factor pairs collected by clap
fn parse_hacks(raw: &[String]) -> Result<Vec<(String, f64)>, String> {
    raw.chunks(2)
        .map(|pair| {
            let factor: f64 = pair[1]
                .parse()
                .map_err(|_| format!("factor '{}' is not a number", pair[1]))?;
            Ok((pair[0].clone(), factor))
        })
        .collect()
}

fn load_data_or_exit(path: &std::path::Path) -> ResultSet {
    match benchscore::data::load_result_set(path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Data error: {:#}", e);
            std::process::exit(EXIT_DATA);
        }
    }
}

fn score_or_exit(
    config: &ScoreConfig,
    data: &ResultSet,
    overrides: Option<&std::collections::BTreeMap<String, f64>>,
) -> f64 {
    match compute_score(config, data, overrides) {
        Ok(score) => score,
        Err(e) => {
            eprintln!("Scoring error: {}", e);
            std::process::exit(exit_code_for(&e));
        }
    }
}

/// Derive a default configuration from the suite taxonomy and a sample
/// result set
fn derive_config_or_exit(cli: &Cli, sample: &ResultSet) -> ScoreConfig {
    let entities = match &cli.suite {
        Some(path) => {
            let manifest = match SuiteManifest::load(path) {
                Ok(m) => m,
                Err(e) => {
                    eprintln!("Suite manifest error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };
            match manifest.entities() {
                Ok(entities) => entities,
                Err(e) => {
                    eprintln!("Suite manifest error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            }
        }
        None => sample
            .benchmarks
            .iter()
            .map(|b| BenchmarkEntity {
                name: b.name.clone(),
                domain: Some(FALLBACK_DOMAIN.to_string()),
                task: None,
            })
            .collect(),
    };

    let taxonomy = build_taxonomy(&entities);
    if cli.verbose {
        eprintln!(
            "Built taxonomy with {} benchmarks across {} domains",
            taxonomy.len(),
            taxonomy.domains().count()
        );
    }

    match generate_config(&taxonomy, sample, cli.target) {
        Ok(config) => {
            if cli.verbose {
                eprintln!(
                    "Derived configuration with {} benchmarks (target {})",
                    config.benchmarks.len(),
                    cli.target
                );
            }
            config
        }
        Err(e) => {
            eprintln!("Failed to derive configuration: {}", e);
            std::process::exit(exit_code_for(&e));
        }
    }
}

/// Bad configuration and bad data exit differently so CI can tell them apart
fn exit_code_for(err: &ScoreError) -> i32 {
    match err {
        ScoreError::InvalidConfiguration { .. } | ScoreError::EmptyConfiguration => EXIT_CONFIG,
        ScoreError::MissingMeasurement { .. } | ScoreError::NonPositiveMeasurement { .. } => {
            EXIT_DATA
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hacks_pairs() {
        let raw = vec![
            "alexnet".to_string(),
            "2.0".to_string(),
            "bert".to_string(),
            "0.5".to_string(),
        ];
        let hacks = parse_hacks(&raw).unwrap();
        assert_eq!(hacks.len(), 2);
        assert_eq!(hacks[0], ("alexnet".to_string(), 2.0));
        assert_eq!(hacks[1], ("bert".to_string(), 0.5));
    }

    #[test]
    fn test_parse_hacks_bad_factor() {
        let raw = vec!["alexnet".to_string(), "fast".to_string()];
        let result = parse_hacks(&raw);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("fast"));
    }

    #[test]
    fn test_parse_hacks_empty() {
        assert!(parse_hacks(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_cli_requires_one_data_argument() {
        let cli = Cli::try_parse_from(["benchscore"]).unwrap();
        assert!(cli.benchmark_data_file.is_some() == cli.benchmark_data_dir.is_some());
    }

    #[test]
    fn test_cli_parses_underscore_flags() {
        let cli = Cli::try_parse_from([
            "benchscore",
            "--configuration",
            "cfg.yaml",
            "--benchmark_data_file",
            "run.json",
            "--hack_data",
            "alexnet",
            "2.0",
            "--hack_data",
            "bert",
            "0.5",
        ])
        .unwrap();

        assert_eq!(cli.configuration, Some(PathBuf::from("cfg.yaml")));
        assert_eq!(cli.benchmark_data_file, Some(PathBuf::from("run.json")));
        assert_eq!(cli.hack_data.len(), 4);
        assert_eq!(cli.target, 1000.0);
    }
}
