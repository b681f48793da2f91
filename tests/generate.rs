//! End-to-end tests for the generate and inspect commands.

use std::path::PathBuf;
use tempfile::TempDir;
use textgen::arrow::DatasetReader;
use textgen::commands::generate::{run_generate, GenerateArgs};
use textgen::commands::inspect::{run_inspect, InspectArgs};

const LITERAL_CONFIG: &str = r#"
seed: 42
syntax: literal
budgets:
  max_rows: 10
  max_bytes: 1000000
pools:
  - unique_count: 2
    frequency: 1
    pattern: A
  - unique_count: 2
    frequency: 3
    pattern: B
"#;

const REGEX_CONFIG: &str = r#"
seed: 7
max_repeat: 20
budgets:
  max_rows: 100000
  max_bytes: 20000
pools:
  - unique_count: 10
    frequency: 1
    pattern: '.*[Tt][Aa][Xx][Ii].*'
  - unique_count: 30
    frequency: 20
    pattern: '.*.*.*'
  - unique_count: 50
    frequency: 20
    pattern: '.*'
"#;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("pools.yaml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_generate_literal_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("input.rb");
    let args = GenerateArgs {
        config: Some(write_config(&temp_dir, LITERAL_CONFIG)),
        ..GenerateArgs::new(&output)
    };

    let report = run_generate(&args).unwrap();

    assert_eq!(report.rows, 10);
    assert_eq!(report.text_bytes, 10);
    assert_eq!(report.pools, 2);
    assert_eq!(report.pool_strings, 4);
    assert_eq!(report.seed, 42);

    let rows = DatasetReader::new().read_rows(&output).unwrap();
    assert_eq!(rows.len(), 10);
    assert!(rows.iter().all(|row| row == "A" || row == "B"));
}

#[test]
fn test_generate_regex_stops_on_byte_budget() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("input.rb");
    let args = GenerateArgs {
        config: Some(write_config(&temp_dir, REGEX_CONFIG)),
        ..GenerateArgs::new(&output)
    };

    let report = run_generate(&args).unwrap();
    assert!(report.text_bytes >= 20_000);
    assert!(report.rows < 100_000);

    let summary = run_inspect(&InspectArgs {
        path: output.clone(),
        json: false,
    })
    .unwrap();
    assert_eq!(summary.batches, 1);
    assert_eq!(summary.rows, report.rows);
    assert_eq!(summary.text_bytes, report.text_bytes);
    assert_eq!(summary.file_size_bytes, report.file_size_bytes);
    assert!(summary.distinct_values <= 90);

    let rows = DatasetReader::new().read_rows(&output).unwrap();
    let last_len = rows.last().unwrap().len() as u64;
    assert!(report.text_bytes - last_len < 20_000);
}

#[test]
fn test_same_seed_same_file_contents() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(&temp_dir, REGEX_CONFIG);

    let first = temp_dir.path().join("first.rb");
    let second = temp_dir.path().join("second.rb");
    for output in [&first, &second] {
        let args = GenerateArgs {
            config: Some(config.clone()),
            max_bytes: Some(5_000),
            ..GenerateArgs::new(output)
        };
        run_generate(&args).unwrap();
    }

    let reader = DatasetReader::new();
    assert_eq!(
        reader.read_rows(&first).unwrap(),
        reader.read_rows(&second).unwrap()
    );
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("input.rb");
    let args = GenerateArgs {
        config: Some(write_config(&temp_dir, LITERAL_CONFIG)),
        dry_run: true,
        ..GenerateArgs::new(&output)
    };

    let report = run_generate(&args).unwrap();

    assert!(report.dry_run);
    assert_eq!(report.rows, 0);
    assert_eq!(report.pool_strings, 4);
    assert!(!output.exists());
}

#[test]
fn test_zero_row_budget_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("input.rb");
    let args = GenerateArgs {
        config: Some(write_config(&temp_dir, LITERAL_CONFIG)),
        max_rows: Some(0),
        ..GenerateArgs::new(&output)
    };

    let err = run_generate(&args).unwrap_err();

    assert!(format!("{err:#}").contains("max_rows"));
    assert!(!output.exists());
}

#[test]
fn test_invalid_pattern_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("input.rb");
    let config = write_config(
        &temp_dir,
        r#"
pools:
  - unique_count: 1
    frequency: 1
    pattern: "(unclosed"
"#,
    );
    let args = GenerateArgs {
        config: Some(config),
        ..GenerateArgs::new(&output)
    };

    let err = run_generate(&args).unwrap_err();

    assert!(format!("{err:#}").contains("(unclosed"));
    assert!(!output.exists());
}
