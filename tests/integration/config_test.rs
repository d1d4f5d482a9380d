//! Integration tests for configuration-driven analysis.

use liftload::storage::config::{load_config_from, save_config_to, ConfigError};
use liftload::{AppConfig, TrainingLoadCalculator};

#[test]
fn test_config_file_drives_analysis() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[analysis]\nchronic_days = 1.0\nacute_days = 1.0\n\n[input]\ndelimiter = \"\\t\"\n",
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.input.delimiter, '\t');

    let log = "Date\tExercise\tWeight\tReps\n2024-01-01\tSquat\t100\t5\n2024-01-02\tSquat\t100\t6\n";
    let report = TrainingLoadCalculator::from_config(&config)
        .analyze(log)
        .unwrap();

    // With both time constants at one day the curves equal the load after the seed day
    assert_eq!(report.final_chronic(), 600.0);
    assert_eq!(report.final_acute(), 600.0);
    assert_eq!(report.final_balance(), 0.0);
    assert!(report.sufficiency.is_sufficient());
}

#[test]
fn test_invalid_config_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[analysis]\nacute_days = -7.0\n").unwrap();

    assert!(matches!(load_config_from(&path), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_saved_default_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("liftload").join("config.toml");

    save_config_to(&AppConfig::default(), &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("chronic_days"));
    assert!(content.contains("unilateral_keywords"));

    assert_eq!(load_config_from(&path).unwrap(), AppConfig::default());
}
