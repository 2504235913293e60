//! Tests for loading engine configuration.

use std::io::Write;
use strictly_go_cli::EngineConfig;

#[test]
fn test_defaults_without_file() {
    let config = EngineConfig::load(None).unwrap();
    assert_eq!(*config.komi(), 7.5);
    assert!(*config.check_legal());
    assert!(!*config.allow_suicide());
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "komi = 6.5\nallow_suicide = true").unwrap();

    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.komi(), 6.5);
    assert!(*config.allow_suicide());
    assert!(*config.check_legal());
}

#[test]
fn test_missing_file_reports_location() {
    let dir = tempfile::tempdir().unwrap();
    let err = EngineConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.file.ends_with("config.rs"));
}

#[test]
fn test_malformed_toml_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "komi = \"lots\"").unwrap();
    let err = EngineConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}
