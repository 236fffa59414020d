// Rust guideline compliant 2026-10-19

//! Unit tests for error types and messages.

use datatrack_core::{extract_run_number, Error};
use std::path::PathBuf;

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
    let msg = Error::Io(io_err).to_string();
    assert!(msg.contains("IO error"), "IO error should contain 'IO error' prefix");
    assert!(msg.contains("no such directory"));
}

#[test]
fn test_malformed_name_formatting() {
    let err = extract_run_number("Run.data", "Run", ".data").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Malformed marker name 'Run.data': '' is not a run number"
    );
}

#[test]
fn test_foreign_entry_formatting() {
    let err = Error::ForeignEntry(PathBuf::from("/tmp/datatrack-x/notes.txt"));
    assert!(err.to_string().contains("/tmp/datatrack-x/notes.txt"));
    assert!(err.to_string().starts_with("Refusing to clean up"));
}

#[test]
fn test_subset_violation_lists_runs() {
    let err = Error::SubsetViolation(vec![7, 9]);
    assert_eq!(
        err.to_string(),
        "Processed runs without an unprocessed marker: [7, 9]"
    );
}

#[test]
fn test_invalid_config_formatting() {
    let err = Error::InvalidConfig("tags cannot be empty".to_string());
    assert_eq!(err.to_string(), "Invalid config: tags cannot be empty");
}
