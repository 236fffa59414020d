// Rust guideline compliant 2026-10-19

//! Integration tests for example provisioning and cleanup.

use datatrack_core::provision::default_runs;
use datatrack_core::{
    cleanup_directory, CaptureRenderer, CheckOutcome, MarkerLayout, MatchMode, ProgressChecker,
    Provisioner,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_same_seed_same_dataset() {
    let parent = TempDir::new().expect("Failed to create temp directory");
    let runs: Vec<u64> = default_runs().collect();

    let first = Provisioner::seeded(2024, MarkerLayout::default())
        .provision_in(parent.path(), &runs)
        .expect("provision first");
    let second = Provisioner::seeded(2024, MarkerLayout::default())
        .provision_in(parent.path(), &runs)
        .expect("provision second");

    assert_ne!(first.directory(), second.directory());
    assert_eq!(first.processed(), second.processed());

    let mut names_first: Vec<_> = fs::read_dir(first.directory())
        .expect("read first")
        .map(|e| e.expect("entry").file_name())
        .collect();
    let mut names_second: Vec<_> = fs::read_dir(second.directory())
        .expect("read second")
        .map(|e| e.expect("entry").file_name())
        .collect();
    names_first.sort();
    names_second.sort();
    assert_eq!(names_first, names_second);

    first.cleanup().expect("cleanup first");
    second.cleanup().expect("cleanup second");
}

#[test]
fn test_provisioned_dataset_ratio_matches_subset() {
    let parent = TempDir::new().expect("Failed to create temp directory");
    let runs: Vec<u64> = (100..150).collect();
    let dataset = Provisioner::seeded(9, MarkerLayout::default())
        .provision_in(parent.path(), &runs)
        .expect("provision");

    let mut renderer = CaptureRenderer::new();
    let outcome = ProgressChecker::new(MarkerLayout::default(), MatchMode::Structured)
        .strict_subset(true)
        .check(dataset.directory(), &mut renderer)
        .expect("check");

    let CheckOutcome::Charted(report) = outcome else {
        panic!("expected a chart");
    };
    assert_eq!(report.unprocessed, runs.len());
    assert_eq!(report.processed, dataset.processed().len());
    assert_eq!(
        report.processed_runs,
        dataset.processed().iter().copied().collect::<Vec<_>>()
    );
    assert!(report.orphaned_runs.is_empty());

    dataset.cleanup().expect("cleanup");
}

#[test]
fn test_cleanup_leaves_no_trace() {
    let parent = TempDir::new().expect("Failed to create temp directory");
    let dataset = Provisioner::seeded(5, MarkerLayout::default())
        .provision_in(parent.path(), &[1, 2, 3, 4])
        .expect("provision");
    let directory = dataset.directory().to_path_buf();
    assert!(directory.exists());

    dataset.cleanup().expect("cleanup");
    assert!(!directory.exists());
    assert_eq!(fs::read_dir(parent.path()).expect("read parent").count(), 0);
}

#[test]
fn test_cleanup_tolerates_deleted_markers() {
    let parent = TempDir::new().expect("Failed to create temp directory");
    let dataset = Provisioner::seeded(5, MarkerLayout::default())
        .provision_in(parent.path(), &[1, 2])
        .expect("provision");
    fs::remove_file(dataset.directory().join("Raw1.data")).expect("remove marker");
    let directory = dataset.directory().to_path_buf();

    dataset.cleanup().expect("cleanup");
    assert!(!directory.exists());
}

#[test]
fn test_cleanup_directory_on_provisioned_dataset() {
    let parent = TempDir::new().expect("Failed to create temp directory");
    let dataset = Provisioner::seeded(11, MarkerLayout::default())
        .provision_in(parent.path(), &[7, 8, 9])
        .expect("provision");
    let directory = dataset.directory().to_path_buf();

    cleanup_directory(&directory).expect("cleanup directory");
    assert!(!directory.exists());
}
