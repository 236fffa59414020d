// Rust guideline compliant 2026-10-19

//! Progress calculation over a directory of marker files.

use crate::chart::{ChartRenderer, PieChart};
use crate::marker::{extract_run_number, MarkerKind, MarkerLayout, MatchMode};
use crate::{Error, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Completed and remaining shares of the work.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    /// Processed markers divided by unprocessed markers.
    pub completed: f64,
    /// `1 - completed`.
    pub remaining: f64,
}

/// Marker counts and run numbers found in one directory.
///
/// Counts are per file while run lists hold distinct numbers, so `Raw2.data`
/// and `Raw02.data` count twice but list run 2 once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    /// Directory that was scanned.
    pub directory: PathBuf,
    /// Number of entries classified as unprocessed.
    pub unprocessed: usize,
    /// Number of entries classified as processed.
    pub processed: usize,
    /// Run numbers of unprocessed markers, sorted.
    pub unprocessed_runs: Vec<u64>,
    /// Run numbers of processed markers, sorted.
    pub processed_runs: Vec<u64>,
    /// Processed runs that have no unprocessed marker, sorted.
    pub orphaned_runs: Vec<u64>,
}

impl ProgressReport {
    /// Returns the progress fractions, or `None` if no unprocessed markers exist.
    pub fn fractions(&self) -> Option<Progress> {
        if self.unprocessed == 0 {
            return None;
        }
        let completed = self.processed as f64 / self.unprocessed as f64;
        Some(Progress {
            completed,
            remaining: 1.0 - completed,
        })
    }
}

/// Result of a progress check.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// No unprocessed markers were found; nothing was rendered.
    NoData(ProgressReport),
    /// The chart was rendered for this report.
    Charted(ProgressReport),
}

/// Scans directories and computes processing progress.
#[derive(Debug, Clone)]
pub struct ProgressChecker {
    layout: MarkerLayout,
    mode: MatchMode,
    strict_subset: bool,
}

impl ProgressChecker {
    /// Creates a checker.
    ///
    /// # Arguments
    ///
    /// * `layout` - Marker naming convention
    /// * `mode` - How names are classified
    pub fn new(layout: MarkerLayout, mode: MatchMode) -> Self {
        Self {
            layout,
            mode,
            strict_subset: false,
        }
    }

    /// Fails checks whose processed runs are not all backed by unprocessed markers.
    pub fn strict_subset(mut self, strict: bool) -> Self {
        self.strict_subset = strict;
        self
    }

    /// Returns the marker layout.
    pub fn layout(&self) -> &MarkerLayout {
        &self.layout
    }

    /// Lists `directory` and counts its markers.
    ///
    /// Subdirectories and names that are not valid UTF-8 are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The directory cannot be read
    /// - In substring mode, a processed-tagged name carries no run number
    /// - Strict subset checking is on and orphaned processed runs exist
    pub fn scan(&self, directory: &Path) -> Result<ProgressReport> {
        let mut unprocessed = 0;
        let mut processed = 0;
        let mut unprocessed_runs = BTreeSet::new();
        let mut processed_runs = BTreeSet::new();

        for entry in fs::read_dir(directory)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                tracing::debug!(path = %entry.path().display(), "skipping subdirectory");
                continue;
            }
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 file name");
                continue;
            };

            match self.mode {
                MatchMode::Structured => match self.layout.parse(name) {
                    Some(marker) if marker.kind == MarkerKind::Unprocessed => {
                        unprocessed += 1;
                        record_run(&mut unprocessed_runs, marker.run, name);
                    }
                    Some(marker) => {
                        processed += 1;
                        record_run(&mut processed_runs, marker.run, name);
                    }
                    None => tracing::debug!(name, "not a marker"),
                },
                MatchMode::Substring => {
                    if self.layout.contains_tag(name, MarkerKind::Unprocessed) {
                        unprocessed += 1;
                        if let Ok(run) = self.extract(name, MarkerKind::Unprocessed) {
                            record_run(&mut unprocessed_runs, run, name);
                        }
                    }
                    if self.layout.contains_tag(name, MarkerKind::Processed) {
                        processed += 1;
                        let run = self.extract(name, MarkerKind::Processed)?;
                        record_run(&mut processed_runs, run, name);
                    }
                }
            }
        }

        let orphaned_runs: Vec<u64> = processed_runs
            .difference(&unprocessed_runs)
            .copied()
            .collect();
        if !orphaned_runs.is_empty() {
            tracing::warn!(?orphaned_runs, "processed runs without unprocessed markers");
            if self.strict_subset {
                return Err(Error::SubsetViolation(orphaned_runs));
            }
        }

        tracing::debug!(
            directory = %directory.display(),
            unprocessed,
            processed,
            mode = %self.mode,
            "scanned directory"
        );

        Ok(ProgressReport {
            directory: directory.to_path_buf(),
            unprocessed,
            processed,
            unprocessed_runs: unprocessed_runs.into_iter().collect(),
            processed_runs: processed_runs.into_iter().collect(),
            orphaned_runs,
        })
    }

    /// Scans `directory` and renders the progress chart.
    ///
    /// Nothing is rendered when the directory holds no unprocessed markers.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan fails or the renderer fails.
    pub fn check(
        &self,
        directory: &Path,
        renderer: &mut dyn ChartRenderer,
    ) -> Result<CheckOutcome> {
        let report = self.scan(directory)?;
        let Some(progress) = report.fractions() else {
            tracing::info!(directory = %directory.display(), "no data files found");
            return Ok(CheckOutcome::NoData(report));
        };
        renderer.render(&PieChart::progress(&progress))?;
        Ok(CheckOutcome::Charted(report))
    }

    fn extract(&self, name: &str, kind: MarkerKind) -> Result<u64> {
        extract_run_number(name, self.layout.tag(kind), self.layout.extension())
    }
}

/// Adds `run` to `runs`, warning when another file already named the same run.
fn record_run(runs: &mut BTreeSet<u64>, run: u64, name: &str) {
    if !runs.insert(run) {
        tracing::warn!(run, name, "run number appears in more than one file");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::CaptureRenderer;
    use tempfile::TempDir;

    fn touch_all(dir: &Path, names: &[&str]) {
        for name in names {
            fs::File::create(dir.join(name)).unwrap();
        }
    }

    fn checker(mode: MatchMode) -> ProgressChecker {
        ProgressChecker::new(MarkerLayout::default(), mode)
    }

    #[test]
    fn test_fractions_none_without_unprocessed() {
        let report = ProgressReport {
            directory: PathBuf::from("x"),
            unprocessed: 0,
            processed: 3,
            unprocessed_runs: vec![],
            processed_runs: vec![1, 2, 3],
            orphaned_runs: vec![1, 2, 3],
        };
        assert_eq!(report.fractions(), None);
    }

    #[test]
    fn test_scan_mixed_directory() {
        let temp_dir = TempDir::new().unwrap();
        touch_all(
            temp_dir.path(),
            &["Raw2113.data", "Raw2114.data", "Run2114.data", "README"],
        );

        let report = checker(MatchMode::Structured).scan(temp_dir.path()).unwrap();
        assert_eq!(report.unprocessed, 2);
        assert_eq!(report.processed, 1);
        assert_eq!(report.unprocessed_runs, vec![2113, 2114]);
        assert_eq!(report.processed_runs, vec![2114]);
        assert!(report.orphaned_runs.is_empty());
        let progress = report.fractions().unwrap();
        assert_eq!(progress.completed, 0.5);
        assert_eq!(progress.remaining, 0.5);
    }

    #[test]
    fn test_mixed_directory_agrees_across_match_modes() {
        let temp_dir = TempDir::new().unwrap();
        touch_all(temp_dir.path(), &["Raw2113.data", "Raw2114.data", "Run2114.data"]);

        for mode in [MatchMode::Structured, MatchMode::Substring] {
            let report = checker(mode).scan(temp_dir.path()).unwrap();
            assert_eq!((report.unprocessed, report.processed), (2, 1), "{}", mode);
            assert_eq!(report.processed_runs, vec![2114], "{}", mode);
            assert_eq!(report.fractions().unwrap().completed, 0.5, "{}", mode);
        }
    }

    #[test]
    fn test_zero_padded_duplicates_count_per_file() {
        let temp_dir = TempDir::new().unwrap();
        touch_all(
            temp_dir.path(),
            &["Raw2.data", "Raw02.data", "Run2.data", "Run002.data"],
        );

        let report = checker(MatchMode::Structured).scan(temp_dir.path()).unwrap();
        assert_eq!((report.unprocessed, report.processed), (2, 2));
        assert_eq!(report.unprocessed_runs, vec![2]);
        assert_eq!(report.processed_runs, vec![2]);
        assert!(report.orphaned_runs.is_empty());
    }

    #[test]
    fn test_substring_mode_counts_both_tags() {
        let temp_dir = TempDir::new().unwrap();
        touch_all(temp_dir.path(), &["Raw1.data", "Raw2.data", "RawRun2.data"]);

        let structured = checker(MatchMode::Structured).scan(temp_dir.path()).unwrap();
        assert_eq!((structured.unprocessed, structured.processed), (2, 0));

        // "RawRun2.data" contains "Run" but does not start with it.
        let err = checker(MatchMode::Substring)
            .scan(temp_dir.path())
            .unwrap_err();
        assert!(matches!(err, Error::MalformedName { .. }));
    }

    #[test]
    fn test_substring_mode_counts_tagged_names() {
        let temp_dir = TempDir::new().unwrap();
        touch_all(temp_dir.path(), &["Raw1.data", "Raw2.data", "Run2.data", "Raw3.old"]);

        let report = checker(MatchMode::Substring).scan(temp_dir.path()).unwrap();
        assert_eq!(report.unprocessed, 3);
        assert_eq!(report.processed, 1);
        assert_eq!(report.unprocessed_runs, vec![1, 2]);
        assert_eq!(report.processed_runs, vec![2]);
    }

    #[test]
    fn test_scan_skips_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("Raw9.data")).unwrap();
        touch_all(temp_dir.path(), &["Raw1.data"]);

        let report = checker(MatchMode::Structured).scan(temp_dir.path()).unwrap();
        assert_eq!(report.unprocessed, 1);
    }

    #[test]
    fn test_orphans_reported_or_rejected() {
        let temp_dir = TempDir::new().unwrap();
        touch_all(temp_dir.path(), &["Raw1.data", "Run1.data", "Run7.data"]);

        let report = checker(MatchMode::Structured).scan(temp_dir.path()).unwrap();
        assert_eq!(report.orphaned_runs, vec![7]);
        assert_eq!(report.fractions().unwrap().completed, 2.0);

        let err = checker(MatchMode::Structured)
            .strict_subset(true)
            .scan(temp_dir.path())
            .unwrap_err();
        assert!(matches!(err, Error::SubsetViolation(runs) if runs == vec![7]));
    }

    #[test]
    fn test_check_empty_directory_renders_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut renderer = CaptureRenderer::new();

        let outcome = checker(MatchMode::Structured)
            .check(temp_dir.path(), &mut renderer)
            .unwrap();
        let CheckOutcome::NoData(report) = outcome else {
            panic!("expected no data");
        };
        assert_eq!(report.directory, temp_dir.path());
        assert_eq!((report.unprocessed, report.processed), (0, 0));
        assert!(renderer.charts().is_empty());
    }

    #[test]
    fn test_check_missing_directory_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        let mut renderer = CaptureRenderer::new();

        let err = checker(MatchMode::Structured)
            .check(&missing, &mut renderer)
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
