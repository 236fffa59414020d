// Rust guideline compliant 2026-10-19

//! Example data provisioning and cleanup.
//!
//! The provisioner fabricates a directory of empty marker files: an unprocessed
//! marker for every run and a processed marker for a random subset of runs.
//! Provisioning and cleanup are explicit paired calls.

use crate::marker::{MarkerKind, MarkerLayout};
use crate::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// First run number of the built-in example.
pub const DEFAULT_FIRST_RUN: u64 = 2113;

/// Last run number of the built-in example.
pub const DEFAULT_LAST_RUN: u64 = 2451;

/// Returns the run numbers used by the built-in example.
pub fn default_runs() -> RangeInclusive<u64> {
    DEFAULT_FIRST_RUN..=DEFAULT_LAST_RUN
}

/// A fabricated dataset living in a directory the provisioner created.
#[derive(Debug)]
pub struct ExampleDataset {
    directory: PathBuf,
    runs: Vec<u64>,
    processed: BTreeSet<u64>,
    files: BTreeSet<String>,
}

impl ExampleDataset {
    /// Returns the dataset directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Returns every run that received an unprocessed marker.
    pub fn runs(&self) -> &[u64] {
        &self.runs
    }

    /// Returns the runs that also received a processed marker.
    pub fn processed(&self) -> &BTreeSet<u64> {
        &self.processed
    }

    /// Deletes the dataset directory.
    ///
    /// Nothing is deleted unless every entry in the directory is a file this
    /// dataset wrote.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The directory holds an entry the provisioner did not write
    /// - A file or the directory cannot be removed
    pub fn cleanup(self) -> Result<()> {
        let mut owned = Vec::new();
        for entry in fs::read_dir(&self.directory)? {
            let entry = entry?;
            let path = entry.path();
            let known = entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.files.contains(name));
            if !known || !entry.file_type()?.is_file() {
                return Err(Error::ForeignEntry(path));
            }
            owned.push(path);
        }

        for path in &owned {
            fs::remove_file(path)?;
        }
        fs::remove_dir(&self.directory)?;
        tracing::info!(
            directory = %self.directory.display(),
            files = owned.len(),
            "removed example data"
        );
        Ok(())
    }
}

/// Fabricates example datasets from an injectable random source.
#[derive(Debug)]
pub struct Provisioner<R> {
    rng: R,
    layout: MarkerLayout,
}

impl<R: Rng> Provisioner<R> {
    /// Creates a provisioner drawing from `rng`.
    pub fn new(rng: R, layout: MarkerLayout) -> Self {
        Self { rng, layout }
    }

    /// Picks a random-size random subset of `runs` to mark as processed.
    ///
    /// A size `m` is drawn from `0..runs.len()`, then `m` runs are drawn with
    /// replacement; duplicates collapse, so the subset is usually smaller than `m`.
    pub fn choose_processed(&mut self, runs: &[u64]) -> BTreeSet<u64> {
        if runs.is_empty() {
            return BTreeSet::new();
        }
        let draws = self.rng.random_range(0..runs.len());
        (0..draws)
            .map(|_| runs[self.rng.random_range(0..runs.len())])
            .collect()
    }

    /// Provisions a dataset in a fresh directory under the system temp dir.
    ///
    /// # Errors
    ///
    /// Returns an error if `runs` is empty or any file cannot be written.
    pub fn provision(&mut self, runs: &[u64]) -> Result<ExampleDataset> {
        self.provision_in(&std::env::temp_dir(), runs)
    }

    /// Provisions a dataset in a fresh directory under `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if `runs` is empty or any file cannot be written.
    pub fn provision_in(&mut self, parent: &Path, runs: &[u64]) -> Result<ExampleDataset> {
        if runs.is_empty() {
            return Err(Error::InvalidInput(
                "at least one run number is required".to_string(),
            ));
        }

        // The guard removes the directory if any marker fails to write.
        let guard = tempfile::Builder::new()
            .prefix("datatrack-")
            .tempdir_in(parent)?;
        let processed = self.choose_processed(runs);
        tracing::info!(
            directory = %guard.path().display(),
            runs = runs.len(),
            processed = processed.len(),
            "writing example data"
        );

        let mut files = BTreeSet::new();
        for &run in runs {
            let mut kinds = vec![MarkerKind::Unprocessed];
            if processed.contains(&run) {
                kinds.push(MarkerKind::Processed);
            }
            for kind in kinds {
                let name = self.layout.file_name(kind, run);
                fs::File::create(guard.path().join(&name))?;
                files.insert(name);
            }
        }

        Ok(ExampleDataset {
            directory: guard.keep(),
            runs: runs.to_vec(),
            processed,
            files,
        })
    }
}

impl Provisioner<StdRng> {
    /// Creates a provisioner with a deterministic seed.
    pub fn seeded(seed: u64, layout: MarkerLayout) -> Self {
        Self::new(StdRng::seed_from_u64(seed), layout)
    }

    /// Creates a provisioner seeded from the operating system.
    pub fn from_entropy(layout: MarkerLayout) -> Self {
        Self::new(StdRng::from_os_rng(), layout)
    }
}

/// Deletes every entry directly inside `directory`, then the directory itself.
///
/// This is not recursive and performs no ownership check.
///
/// # Errors
///
/// Returns an error if the directory contains a subdirectory or any removal fails.
pub fn cleanup_directory(directory: &Path) -> Result<()> {
    for entry in fs::read_dir(directory)? {
        fs::remove_file(entry?.path())?;
    }
    fs::remove_dir(directory)?;
    Ok(())
}
