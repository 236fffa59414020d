// Rust guideline compliant 2026-10-19

//! Implementation of the built-in example.
//!
//! Provisions fake data in a temporary directory, checks it and cleans up.

use crate::commands::{check, Settings};
use crate::terminal::print_info;
use anyhow::Result;
use datatrack_core::Provisioner;

/// Runs the progress check against freshly provisioned fake data.
///
/// Cleanup runs even when the check fails; the check error wins.
///
/// # Arguments
///
/// * `settings` - Resolved command settings
/// * `seed` - Optional seed for a reproducible dataset
///
/// # Errors
///
/// Returns an error if provisioning, the check, or cleanup fails.
pub fn execute(settings: &Settings, seed: Option<u64>) -> Result<()> {
    print_info("Running an example with fake data.");

    let layout = settings.config.layout()?;
    let runs: Vec<u64> = settings.config.example.runs().collect();
    let mut provisioner = match seed {
        Some(seed) => Provisioner::seeded(seed, layout),
        None => Provisioner::from_entropy(layout),
    };
    let dataset = provisioner.provision(&runs)?;

    print_info(&format!("Writing data to {}", dataset.directory().display()));
    let faked: Vec<u64> = dataset.processed().iter().copied().collect();
    print_info(&format!("Faking runs {:?}", faked));

    let result = check::execute(dataset.directory(), settings);
    let cleanup = dataset.cleanup();
    result?;
    cleanup?;
    Ok(())
}
