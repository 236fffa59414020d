// Rust guideline compliant 2026-10-19

//! Implementation of the progress check.
//!
//! Scans a directory, draws the pie chart and prints the report.

use crate::commands::Settings;
use crate::output::create_formatter;
use crate::terminal::print_warning;
use anyhow::{Context, Result};
use datatrack_core::CheckOutcome;
use std::path::Path;

/// Executes the progress check for `directory`.
///
/// A directory without unprocessed markers prints a notice and succeeds.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be read
/// - A marker name cannot be parsed in substring mode
/// - Strict subset checking finds orphaned processed runs
/// - The chart cannot be drawn
pub fn execute(directory: &Path, settings: &Settings) -> Result<()> {
    let checker = settings.checker()?;
    let mut renderer = settings.renderer();
    let formatter = create_formatter(settings.config.output_format);

    let outcome = checker
        .check(directory, renderer.as_mut())
        .with_context(|| format!("Failed to check progress in {}", directory.display()))?;

    match outcome {
        CheckOutcome::NoData(report) => {
            println!("{}", formatter.format_no_data(&report));
        }
        CheckOutcome::Charted(report) => {
            if settings.is_plain() && !report.orphaned_runs.is_empty() {
                print_warning(&format!(
                    "{} processed run(s) have no unprocessed marker: {:?}",
                    report.orphaned_runs.len(),
                    report.orphaned_runs
                ));
            }
            print!("{}", formatter.format_report(&report, checker.layout()));
            if !settings.is_plain() {
                println!();
            }
        }
    }

    Ok(())
}
