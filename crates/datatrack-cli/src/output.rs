// Rust guideline compliant 2026-10-19

//! Output formatting module for the datatrack CLI.
//!
//! This module formats progress reports as plain text with a summary table,
//! or as JSON for machine consumption.

use datatrack_core::{MarkerKind, MarkerLayout, OutputFormat, ProgressReport};
use serde_json::json;
use tabled::{builder::Builder, settings::Style};

/// Output formatter trait.
pub trait ReportFormatter {
    /// Formats a report for a directory that has unprocessed markers.
    ///
    /// # Arguments
    /// * `report` - The scanned report
    /// * `layout` - Marker naming used for the scan
    fn format_report(&self, report: &ProgressReport, layout: &MarkerLayout) -> String;

    /// Formats a report for a directory without unprocessed markers.
    fn format_no_data(&self, report: &ProgressReport) -> String;
}

/// JSON output formatter.
pub struct JsonFormatter;

impl JsonFormatter {
    fn to_json(report: &ProgressReport, status: &str) -> String {
        let fractions = report.fractions();
        let output = json!({
            "status": status,
            "directory": report.directory,
            "unprocessed": report.unprocessed,
            "processed": report.processed,
            "completed": fractions.map(|p| p.completed),
            "remaining": fractions.map(|p| p.remaining),
            "unprocessed_runs": report.unprocessed_runs,
            "processed_runs": report.processed_runs,
            "orphaned_runs": report.orphaned_runs,
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize report" }).to_string())
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_report(&self, report: &ProgressReport, _layout: &MarkerLayout) -> String {
        Self::to_json(report, "ok")
    }

    fn format_no_data(&self, report: &ProgressReport) -> String {
        Self::to_json(report, "no_data")
    }
}

/// Plain text output formatter.
pub struct PlainFormatter;

impl ReportFormatter for PlainFormatter {
    fn format_report(&self, report: &ProgressReport, layout: &MarkerLayout) -> String {
        let mut output = format!("Processed runs {:?}\n", report.processed_runs);

        let mut builder = Builder::default();
        builder.push_record(vec!["Category", "Tag", "Files"]);
        builder.push_record(vec![
            "Unprocessed".to_string(),
            layout.tag(MarkerKind::Unprocessed).to_string(),
            report.unprocessed.to_string(),
        ]);
        builder.push_record(vec![
            "Processed".to_string(),
            layout.tag(MarkerKind::Processed).to_string(),
            report.processed.to_string(),
        ]);
        let mut table = builder.build();
        table.with(Style::modern());
        output.push_str(&table.to_string());
        output.push('\n');

        if let Some(progress) = report.fractions() {
            output.push_str(&format!(
                "Completed: {:.1}%  Remaining: {:.1}%\n",
                progress.completed * 100.0,
                progress.remaining * 100.0
            ));
        }
        output
    }

    fn format_no_data(&self, report: &ProgressReport) -> String {
        format!("No data files found in {}", report.directory.display())
    }
}

/// Creates the formatter for an output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
