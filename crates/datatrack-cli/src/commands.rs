// Rust guideline compliant 2026-10-19

//! Command implementations for the datatrack CLI.

pub mod check;
pub mod example;

use crate::chart::TerminalPieRenderer;
use anyhow::Result;
use datatrack_core::{ChartRenderer, Config, NullRenderer, OutputFormat, ProgressChecker};

/// Settings shared by every command, resolved from config, environment and flags.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Effective configuration.
    pub config: Config,
    /// Whether the pie chart is drawn.
    pub chart: bool,
    /// Whether terminal output is colored.
    pub use_color: bool,
}

impl Settings {
    /// Builds the progress checker described by the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured tags are invalid.
    pub fn checker(&self) -> Result<ProgressChecker> {
        let layout = self.config.layout()?;
        Ok(ProgressChecker::new(layout, self.config.match_mode)
            .strict_subset(self.config.strict_subset))
    }

    /// Returns the chart renderer. JSON output never draws a chart.
    pub fn renderer(&self) -> Box<dyn ChartRenderer> {
        if self.chart && self.config.output_format == OutputFormat::Plain {
            Box::new(TerminalPieRenderer::stdout(self.use_color))
        } else {
            Box::new(NullRenderer)
        }
    }

    /// Returns whether human-oriented messages may go to stdout.
    pub fn is_plain(&self) -> bool {
        self.config.output_format == OutputFormat::Plain
    }
}
