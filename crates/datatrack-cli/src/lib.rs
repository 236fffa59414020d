// Rust guideline compliant 2026-10-19

//! Datatrack CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod chart;
pub mod commands;
pub mod logging;
pub mod output;
pub mod terminal;

pub use chart::TerminalPieRenderer;
pub use commands::Settings;
pub use output::{create_formatter, ReportFormatter};
pub use terminal::should_use_color;
