// Rust guideline compliant 2026-10-19

//! Datatrack Core Library
//!
//! This crate provides the building blocks for tracking data processing progress:
//! - Marker file naming (layout, structured parsing, run number extraction)
//! - Progress calculation over a directory of markers
//! - Pie chart model and the renderer seam
//! - Example dataset provisioning and cleanup
//! - Configuration and error types

pub mod chart;
pub mod config;
pub mod error;
pub mod marker;
pub mod progress;
pub mod provision;

pub use chart::{CaptureRenderer, ChartRenderer, NullRenderer, PieChart, PieSlice, SliceColor};
pub use config::{Config, ExampleConfig, OutputFormat};
pub use error::{Error, Result};
pub use marker::{extract_run_number, Marker, MarkerKind, MarkerLayout, MatchMode};
pub use progress::{CheckOutcome, Progress, ProgressChecker, ProgressReport};
pub use provision::{cleanup_directory, ExampleDataset, Provisioner};
