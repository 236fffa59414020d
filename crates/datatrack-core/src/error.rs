// Rust guideline compliant 2026-10-19

//! Error types for the datatrack core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for datatrack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for datatrack operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file or override is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A file name does not follow the `<tag><run><extension>` convention.
    #[error("Malformed marker name '{name}': {reason}")]
    MalformedName {
        /// The offending file name.
        name: String,
        /// Why the name was rejected.
        reason: String,
    },

    /// Cleanup found an entry the provisioner did not write.
    #[error("Refusing to clean up: {0} was not written by the example provisioner")]
    ForeignEntry(PathBuf),

    /// Processed markers exist for runs without an unprocessed marker.
    #[error("Processed runs without an unprocessed marker: {0:?}")]
    SubsetViolation(Vec<u64>),

    /// Invalid caller input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Chart rendering failed.
    #[error("Render error: {0}")]
    Render(String),
}

impl Error {
    pub(crate) fn malformed(name: &str, reason: impl Into<String>) -> Self {
        Error::MalformedName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
