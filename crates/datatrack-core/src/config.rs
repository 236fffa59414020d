// Rust guideline compliant 2026-10-19

//! Configuration management for datatrack.

use crate::marker::{
    MarkerLayout, MatchMode, DEFAULT_EXTENSION, DEFAULT_PROCESSED_TAG, DEFAULT_UNPROCESSED_TAG,
};
use crate::provision::{DEFAULT_FIRST_RUN, DEFAULT_LAST_RUN};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "datatrack.toml";

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable text, table and chart.
    #[default]
    Plain,
    /// A single JSON object, no chart.
    Json,
}

/// Run numbers used by the built-in example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleConfig {
    /// First run number, inclusive.
    #[serde(default = "default_first_run")]
    pub first_run: u64,

    /// Last run number, inclusive.
    #[serde(default = "default_last_run")]
    pub last_run: u64,
}

fn default_first_run() -> u64 {
    DEFAULT_FIRST_RUN
}

fn default_last_run() -> u64 {
    DEFAULT_LAST_RUN
}

impl Default for ExampleConfig {
    fn default() -> Self {
        Self {
            first_run: default_first_run(),
            last_run: default_last_run(),
        }
    }
}

impl ExampleConfig {
    /// Returns the configured run numbers.
    pub fn runs(&self) -> RangeInclusive<u64> {
        self.first_run..=self.last_run
    }
}

/// Configuration for datatrack behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tag of unprocessed marker files.
    #[serde(default = "default_unprocessed_tag")]
    pub unprocessed_tag: String,

    /// Tag of processed marker files.
    #[serde(default = "default_processed_tag")]
    pub processed_tag: String,

    /// Marker file extension, including the dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// How file names are classified.
    #[serde(default)]
    pub match_mode: MatchMode,

    /// Whether processed runs must all have an unprocessed marker.
    #[serde(default)]
    pub strict_subset: bool,

    /// Default output format.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Built-in example settings.
    #[serde(default)]
    pub example: ExampleConfig,
}

fn default_unprocessed_tag() -> String {
    DEFAULT_UNPROCESSED_TAG.to_string()
}

fn default_processed_tag() -> String {
    DEFAULT_PROCESSED_TAG.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unprocessed_tag: default_unprocessed_tag(),
            processed_tag: default_processed_tag(),
            extension: default_extension(),
            match_mode: MatchMode::default(),
            strict_subset: false,
            output_format: OutputFormat::default(),
            example: ExampleConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `path`, if it exists
    /// 3. Environment variables with `DATATRACK_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            config = toml::from_str(&content).map_err(|e| {
                Error::InvalidConfig(format!("{}: {}", path.display(), e))
            })?;
            tracing::debug!(path = %path.display(), "loaded config file");
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `DATATRACK_UNPROCESSED_TAG` - Tag of unprocessed markers
    /// - `DATATRACK_PROCESSED_TAG` - Tag of processed markers
    /// - `DATATRACK_EXTENSION` - Marker extension
    /// - `DATATRACK_MATCH_MODE` - structured/substring
    /// - `DATATRACK_STRICT_SUBSET` - true/false
    /// - `DATATRACK_OUTPUT_FORMAT` - plain/json
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("DATATRACK_UNPROCESSED_TAG") {
            self.unprocessed_tag = val;
        }

        if let Ok(val) = std::env::var("DATATRACK_PROCESSED_TAG") {
            self.processed_tag = val;
        }

        if let Ok(val) = std::env::var("DATATRACK_EXTENSION") {
            self.extension = val;
        }

        if let Ok(val) = std::env::var("DATATRACK_MATCH_MODE") {
            self.match_mode = val.parse().map_err(|_| {
                Error::InvalidConfig(
                    "DATATRACK_MATCH_MODE must be structured or substring".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("DATATRACK_STRICT_SUBSET") {
            self.strict_subset = val.parse().map_err(|_| {
                Error::InvalidConfig("DATATRACK_STRICT_SUBSET must be true or false".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("DATATRACK_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "plain" => OutputFormat::Plain,
                "json" => OutputFormat::Json,
                _ => {
                    return Err(Error::InvalidConfig(
                        "DATATRACK_OUTPUT_FORMAT must be plain or json".to_string(),
                    ))
                }
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tags cannot form an unambiguous marker layout
    /// - `example.first_run` is greater than `example.last_run`
    pub fn validate(&self) -> Result<()> {
        self.layout()?;

        if self.example.first_run > self.example.last_run {
            return Err(Error::InvalidConfig(format!(
                "example.first_run ({}) must not exceed example.last_run ({})",
                self.example.first_run, self.example.last_run
            )));
        }

        Ok(())
    }

    /// Builds the marker layout described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the tags are empty, equal, or ambiguous.
    pub fn layout(&self) -> Result<MarkerLayout> {
        MarkerLayout::new(
            self.unprocessed_tag.clone(),
            self.processed_tag.clone(),
            self.extension.clone(),
        )
        .map_err(|e| match e {
            Error::InvalidInput(msg) => Error::InvalidConfig(msg),
            other => other,
        })
    }
}
