// Rust guideline compliant 2026-10-19

//! Marker file naming.
//!
//! A marker is an empty file named `<tag><run><extension>`. Its existence is the
//! only signal: an unprocessed marker says the raw data for a run exists, a
//! processed marker says the run has been processed.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default tag for unprocessed markers.
pub const DEFAULT_UNPROCESSED_TAG: &str = "Raw";

/// Default tag for processed markers.
pub const DEFAULT_PROCESSED_TAG: &str = "Run";

/// Default marker file extension.
pub const DEFAULT_EXTENSION: &str = ".data";

/// Category a marker file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    /// Raw data exists for the run.
    Unprocessed,
    /// The run has been processed.
    Processed,
}

/// How file names are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Exact `<tag><digits><extension>` names only.
    #[default]
    Structured,
    /// Any name containing the tag. One name may count for both kinds.
    Substring,
}

impl FromStr for MatchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "structured" => Ok(MatchMode::Structured),
            "substring" => Ok(MatchMode::Substring),
            other => Err(Error::InvalidInput(format!(
                "match mode must be structured or substring, got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Structured => f.write_str("structured"),
            MatchMode::Substring => f.write_str("substring"),
        }
    }
}

/// A parsed marker file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    /// Marker category.
    pub kind: MarkerKind,
    /// Run number encoded in the name.
    pub run: u64,
}

/// Naming convention shared by the provisioner and the progress calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerLayout {
    unprocessed_tag: String,
    processed_tag: String,
    extension: String,
}

impl Default for MarkerLayout {
    fn default() -> Self {
        Self {
            unprocessed_tag: DEFAULT_UNPROCESSED_TAG.to_string(),
            processed_tag: DEFAULT_PROCESSED_TAG.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl MarkerLayout {
    /// Creates a layout from explicit tags and extension.
    ///
    /// # Arguments
    ///
    /// * `unprocessed_tag` - Tag of unprocessed markers
    /// * `processed_tag` - Tag of processed markers
    /// * `extension` - Extension shared by both kinds, including the dot
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either tag is empty
    /// - Both tags are equal or differ only by trailing digits
    /// - A tag or the extension contains a path separator
    pub fn new(
        unprocessed_tag: impl Into<String>,
        processed_tag: impl Into<String>,
        extension: impl Into<String>,
    ) -> Result<Self> {
        let layout = Self {
            unprocessed_tag: unprocessed_tag.into(),
            processed_tag: processed_tag.into(),
            extension: extension.into(),
        };
        if layout.unprocessed_tag.is_empty() || layout.processed_tag.is_empty() {
            return Err(Error::InvalidInput("tags cannot be empty".to_string()));
        }
        if layout.unprocessed_tag == layout.processed_tag {
            return Err(Error::InvalidInput(format!(
                "unprocessed and processed tags must differ, both are '{}'",
                layout.processed_tag
            )));
        }
        for part in [
            &layout.unprocessed_tag,
            &layout.processed_tag,
            &layout.extension,
        ] {
            if part.contains(['/', std::path::MAIN_SEPARATOR]) {
                return Err(Error::InvalidInput(format!(
                    "'{}' cannot contain a path separator",
                    part
                )));
            }
        }
        if tags_overlap(&layout.unprocessed_tag, &layout.processed_tag)
            || tags_overlap(&layout.processed_tag, &layout.unprocessed_tag)
        {
            return Err(Error::InvalidInput(format!(
                "tags '{}' and '{}' differ only by trailing digits",
                layout.unprocessed_tag, layout.processed_tag
            )));
        }
        Ok(layout)
    }

    /// Returns the tag for the given marker kind.
    pub fn tag(&self, kind: MarkerKind) -> &str {
        match kind {
            MarkerKind::Unprocessed => &self.unprocessed_tag,
            MarkerKind::Processed => &self.processed_tag,
        }
    }

    /// Returns the marker extension.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Formats the file name of a marker.
    pub fn file_name(&self, kind: MarkerKind, run: u64) -> String {
        format!("{}{}{}", self.tag(kind), run, self.extension)
    }

    /// Parses a file name as an exact `<tag><digits><extension>` marker.
    ///
    /// Returns `None` for anything else, including names that merely contain a tag.
    pub fn parse(&self, name: &str) -> Option<Marker> {
        [MarkerKind::Unprocessed, MarkerKind::Processed]
            .into_iter()
            .find_map(|kind| {
                extract_run_number(name, self.tag(kind), &self.extension)
                    .ok()
                    .map(|run| Marker { kind, run })
            })
    }

    /// Returns whether `name` contains the tag of `kind` anywhere.
    pub fn contains_tag(&self, name: &str, kind: MarkerKind) -> bool {
        name.contains(self.tag(kind))
    }
}

/// `R1` followed by `12` reads the same as `R` followed by `112`.
fn tags_overlap(longer: &str, shorter: &str) -> bool {
    longer
        .strip_prefix(shorter)
        .is_some_and(|rest| rest.bytes().all(|b| b.is_ascii_digit()))
}

/// Returns the integer `N` from a file name of the form `<prefix>N<suffix>`.
///
/// The prefix and suffix are removed by position, so digits inside them never
/// eat into the run number.
///
/// # Errors
///
/// Returns [`Error::MalformedName`] if the prefix or suffix is missing, or the
/// remainder is not a non-empty decimal number.
pub fn extract_run_number(name: &str, prefix: &str, suffix: &str) -> Result<u64> {
    let rest = name
        .strip_prefix(prefix)
        .ok_or_else(|| Error::malformed(name, format!("missing prefix '{}'", prefix)))?;
    let digits = rest
        .strip_suffix(suffix)
        .ok_or_else(|| Error::malformed(name, format!("missing suffix '{}'", suffix)))?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::malformed(
            name,
            format!("'{}' is not a run number", digits),
        ));
    }
    digits
        .parse()
        .map_err(|e| Error::malformed(name, format!("run number out of range: {}", e)))
}
