//! TOML configuration file support.
//!
//! Settings that rarely change between runs of the same logger can live in a
//! config file instead of on the command line:
//!
//! ```toml
//! # ampcap.toml
//! [input]
//! skip_rows = 1
//! max_rows = 12990
//! delimiter = ","
//! timestamp_format = "%m/%d/%Y %H:%M:%S"
//!
//! [estimate]
//! duration_s = 12997.0
//! target_days = 7.0
//! ```
//!
//! Command-line flags override anything set here.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use ampcap::DurationSource;

/// Root configuration structure for ampcap.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// How the current log is read.
    #[serde(default)]
    pub input: InputConfig,

    /// Estimate parameters.
    #[serde(default)]
    pub estimate: EstimateConfig,
}

/// Configuration for reading the current log.
#[derive(Debug, Default, Deserialize)]
pub struct InputConfig {
    /// Lines to discard before the header row.
    pub skip_rows: Option<usize>,

    /// Maximum number of data rows to read.
    pub max_rows: Option<usize>,

    /// Single-character field delimiter.
    pub delimiter: Option<char>,

    /// chrono layout for the timestamp column.
    pub timestamp_format: Option<String>,

    /// Name of the timestamp column.
    pub timestamp_column: Option<String>,

    /// Name of the elapsed time column.
    pub time_column: Option<String>,

    /// Name of the current column.
    pub current_column: Option<String>,
}

/// Derived duration source names accepted in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DurationFrom {
    /// Span of the time column.
    TimeSpan,
    /// Span of the timestamp column.
    WallClock,
}

impl From<DurationFrom> for DurationSource {
    fn from(value: DurationFrom) -> Self {
        match value {
            DurationFrom::TimeSpan => DurationSource::TimeSpan,
            DurationFrom::WallClock => DurationSource::WallClock,
        }
    }
}

/// Configuration for the estimate command.
#[derive(Debug, Default, Deserialize)]
pub struct EstimateConfig {
    /// Fixed measurement window in seconds.
    pub duration_s: Option<f64>,

    /// Derive the measurement window from the data instead.
    pub duration_from: Option<DurationFrom>,

    /// Desired autonomy in days.
    pub target_days: Option<f64>,
}

impl EstimateConfig {
    /// The duration source this section selects, if any.
    pub fn duration(&self) -> Result<Option<DurationSource>> {
        match (self.duration_s, self.duration_from) {
            (Some(_), Some(_)) => {
                bail!("[estimate] sets both duration_s and duration_from; pick one")
            }
            (Some(seconds), None) => Ok(Some(DurationSource::Fixed(seconds))),
            (None, Some(from)) => Ok(Some(from.into())),
            (None, None) => Ok(None),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}
