//! Run configuration for the estimate pipeline.

use std::path::PathBuf;

use crate::estimate::DurationSource;
use crate::loader::LoadOptions;

/// Default desired autonomy (days)
pub const DEFAULT_TARGET_DAYS: f64 = 7.0;

/// Everything needed to run an estimate end to end.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorConfig {
    /// Current log to read
    pub input_path: PathBuf,
    /// How the log is read (header rows to skip, row cap, column names)
    pub load: LoadOptions,
    /// Measurement window the charge is averaged over
    pub duration: DurationSource,
    /// Desired autonomy (days)
    pub target_days: f64,
}

impl EstimatorConfig {
    /// Create a configuration with default load options for `input_path`.
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            load: LoadOptions::default(),
            duration: DurationSource::default(),
            target_days: DEFAULT_TARGET_DAYS,
        }
    }

    /// Set the number of leading lines to skip before the header.
    pub fn with_skip_rows(mut self, skip_rows: usize) -> Self {
        self.load.skip_rows = skip_rows;
        self
    }

    /// Cap the number of data rows read.
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.load.max_rows = Some(max_rows);
        self
    }

    /// Set the measurement-window source.
    pub fn with_duration(mut self, duration: DurationSource) -> Self {
        self.duration = duration;
        self
    }

    /// Set the desired autonomy in days.
    pub fn with_target_days(mut self, target_days: f64) -> Self {
        self.target_days = target_days;
        self
    }
}
