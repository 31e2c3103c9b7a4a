//! Loaded samples and their summary statistics.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

use crate::integrate::{trapezoid, IntegrationError};

// ---------------------------------------------------------------------------
// Sample – one row of the current log
// ---------------------------------------------------------------------------

/// A single current-draw measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    /// Wall-clock time the logger stamped on the row.
    pub timestamp: NaiveDateTime,
    /// Elapsed time since logging started (seconds).
    pub time_s: f64,
    /// Measured current (milliamps).
    pub current_ma: f64,
}

// ---------------------------------------------------------------------------
// SampleTable – the complete loaded log
// ---------------------------------------------------------------------------

/// The loaded current log, in file order.
///
/// Built once by the loader and read-only afterwards. Time values are
/// expected to be non-decreasing; the loader reports violations in
/// [`SampleTable::backwards_steps`] but keeps the rows as-is.
#[derive(Debug, Clone, Default)]
pub struct SampleTable {
    samples: Vec<Sample>,
    backwards_steps: usize,
}

impl SampleTable {
    /// Wrap samples that are already in file order.
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        let backwards_steps = samples
            .windows(2)
            .filter(|w| w[1].time_s < w[0].time_s)
            .count();
        Self {
            samples,
            backwards_steps,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the table holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples in file order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// First sample, if any.
    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    /// Last sample, if any.
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Number of places where the time column steps backwards.
    pub fn backwards_steps(&self) -> usize {
        self.backwards_steps
    }

    /// Elapsed-time column.
    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time_s).collect()
    }

    /// Current column.
    pub fn currents(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.current_ma).collect()
    }

    /// Last minus first value of the time column (seconds).
    pub fn time_span_s(&self) -> Option<f64> {
        match (self.first(), self.last()) {
            (Some(a), Some(b)) => Some(b.time_s - a.time_s),
            _ => None,
        }
    }

    /// Last minus first timestamp (seconds, millisecond resolution).
    pub fn wall_clock_span_s(&self) -> Option<f64> {
        match (self.first(), self.last()) {
            (Some(a), Some(b)) => {
                Some((b.timestamp - a.timestamp).num_milliseconds() as f64 / 1000.0)
            }
            _ => None,
        }
    }

    /// Total charge drawn over the log (mA·s), by the trapezoidal rule.
    pub fn charge_mas(&self) -> Result<f64, IntegrationError> {
        trapezoid(&self.times(), &self.currents())
    }

    /// Descriptive statistics for reports and `inspect`.
    pub fn summary(&self) -> TableSummary {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for s in &self.samples {
            min = min.min(s.current_ma);
            max = max.max(s.current_ma);
            sum += s.current_ma;
        }

        let (min_current_ma, max_current_ma, mean_sample_current_ma) = if self.is_empty() {
            (None, None, None)
        } else {
            (Some(min), Some(max), Some(sum / self.len() as f64))
        };

        TableSummary {
            sample_count: self.len(),
            first_timestamp: self.first().map(|s| s.timestamp),
            last_timestamp: self.last().map(|s| s.timestamp),
            time_span_s: self.time_span_s(),
            wall_clock_span_s: self.wall_clock_span_s(),
            min_current_ma,
            max_current_ma,
            mean_sample_current_ma,
            backwards_steps: self.backwards_steps,
        }
    }
}

// ---------------------------------------------------------------------------
// TableSummary
// ---------------------------------------------------------------------------

/// Descriptive statistics of a loaded log.
///
/// `mean_sample_current_ma` is the unweighted mean of the samples, which
/// differs from the time-weighted average when the logger interval drifts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSummary {
    /// Number of samples loaded
    pub sample_count: usize,
    /// Timestamp of the first sample
    pub first_timestamp: Option<NaiveDateTime>,
    /// Timestamp of the last sample
    pub last_timestamp: Option<NaiveDateTime>,
    /// Span of the time column (s)
    pub time_span_s: Option<f64>,
    /// Span of the timestamp column (s)
    pub wall_clock_span_s: Option<f64>,
    /// Lowest sampled current (mA)
    pub min_current_ma: Option<f64>,
    /// Highest sampled current (mA)
    pub max_current_ma: Option<f64>,
    /// Unweighted mean of sampled currents (mA)
    pub mean_sample_current_ma: Option<f64>,
    /// Places where the time column steps backwards
    pub backwards_steps: usize,
}

impl fmt::Display for TableSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} samples", self.sample_count)?;
        if let Some(span) = self.time_span_s {
            write!(f, " over {:.1} s", span)?;
        }
        if let (Some(min), Some(max)) = (self.min_current_ma, self.max_current_ma) {
            write!(f, ", current {:.3}..{:.3} mA", min, max)?;
        }
        Ok(())
    }
}
