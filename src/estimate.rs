//! Average current and battery capacity from an integrated current log.
//!
//! ```text
//! average_current_ma   = charge_mas / duration_s
//! target_hours         = target_days * 24
//! required_capacity_ah = average_current_ma * target_hours / 1000
//! ```

use log::debug;
use serde::Serialize;
use std::fmt;

use crate::integrate::IntegrationError;
use crate::model::SampleTable;

/// Hours per day used to convert the target duration
pub const HOURS_PER_DAY: f64 = 24.0;

/// Milliamp-hours per amp-hour
pub const MAH_PER_AH: f64 = 1000.0;

/// Where the measurement-window duration comes from.
///
/// The integral is divided by this duration to get the average current, so it
/// should cover the same window the samples do.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(tag = "kind", content = "seconds", rename_all = "kebab-case")]
pub enum DurationSource {
    /// A known, fixed window in seconds
    Fixed(f64),
    /// Last minus first value of the time column
    #[default]
    TimeSpan,
    /// Last minus first timestamp
    WallClock,
}

impl DurationSource {
    /// Resolve the window for a loaded table.
    ///
    /// `None` when the table is empty and the source depends on the data.
    pub fn resolve(&self, table: &SampleTable) -> Option<f64> {
        match self {
            DurationSource::Fixed(seconds) => Some(*seconds),
            DurationSource::TimeSpan => table.time_span_s(),
            DurationSource::WallClock => table.wall_clock_span_s(),
        }
    }
}

impl fmt::Display for DurationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationSource::Fixed(s) => write!(f, "fixed ({s} s)"),
            DurationSource::TimeSpan => write!(f, "time column span"),
            DurationSource::WallClock => write!(f, "timestamp span"),
        }
    }
}

/// Errors that can occur while estimating capacity
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    /// The log could not be integrated
    #[error("Integration failed: {0}")]
    Integration(#[from] IntegrationError),

    /// The measurement window is zero, negative or not finite
    #[error("Measurement duration must be a positive number of seconds, got {0}")]
    InvalidDuration(f64),

    /// The integrated charge overflowed or is not a number
    #[error("Integrated charge is not finite ({0} mA·s); check the current column for outliers")]
    NonFiniteCharge(f64),

    /// The target duration is negative or not finite
    #[error("Target days must be zero or positive, got {0}")]
    InvalidTargetDays(f64),
}

/// Result of a capacity estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    /// Total charge drawn over the log (mA·s)
    pub charge_mas: f64,
    /// Measurement window the charge is averaged over (s)
    pub duration_s: f64,
    /// Time-averaged current (mA)
    pub average_current_ma: f64,
    /// Desired autonomy (days)
    pub target_days: f64,
    /// Desired autonomy (hours)
    pub target_hours: f64,
    /// Capacity needed to sustain the average current for the target (A·h)
    pub required_capacity_ah: f64,
}

impl Estimate {
    /// Required capacity in milliamp-hours.
    pub fn required_capacity_mah(&self) -> f64 {
        self.required_capacity_ah * MAH_PER_AH
    }
}

/// Estimate capacity from an already integrated charge.
pub fn estimate_from_charge(
    charge_mas: f64,
    duration_s: f64,
    target_days: f64,
) -> Result<Estimate, EstimateError> {
    if !duration_s.is_finite() || duration_s <= 0.0 {
        return Err(EstimateError::InvalidDuration(duration_s));
    }
    if !target_days.is_finite() || target_days < 0.0 {
        return Err(EstimateError::InvalidTargetDays(target_days));
    }
    if !charge_mas.is_finite() {
        return Err(EstimateError::NonFiniteCharge(charge_mas));
    }

    let average_current_ma = charge_mas / duration_s;
    let target_hours = target_days * HOURS_PER_DAY;
    let required_capacity_ah = average_current_ma * target_hours / MAH_PER_AH;

    Ok(Estimate {
        charge_mas,
        duration_s,
        average_current_ma,
        target_days,
        target_hours,
        required_capacity_ah,
    })
}

/// Integrate a loaded table and estimate capacity.
pub fn estimate_table(
    table: &SampleTable,
    duration: DurationSource,
    target_days: f64,
) -> Result<Estimate, EstimateError> {
    let charge_mas = table.charge_mas()?;
    let duration_s = duration
        .resolve(table)
        .ok_or(EstimateError::Integration(IntegrationError::TooFewSamples {
            found: table.len(),
        }))?;
    debug!(
        "Charge {:.3} mA·s over {:.3} s ({})",
        charge_mas, duration_s, duration
    );
    estimate_from_charge(charge_mas, duration_s, target_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sample;
    use chrono::NaiveDate;

    fn table(points: &[(f64, f64)]) -> SampleTable {
        let start = NaiveDate::from_ymd_opt(2024, 9, 16)
            .unwrap()
            .and_hms_opt(15, 56, 10)
            .unwrap();
        SampleTable::from_samples(
            points
                .iter()
                .map(|&(t, i)| Sample {
                    timestamp: start + chrono::Duration::milliseconds((t * 2000.0) as i64),
                    time_s: t,
                    current_ma: i,
                })
                .collect(),
        )
    }

    #[test]
    fn test_one_week_scenario() {
        let t = table(&[(0.0, 100.0), (10.0, 100.0)]);
        let est = estimate_table(&t, DurationSource::Fixed(10.0), 7.0).unwrap();

        assert_eq!(est.charge_mas, 1000.0);
        assert_eq!(est.average_current_ma, 100.0);
        assert_eq!(est.target_hours, 168.0);
        assert!((est.required_capacity_ah - 16.8).abs() < 1e-12);
        assert!((est.required_capacity_mah() - 16_800.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_is_exact_quotient() {
        let est = estimate_from_charge(12345.678, 12997.0, 7.0).unwrap();
        assert_eq!(est.average_current_ma, 12345.678 / 12997.0);
        assert_eq!(
            est.required_capacity_ah,
            est.average_current_ma * (7.0 * 24.0) / 1000.0
        );
    }

    #[test]
    fn test_duration_sources() {
        let t = table(&[(0.0, 1.0), (4.0, 1.0)]);
        assert_eq!(DurationSource::Fixed(9.0).resolve(&t), Some(9.0));
        assert_eq!(DurationSource::TimeSpan.resolve(&t), Some(4.0));
        // Timestamps advance twice as fast as the time column in this fixture
        assert_eq!(DurationSource::WallClock.resolve(&t), Some(8.0));
    }

    #[test]
    fn test_default_duration_is_time_span() {
        let t = table(&[(0.0, 50.0), (20.0, 50.0)]);
        let est = estimate_table(&t, DurationSource::default(), 1.0).unwrap();
        assert_eq!(est.duration_s, 20.0);
        assert_eq!(est.average_current_ma, 50.0);
    }

    #[test]
    fn test_single_row_is_error() {
        let t = table(&[(0.0, 100.0)]);
        let err = estimate_table(&t, DurationSource::Fixed(10.0), 7.0).unwrap_err();
        assert_eq!(
            err,
            EstimateError::Integration(IntegrationError::TooFewSamples { found: 1 })
        );
    }

    #[test]
    fn test_zero_duration_is_error() {
        assert_eq!(
            estimate_from_charge(1000.0, 0.0, 7.0),
            Err(EstimateError::InvalidDuration(0.0))
        );
        assert!(estimate_from_charge(1000.0, -5.0, 7.0).is_err());
        assert!(estimate_from_charge(1000.0, f64::NAN, 7.0).is_err());
    }

    #[test]
    fn test_flat_time_column_is_error() {
        // All samples at the same instant: zero span, nothing to average over
        let t = table(&[(3.0, 1.0), (3.0, 2.0)]);
        let err = estimate_table(&t, DurationSource::TimeSpan, 7.0).unwrap_err();
        assert_eq!(err, EstimateError::InvalidDuration(0.0));
    }

    #[test]
    fn test_target_days_validation() {
        assert_eq!(
            estimate_from_charge(1000.0, 10.0, -1.0),
            Err(EstimateError::InvalidTargetDays(-1.0))
        );
        let zero = estimate_from_charge(1000.0, 10.0, 0.0).unwrap();
        assert_eq!(zero.required_capacity_ah, 0.0);
    }

    #[test]
    fn test_overflowing_charge_is_error() {
        // Each sample is finite but the area overflows f64
        let t = table(&[(0.0, 1e308), (1e10, 1e308)]);
        let err = estimate_table(&t, DurationSource::Fixed(1e10), 7.0).unwrap_err();
        assert_eq!(err, EstimateError::NonFiniteCharge(f64::INFINITY));

        assert!(matches!(
            estimate_from_charge(f64::NAN, 10.0, 7.0),
            Err(EstimateError::NonFiniteCharge(_))
        ));
    }

    #[test]
    fn test_duration_source_serde() {
        let json = serde_json::to_string(&DurationSource::Fixed(12997.0)).unwrap();
        assert_eq!(json, r#"{"kind":"fixed","seconds":12997.0}"#);
        let json = serde_json::to_string(&DurationSource::TimeSpan).unwrap();
        assert_eq!(json, r#"{"kind":"time-span"}"#);
    }
}
