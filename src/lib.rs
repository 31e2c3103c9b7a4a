//! # ampcap - Battery Capacity from Current Logs
//!
//! `ampcap` reads a current-draw log written by a bench logger, integrates the
//! current over time with the trapezoidal rule, and turns the resulting charge
//! into an average current and the battery capacity needed to run for a target
//! number of days.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ampcap::{run, DurationSource, EstimatorConfig};
//!
//! let config = EstimatorConfig::new("AMP.CSV")
//!     .with_max_rows(12990)
//!     .with_duration(DurationSource::Fixed(12997.0))
//!     .with_target_days(7.0);
//!
//! let report = run(&config)?;
//! println!("{}", report);
//! println!("Need {:.0} mAh", report.required_capacity_mah());
//! # Ok::<(), ampcap::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! ```text
//!  AMP.CSV
//!     │
//!     ▼
//! ┌────────┐  skip metadata rows, resolve columns, cap rows
//! │ loader │──────────────────────────────────────────────▶ SampleTable
//! └────────┘
//!     │
//!     ▼
//! ┌───────────┐  Σ (t[i+1]-t[i]) * (I[i]+I[i+1]) / 2
//! │ integrate │──────────────────────────────────────────▶ charge (mA·s)
//! └───────────┘
//!     │
//!     ▼
//! ┌──────────┐  charge / duration, × days × 24 / 1000
//! │ estimate │──────────────────────────────────────────▶ capacity (Ah)
//! └──────────┘
//! ```
//!
//! ## Input Format
//!
//! | Column | Type | Description |
//! |--------|------|-------------|
//! | `DateTime` | timestamp | Wall-clock time of the sample |
//! | `Time (sec)` | float | Elapsed seconds since logging started |
//! | `Amps (mA)` | float | Measured current in milliamps |
//!
//! Column names are configurable through [`ColumnSchema`].

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod estimate;
pub mod integrate;
pub mod loader;
pub mod model;
pub mod report;
pub mod schema;

use log::info;

pub use config::EstimatorConfig;
pub use error::Error;
pub use estimate::{estimate_from_charge, estimate_table, DurationSource, Estimate, EstimateError};
pub use integrate::{trapezoid, IntegrationError};
pub use loader::{load_samples, load_samples_from_reader, LoadError, LoadOptions};
pub use model::{Sample, SampleTable, TableSummary};
pub use report::EstimateReport;
pub use schema::ColumnSchema;

/// Load, integrate and estimate in one step.
pub fn run(config: &EstimatorConfig) -> Result<EstimateReport, Error> {
    let table = load_samples(&config.input_path, &config.load)?;
    let estimate = estimate_table(&table, config.duration, config.target_days)?;
    info!(
        "Average current {:.4} mA, required capacity {:.4} Ah",
        estimate.average_current_ma, estimate.required_capacity_ah
    );
    Ok(EstimateReport::new(
        config.input_path.display().to_string(),
        table.summary(),
        config.duration,
        estimate,
    ))
}

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::config::EstimatorConfig;
    pub use crate::estimate::{DurationSource, Estimate};
    pub use crate::loader::{load_samples, LoadOptions};
    pub use crate::model::{Sample, SampleTable};
    pub use crate::report::EstimateReport;
    pub use crate::schema::ColumnSchema;
    pub use crate::{run, Error};
}
