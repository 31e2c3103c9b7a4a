//! Crate-level error type.

use crate::estimate::EstimateError;
use crate::integrate::IntegrationError;
use crate::loader::LoadError;

/// Errors from the full load → integrate → estimate pipeline
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The current log could not be loaded
    #[error("Failed to load current log: {0}")]
    Load(#[from] LoadError),

    /// The log could not be integrated
    #[error("Failed to integrate current log: {0}")]
    Integration(#[from] IntegrationError),

    /// The estimate inputs were invalid
    #[error("Failed to estimate capacity: {0}")]
    Estimate(#[from] EstimateError),

    /// The report could not be serialized
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}
