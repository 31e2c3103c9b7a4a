//! Trapezoidal-rule integration over sampled points.
//!
//! Summation is plain `f64` addition in sample order. No reordering or
//! compensated summation is applied, so results match a straightforward
//! left-to-right evaluation bit for bit.

/// Errors that can occur during integration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntegrationError {
    /// Fewer than two samples, so no interval to integrate over
    #[error("At least 2 samples are required to integrate, found {found}")]
    TooFewSamples {
        /// Number of samples supplied
        found: usize,
    },

    /// The x and y series have different lengths
    #[error("Sample series length mismatch: {x_len} x values, {y_len} y values")]
    LengthMismatch {
        /// Number of x values
        x_len: usize,
        /// Number of y values
        y_len: usize,
    },
}

/// Integrate `y` with respect to `x` using the trapezoidal rule.
///
/// Computes `Σ (x[i+1] - x[i]) * (y[i] + y[i+1]) / 2` over consecutive pairs.
/// `x` is not required to be increasing; a backwards step contributes a
/// negative area, exactly as the formula states.
pub fn trapezoid(x: &[f64], y: &[f64]) -> Result<f64, IntegrationError> {
    if x.len() != y.len() {
        return Err(IntegrationError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(IntegrationError::TooFewSamples { found: x.len() });
    }

    let mut total = 0.0;
    for i in 0..x.len() - 1 {
        total += (x[i + 1] - x[i]) * (y[i] + y[i + 1]) / 2.0;
    }
    Ok(total)
}
