//! Descriptive statistics over grayscale intensities

use crate::io::error::{AnalysisError, Result};
use crate::spatial::raster::GrayscaleBuffer;
use std::fmt;

/// Mean and population standard deviation of a sample set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Arithmetic mean
    pub mean: f64,
    /// Square root of the mean squared deviation (divisor N)
    pub std_dev: f64,
}

impl Statistics {
    /// Mean and standard deviation rounded to two decimal places
    pub fn rounded(&self) -> (f64, f64) {
        (round_to_hundredths(self.mean), round_to_hundredths(self.std_dev))
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mean: {:.2}, std dev: {:.2}", self.mean, self.std_dev)
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute mean and population standard deviation of `buffer`
///
/// Two passes: the first accumulates the mean, the second the squared
/// deviations from it.
///
/// # Errors
///
/// Returns [`AnalysisError::DivisionByZero`] if the buffer is empty
pub fn compute_statistics(buffer: &GrayscaleBuffer) -> Result<Statistics> {
    if buffer.is_empty() {
        return Err(AnalysisError::DivisionByZero { operation: "mean" });
    }

    let n = buffer.len() as f64;
    let mean = buffer.samples().sum::<f64>() / n;
    let sum_squared_diff: f64 = buffer.samples().map(|x| (x - mean).powi(2)).sum();
    let std_dev = (sum_squared_diff / n).sqrt();

    tracing::debug!(samples = buffer.len(), mean, std_dev, "computed statistics");

    Ok(Statistics { mean, std_dev })
}
