//! Fixed-width intensity histogram

use crate::io::configuration::{HISTOGRAM_BIN_COUNT, INTENSITY_RANGE, MAX_HISTOGRAM_BINS};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::raster::GrayscaleBuffer;

/// Bin counts together with the edges that delimit them
///
/// Bin `k` covers `[edges[k], edges[k + 1])`; the last bin also includes its
/// upper edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Sample count per bin in ascending intensity order
    pub counts: Vec<usize>,
    /// `counts.len() + 1` bin edges in ascending order
    pub edges: Vec<f64>,
}

impl Histogram {
    /// Number of bins
    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    /// Total number of counted samples
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest single bin count
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Lower and upper edge of bin `index`
    pub fn bin_bounds(&self, index: usize) -> Option<(f64, f64)> {
        let lower = self.edges.get(index).copied()?;
        let upper = self.edges.get(index + 1).copied()?;
        Some((lower, upper))
    }
}

/// Evenly spaced edges from `lower` to `upper` inclusive
fn linear_edges(bin_count: usize, lower: f64, upper: f64) -> Vec<f64> {
    let step = (upper - lower) / bin_count as f64;
    (0..=bin_count)
        .map(|k| {
            if k == bin_count {
                upper
            } else {
                step.mul_add(k as f64, lower)
            }
        })
        .collect()
}

/// Index of the bin containing `value`, or `None` outside the range
fn bin_index(value: f64, edges: &[f64]) -> Option<usize> {
    let bin_count = edges.len().checked_sub(1)?;
    let lower = *edges.first()?;
    let upper = *edges.last()?;

    if value.is_nan() || value < lower || value > upper {
        return None;
    }
    if value >= upper {
        return Some(bin_count - 1);
    }

    // Direct estimate, then corrected against the stored edges so rounding in
    // the division never moves a sample across a boundary
    let mut index = (((value - lower) / (upper - lower)) * bin_count as f64) as usize;
    index = index.min(bin_count - 1);
    if edges.get(index).is_some_and(|&edge| value < edge) {
        index = index.saturating_sub(1);
    } else if index + 1 < bin_count && edges.get(index + 1).is_some_and(|&edge| value >= edge) {
        index += 1;
    }
    Some(index)
}

/// Count samples of `buffer` in `bin_count` equal-width bins over `range`
///
/// Samples outside the range, and NaN samples, are not counted.
///
/// # Errors
///
/// Returns an error if `bin_count` is zero or above [`MAX_HISTOGRAM_BINS`],
/// or if `range` is not a finite, non-empty interval
pub fn compute_histogram(
    buffer: &GrayscaleBuffer,
    bin_count: usize,
    range: (f64, f64),
) -> Result<Histogram> {
    if bin_count == 0 || bin_count > MAX_HISTOGRAM_BINS {
        return Err(invalid_parameter(
            "bin_count",
            &bin_count,
            &format!("must be between 1 and {MAX_HISTOGRAM_BINS}"),
        ));
    }
    let (lower, upper) = range;
    if !lower.is_finite() || !upper.is_finite() || lower >= upper {
        return Err(invalid_parameter(
            "range",
            &format!("({lower}, {upper})"),
            &"must be a finite interval with lower < upper",
        ));
    }

    let edges = linear_edges(bin_count, lower, upper);
    let mut counts = vec![0usize; bin_count];
    for value in buffer.samples() {
        if let Some(slot) = bin_index(value, &edges).and_then(|index| counts.get_mut(index)) {
            *slot += 1;
        }
    }

    tracing::debug!(bin_count, counted = counts.iter().sum::<usize>(), "computed histogram");

    Ok(Histogram { counts, edges })
}

/// Histogram with [`HISTOGRAM_BIN_COUNT`] bins over [`INTENSITY_RANGE`]
///
/// # Errors
///
/// Never fails for the built-in defaults; the signature mirrors [`compute_histogram`]
pub fn compute_default_histogram(buffer: &GrayscaleBuffer) -> Result<Histogram> {
    compute_histogram(buffer, HISTOGRAM_BIN_COUNT, INTENSITY_RANGE)
}
