//! Mathematical utilities for resampling

/// Bilinear interpolation with constant-border sampling
pub mod interpolation;
