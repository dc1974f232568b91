//! Grayscale conversion and intensity statistics

/// Luminance conversion from color images
pub mod grayscale;
/// Fixed-width intensity histogram
pub mod histogram;
/// Mean and standard deviation of intensities
pub mod statistics;

pub use grayscale::to_grayscale;
pub use histogram::{Histogram, compute_default_histogram, compute_histogram};
pub use statistics::{Statistics, compute_statistics};
