//! Synthetic chessboard test images with sinusoidal warp distortion and intensity analysis
//!
//! The library builds a chessboard with a row-dependent green ramp, warps it
//! with a coupled sinusoidal displacement field, and reduces it to grayscale
//! statistics and a fixed-width intensity histogram. Every operation is a pure
//! function over freshly allocated arrays.

#![forbid(unsafe_code)]

/// Grayscale conversion, descriptive statistics and histograms
pub mod analysis;
/// Chessboard synthesis and warp distortion
pub mod generation;
/// Input/output operations, presentation surfaces and error handling
pub mod io;
/// Interpolation utilities for resampling
pub mod math;
/// Image containers and displacement fields
pub mod spatial;

pub use analysis::{
    Histogram, Statistics, compute_default_histogram, compute_histogram, compute_statistics,
    to_grayscale,
};
pub use generation::{ChessboardConfig, WarpParams, build_chessboard, warp};
pub use io::error::{AnalysisError, Result};
pub use spatial::{GrayscaleBuffer, Image, WarpField};
