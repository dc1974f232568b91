//! Spatial data structures for pixel grids
//!
//! This module contains spatial-related functionality including:
//! - Color image and grayscale buffer containers
//! - Displacement fields for resampling

/// Image and grayscale buffer containers
pub mod raster;
/// Sinusoidal displacement field computation
pub mod warp_field;

pub use raster::{GrayscaleBuffer, Image};
pub use warp_field::WarpField;
