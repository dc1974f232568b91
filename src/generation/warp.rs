//! Sinusoidal warp distortion with optional seeded jitter

use crate::io::configuration::{
    BORDER_VALUE, DEFAULT_FREQUENCY, DEFAULT_JITTER, DEFAULT_SEED, DEFAULT_X_STRENGTH,
    DEFAULT_Y_STRENGTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::math::interpolation::sample_bilinear;
use crate::spatial::raster::Image;
use crate::spatial::warp_field::WarpField;

/// Parameters of the sinusoidal warp
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarpParams {
    /// Horizontal displacement amplitude in pixels
    pub x_strength: f64,
    /// Vertical displacement amplitude in pixels
    pub y_strength: f64,
    /// Period of the sine waves in pixels
    pub frequency: f64,
    /// Upper bound of the uniform jitter added to each coordinate
    pub jitter: f64,
    /// Seed for the jitter generator
    pub seed: u64,
}

impl Default for WarpParams {
    fn default() -> Self {
        Self {
            x_strength: DEFAULT_X_STRENGTH,
            y_strength: DEFAULT_Y_STRENGTH,
            frequency: DEFAULT_FREQUENCY,
            jitter: DEFAULT_JITTER,
            seed: DEFAULT_SEED,
        }
    }
}

impl WarpParams {
    /// Warp with the given strengths and period and no jitter
    pub const fn new(x_strength: f64, y_strength: f64, frequency: f64) -> Self {
        Self {
            x_strength,
            y_strength,
            frequency,
            jitter: DEFAULT_JITTER,
            seed: DEFAULT_SEED,
        }
    }

    /// Enable uniform jitter of the given amplitude drawn from `seed`
    #[must_use]
    pub const fn with_jitter(mut self, jitter: f64, seed: u64) -> Self {
        self.jitter = jitter;
        self.seed = seed;
        self
    }

    /// Check that the parameters produce finite coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if the frequency is zero, any value is not finite,
    /// or the jitter amplitude is negative
    pub fn validate(&self) -> Result<()> {
        if !self.frequency.is_finite() || self.frequency == 0.0 {
            return Err(invalid_parameter(
                "frequency",
                &self.frequency,
                &"must be finite and non-zero",
            ));
        }
        if !self.x_strength.is_finite() {
            return Err(invalid_parameter(
                "x_strength",
                &self.x_strength,
                &"must be finite",
            ));
        }
        if !self.y_strength.is_finite() {
            return Err(invalid_parameter(
                "y_strength",
                &self.y_strength,
                &"must be finite",
            ));
        }
        if !self.jitter.is_finite() || self.jitter < 0.0 {
            return Err(invalid_parameter(
                "jitter",
                &self.jitter,
                &"must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

/// Apply the sinusoidal warp to `image`
///
/// Every output pixel is resampled bilinearly from the source coordinate
/// given by [`WarpField::compute`]. Neighbours outside the source read as
/// [`BORDER_VALUE`].
///
/// # Errors
///
/// Returns an error if the warp parameters fail validation
pub fn warp(image: &Image, params: &WarpParams) -> Result<Image> {
    let (height, width) = image.dim();
    let field = WarpField::compute(height, width, params)?;
    Ok(remap(image, &field))
}

/// Resample `image` through a precomputed displacement field
///
/// The output has the field's dimensions.
pub fn remap(image: &Image, field: &WarpField) -> Image {
    let (height, width) = field.dim();
    let mut output = Image::filled(height, width, [BORDER_VALUE; 3]);

    for y in 0..height {
        for x in 0..width {
            if let Some((src_x, src_y)) = field.source(y, x) {
                output.put_pixel(y, x, sample_bilinear(image, src_x, src_y, BORDER_VALUE));
            }
        }
    }

    output
}
