//! Sinusoidal displacement field for the warp distortion
//!
//! The field is built in two passes. The first pass fills the horizontal
//! source coordinate from the row index; the second fills the vertical source
//! coordinate from the already displaced horizontal coordinate, so the two
//! axes are coupled rather than independent.

use crate::generation::warp::WarpParams;
use crate::io::error::Result;
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::f64::consts::TAU;

/// Source sampling coordinates for every output pixel
#[derive(Debug, Clone, PartialEq)]
pub struct WarpField {
    /// Horizontal source coordinate, indexed by (row, col)
    pub map_x: Array2<f64>,
    /// Vertical source coordinate, indexed by (row, col)
    pub map_y: Array2<f64>,
}

/// Seeded uniform jitter source that never draws when the amplitude is zero
struct Jitter {
    amplitude: f64,
    rng: StdRng,
}

impl Jitter {
    fn new(amplitude: f64, seed: u64) -> Self {
        Self {
            amplitude,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn sample(&mut self) -> f64 {
        if self.amplitude > 0.0 {
            self.rng.random_range(0.0..self.amplitude)
        } else {
            0.0
        }
    }
}

impl WarpField {
    /// Compute the displacement field for an image of the given dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if the warp parameters fail validation
    pub fn compute(height: usize, width: usize, params: &WarpParams) -> Result<Self> {
        params.validate()?;

        let mut jitter = Jitter::new(params.jitter, params.seed);
        let period = params.frequency;

        let mut map_x = Array2::<f64>::zeros((height, width));
        for ((row, col), value) in map_x.indexed_iter_mut() {
            let phase = TAU * row as f64 / period;
            *value = params
                .x_strength
                .mul_add(phase.sin(), col as f64 + jitter.sample());
        }

        let mut map_y = Array2::<f64>::zeros((height, width));
        for ((row, col), value) in map_y.indexed_iter_mut() {
            let src_x = map_x.get([row, col]).copied().unwrap_or(col as f64);
            let phase = TAU * src_x / period;
            *value = params
                .y_strength
                .mul_add(phase.sin(), row as f64 + jitter.sample());
        }

        tracing::debug!(height, width, jitter = params.jitter, "computed warp field");

        Ok(Self { map_x, map_y })
    }

    /// Source coordinate (x, y) for output pixel at row `y`, column `x`
    pub fn source(&self, y: usize, x: usize) -> Option<(f64, f64)> {
        let src_x = self.map_x.get([y, x]).copied()?;
        let src_y = self.map_y.get([y, x]).copied()?;
        Some((src_x, src_y))
    }

    /// Dimensions as (height, width)
    pub fn dim(&self) -> (usize, usize) {
        self.map_x.dim()
    }
}
