//! Chessboard test image with a row-dependent green ramp

use crate::io::configuration::{
    BACKGROUND_COLOR, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_IMAGE_SIZE, GREEN_SHADE_MAX,
    GREEN_SHADE_MIN, MAX_IMAGE_SIZE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::raster::Image;

/// Dimensions of the generated chessboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessboardConfig {
    /// Side length of the square image in pixels
    pub size: usize,
    /// Number of cell rows
    pub rows: usize,
    /// Number of cell columns
    pub cols: usize,
}

impl Default for ChessboardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_IMAGE_SIZE,
            rows: DEFAULT_GRID_ROWS,
            cols: DEFAULT_GRID_COLS,
        }
    }
}

impl ChessboardConfig {
    /// Check that all dimensions are usable
    ///
    /// # Errors
    ///
    /// Returns an error if the size or either grid dimension is zero or
    /// above [`MAX_IMAGE_SIZE`]
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > MAX_IMAGE_SIZE {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &format!("must be between 1 and {MAX_IMAGE_SIZE}"),
            ));
        }
        if self.rows == 0 || self.rows > MAX_IMAGE_SIZE {
            return Err(invalid_parameter(
                "rows",
                &self.rows,
                &format!("must be between 1 and {MAX_IMAGE_SIZE}"),
            ));
        }
        if self.cols == 0 || self.cols > MAX_IMAGE_SIZE {
            return Err(invalid_parameter(
                "cols",
                &self.cols,
                &format!("must be between 1 and {MAX_IMAGE_SIZE}"),
            ));
        }
        Ok(())
    }

    /// Side length of one cell; cells are square and sized by the row count
    pub const fn cell_size(&self) -> usize {
        match self.size.checked_div(self.rows) {
            Some(cell) => cell,
            None => 0,
        }
    }
}

/// Green channel per row, evenly spaced from [`GREEN_SHADE_MIN`] to [`GREEN_SHADE_MAX`]
pub fn green_shades(rows: usize) -> Vec<u8> {
    let start = f64::from(GREEN_SHADE_MIN);
    let end = f64::from(GREEN_SHADE_MAX);
    if rows <= 1 {
        return vec![GREEN_SHADE_MIN; rows];
    }
    let step = (end - start) / (rows - 1) as f64;
    (0..rows)
        .map(|i| step.mul_add(i as f64, start).round().clamp(0.0, 255.0) as u8)
        .collect()
}

/// Build the chessboard described by `config`
///
/// Cell `(i, j)` is painted `(0, shade[i], 0)` when `i + j` is odd and left
/// white otherwise. Cells past the image edge are clipped, and any strip left
/// over by the integer cell size stays white.
///
/// # Errors
///
/// Returns an error if the configuration fails validation
pub fn build_chessboard(config: &ChessboardConfig) -> Result<Image> {
    config.validate()?;

    let size = config.size;
    let cell = config.cell_size();
    let shades = green_shades(config.rows);
    let mut image = Image::filled(size, size, BACKGROUND_COLOR);
    // Cells starting at or past the edge would be clipped away entirely
    let fitting = if cell == 0 { 0 } else { size.div_ceil(cell) };
    let visible_rows = config.rows.min(fitting);
    let visible_cols = config.cols.min(fitting);

    for (i, &shade) in shades.iter().enumerate().take(visible_rows) {
        for j in 0..visible_cols {
            if (i + j) % 2 == 1 {
                image.fill_rect(
                    i * cell..(i + 1) * cell,
                    j * cell..(j + 1) * cell,
                    [0, shade, 0],
                );
            }
        }
    }

    tracing::debug!(
        size,
        rows = config.rows,
        cols = config.cols,
        cell,
        "built chessboard"
    );

    Ok(image)
}
