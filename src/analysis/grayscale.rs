//! Luminance conversion from color images

use crate::io::configuration::LUMINANCE_WEIGHTS;
use crate::spatial::raster::{GrayscaleBuffer, Image};
use ndarray::Array2;

/// Weighted sum of one pixel's channels using [`LUMINANCE_WEIGHTS`]
pub fn luminance(color: [u8; 3]) -> f64 {
    let [r, g, b] = color.map(f64::from);
    let [wr, wg, wb] = LUMINANCE_WEIGHTS;
    wb.mul_add(b, wr.mul_add(r, wg * g))
}

/// Convert `image` to per-pixel luminance without rounding
pub fn to_grayscale(image: &Image) -> GrayscaleBuffer {
    let (height, width) = image.dim();
    let data = Array2::from_shape_fn((height, width), |(y, x)| {
        image.pixel(y, x).map_or(0.0, luminance)
    });
    GrayscaleBuffer::from_array(data)
}
