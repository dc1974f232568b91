//! Bilinear interpolation with a constant border
//!
//! Each of the four neighbours of a sampling point contributes its own value
//! when it lies inside the source and the border value when it does not, so
//! samples straddling the edge fade smoothly into the border.

use crate::spatial::raster::{CHANNELS, Image};
use num_traits::Float;

/// Linear blend between `a` and `b` by fraction `t`
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    (b - a).mul_add(t, a)
}

/// Blend four corner values at fractional offsets `fx`, `fy` within the cell
pub fn bilinear<T: Float>(
    top_left: T,
    top_right: T,
    bottom_left: T,
    bottom_right: T,
    fx: T,
    fy: T,
) -> T {
    let top = lerp(top_left, top_right, fx);
    let bottom = lerp(bottom_left, bottom_right, fx);
    lerp(top, bottom, fy)
}

/// Sample `image` at the fractional position (`x`, `y`)
///
/// Neighbours outside the image read as `border` on every channel. Results
/// are rounded to the nearest integer and clamped to the `u8` range.
pub fn sample_bilinear(image: &Image, x: f64, y: f64, border: u8) -> [u8; 3] {
    if !x.is_finite() || !y.is_finite() {
        return [border; CHANNELS];
    }

    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;

    let fetch = |row: f64, col: f64| -> [f64; 3] {
        let inside = row >= 0.0
            && col >= 0.0
            && row < image.height() as f64
            && col < image.width() as f64;
        let color = if inside {
            image
                .pixel(row as usize, col as usize)
                .unwrap_or([border; CHANNELS])
        } else {
            [border; CHANNELS]
        };
        color.map(f64::from)
    };

    let top_left = fetch(y0, x0);
    let top_right = fetch(y0, x0 + 1.0);
    let bottom_left = fetch(y0 + 1.0, x0);
    let bottom_right = fetch(y0 + 1.0, x0 + 1.0);

    let mut out = [border; CHANNELS];
    for (c, slot) in out.iter_mut().enumerate() {
        let value = bilinear(
            top_left.get(c).copied().unwrap_or(0.0),
            top_right.get(c).copied().unwrap_or(0.0),
            bottom_left.get(c).copied().unwrap_or(0.0),
            bottom_right.get(c).copied().unwrap_or(0.0),
            fx,
            fy,
        );
        *slot = value.round().clamp(0.0, 255.0) as u8;
    }
    out
}
