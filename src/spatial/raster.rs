//! Pixel containers for color images and grayscale intensity buffers
//!
//! Both containers are row-major: the first axis is the row (y), the second
//! the column (x). Color images carry a trailing channel axis of length 3.

use crate::io::error::{AnalysisError, Result, invalid_parameter};
use image::{Rgb, RgbImage};
use ndarray::{Array2, Array3, ArrayView2};

/// Number of color channels per pixel
pub const CHANNELS: usize = 3;

/// RGB image with 8-bit channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    data: Array3<u8>,
}

impl Image {
    /// Create an image of the given dimensions with every pixel set to `color`
    pub fn filled(height: usize, width: usize, color: [u8; 3]) -> Self {
        let data = Array3::from_shape_fn((height, width, CHANNELS), |(_, _, c)| {
            color.get(c).copied().unwrap_or(0)
        });
        Self { data }
    }

    /// Wrap an existing `(height, width, 3)` array
    ///
    /// # Errors
    ///
    /// Returns an error if the trailing axis does not hold exactly three channels
    pub fn from_array(data: Array3<u8>) -> Result<Self> {
        let (_, _, channels) = data.dim();
        if channels != CHANNELS {
            return Err(invalid_parameter(
                "channels",
                &channels,
                &"image data must have exactly 3 channels",
            ));
        }
        Ok(Self { data })
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    /// Dimensions as (height, width)
    pub fn dim(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    /// Color at row `y`, column `x`, or `None` outside the image
    pub fn pixel(&self, y: usize, x: usize) -> Option<[u8; 3]> {
        if y >= self.height() || x >= self.width() {
            return None;
        }
        let mut color = [0u8; CHANNELS];
        for (c, slot) in color.iter_mut().enumerate() {
            *slot = self.data.get((y, x, c)).copied()?;
        }
        Some(color)
    }

    /// Overwrite the color at row `y`, column `x`; writes outside the image are ignored
    pub fn put_pixel(&mut self, y: usize, x: usize, color: [u8; 3]) {
        for (c, &value) in color.iter().enumerate() {
            if let Some(slot) = self.data.get_mut((y, x, c)) {
                *slot = value;
            }
        }
    }

    /// Paint the half-open rectangle `rows × cols`, clipped to the image
    pub fn fill_rect(
        &mut self,
        rows: std::ops::Range<usize>,
        cols: std::ops::Range<usize>,
        color: [u8; 3],
    ) {
        let row_end = rows.end.min(self.height());
        let col_end = cols.end.min(self.width());
        for y in rows.start..row_end {
            for x in cols.start..col_end {
                self.put_pixel(y, x, color);
            }
        }
    }

    /// Borrow the underlying `(height, width, 3)` array
    pub const fn as_array(&self) -> &Array3<u8> {
        &self.data
    }

    /// Convert to an `image` crate buffer for encoding
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions do not fit in `u32`
    pub fn to_rgb_image(&self) -> Result<RgbImage> {
        let width = u32::try_from(self.width())
            .map_err(|_e| invalid_parameter("width", &self.width(), &"exceeds u32 range"))?;
        let height = u32::try_from(self.height())
            .map_err(|_e| invalid_parameter("height", &self.height(), &"exceeds u32 range"))?;

        let mut img = RgbImage::new(width, height);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            if let Some(color) = self.pixel(y as usize, x as usize) {
                *pixel = Rgb(color);
            }
        }
        Ok(img)
    }

    /// Build an image from an `image` crate buffer
    pub fn from_rgb_image(img: &RgbImage) -> Self {
        let mut image = Self::filled(img.height() as usize, img.width() as usize, [0, 0, 0]);
        for (x, y, pixel) in img.enumerate_pixels() {
            image.put_pixel(y as usize, x as usize, pixel.0);
        }
        image
    }
}

impl TryFrom<Array3<u8>> for Image {
    type Error = AnalysisError;

    fn try_from(data: Array3<u8>) -> Result<Self> {
        Self::from_array(data)
    }
}

/// Per-pixel floating point intensities derived from an [`Image`]
#[derive(Debug, Clone, PartialEq)]
pub struct GrayscaleBuffer {
    data: Array2<f64>,
}

impl GrayscaleBuffer {
    /// Wrap an existing intensity array
    pub const fn from_array(data: Array2<f64>) -> Self {
        Self { data }
    }

    /// Build a single-row buffer from a flat list of samples
    pub fn from_samples(samples: Vec<f64>) -> Self {
        let len = samples.len();
        let data = Array2::from_shape_vec((1, len), samples)
            .unwrap_or_else(|_e| Array2::zeros((0, 0)));
        Self { data }
    }

    /// Dimensions as (height, width)
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Total number of samples
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer has no samples
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Intensity at row `y`, column `x`
    pub fn get(&self, y: usize, x: usize) -> Option<f64> {
        self.data.get([y, x]).copied()
    }

    /// Iterate over all samples in row-major order
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().copied()
    }

    /// Borrow the underlying array
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }
}
