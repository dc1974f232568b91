//! Presentation surfaces that receive generated images and histogram data
//!
//! The core operations return plain values; a [`DisplaySurface`] decides how
//! to present them. [`FileSurface`] writes PNG files, [`RecordingSurface`]
//! keeps everything in memory.

use crate::analysis::histogram::Histogram;
use crate::analysis::statistics::Statistics;
use crate::io::configuration::{CHESSBOARD_FILE_NAME, HISTOGRAM_FILE_NAME, WARPED_FILE_NAME};
use crate::io::error::Result;
use crate::io::image::{export_histogram_as_png, export_image_as_png};
use crate::spatial::raster::Image;
use std::path::{Path, PathBuf};

/// Which view an image is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    /// The undistorted chessboard
    Original,
    /// The chessboard after the warp
    Warped,
}

impl ImageSlot {
    /// File name used when the slot is written to disk
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Original => CHESSBOARD_FILE_NAME,
            Self::Warped => WARPED_FILE_NAME,
        }
    }
}

/// Anything that can show an image and a histogram with its statistics
pub trait DisplaySurface {
    /// Replace the image shown in `slot`
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot present the image
    fn set_image(&mut self, slot: ImageSlot, image: &Image) -> Result<()>;

    /// Replace the histogram chart and the statistics readout
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot present the chart
    fn set_chart(&mut self, histogram: &Histogram, statistics: &Statistics) -> Result<()>;
}

/// Writes every presented value into an output directory
#[derive(Debug, Clone)]
pub struct FileSurface {
    output_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl FileSurface {
    /// Surface writing into `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            written: Vec::new(),
        }
    }

    /// Directory receiving the files
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Paths written so far, in order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl DisplaySurface for FileSurface {
    fn set_image(&mut self, slot: ImageSlot, image: &Image) -> Result<()> {
        let path = self.output_dir.join(slot.file_name());
        export_image_as_png(image, &path)?;
        tracing::info!(path = %path.display(), ?slot, "wrote image");
        self.written.push(path);
        Ok(())
    }

    // Statistics are the primary result of the tool, so they go to stdout
    #[allow(clippy::print_stdout)]
    fn set_chart(&mut self, histogram: &Histogram, statistics: &Statistics) -> Result<()> {
        let path = self.output_dir.join(HISTOGRAM_FILE_NAME);
        export_histogram_as_png(histogram, &path)?;
        tracing::info!(path = %path.display(), counts = ?histogram.counts, "wrote histogram");
        self.written.push(path);

        println!("mean: {:.2}", statistics.mean);
        println!("std dev: {:.2}", statistics.std_dev);
        Ok(())
    }
}

/// Keeps the latest presented values in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    /// Latest original image
    pub original: Option<Image>,
    /// Latest warped image
    pub warped: Option<Image>,
    /// Latest histogram
    pub histogram: Option<Histogram>,
    /// Latest statistics
    pub statistics: Option<Statistics>,
}

impl DisplaySurface for RecordingSurface {
    fn set_image(&mut self, slot: ImageSlot, image: &Image) -> Result<()> {
        let target = match slot {
            ImageSlot::Original => &mut self.original,
            ImageSlot::Warped => &mut self.warped,
        };
        *target = Some(image.clone());
        Ok(())
    }

    fn set_chart(&mut self, histogram: &Histogram, statistics: &Statistics) -> Result<()> {
        self.histogram = Some(histogram.clone());
        self.statistics = Some(*statistics);
        Ok(())
    }
}
