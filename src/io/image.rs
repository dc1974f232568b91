//! PNG export of images and histogram bar charts

use crate::analysis::histogram::Histogram;
use crate::io::configuration::{
    CHART_BAR_COLOR, CHART_BAR_GAP, CHART_BAR_WIDTH, CHART_EDGE_COLOR, CHART_GRID_COLOR,
    CHART_GRID_DASH, CHART_GRID_DIVISIONS, CHART_HEIGHT,
};
use crate::io::error::{AnalysisError, Result, computation_error};
use crate::spatial::raster::Image;
use image::{ImageBuffer, Rgb, RgbImage};
use std::path::Path;

/// Export `image` as a PNG file, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The image dimensions do not fit in `u32`
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_image_as_png(image: &Image, output_path: &Path) -> Result<()> {
    let img = image.to_rgb_image()?;
    save_png(&img, output_path)
}

/// Render `histogram` as a bar chart and export it as a PNG file
///
/// # Errors
///
/// Returns an error if the histogram has no bins or the file cannot be written
pub fn export_histogram_as_png(histogram: &Histogram, output_path: &Path) -> Result<()> {
    let img = render_histogram(histogram)?;
    save_png(&img, output_path)
}

/// Draw one outlined bar per bin on a white background
///
/// Bar heights are scaled so the fullest bin spans [`CHART_HEIGHT`]. Empty
/// bins draw only their baseline. Dashed grid lines split the chart height
/// into [`CHART_GRID_DIVISIONS`] bands.
///
/// # Errors
///
/// Returns an error if the histogram has no bins or the chart would be too wide
pub fn render_histogram(histogram: &Histogram) -> Result<RgbImage> {
    if histogram.bin_count() == 0 {
        return Err(computation_error("histogram rendering", &"histogram has no bins"));
    }

    let too_wide = || {
        computation_error(
            "histogram rendering",
            &format!("{} bins exceed chart capacity", histogram.bin_count()),
        )
    };
    let stride = CHART_BAR_WIDTH + CHART_BAR_GAP;
    let width = u32::try_from(histogram.bin_count())
        .ok()
        .and_then(|bins| bins.checked_mul(stride))
        .and_then(|bars| bars.checked_add(CHART_BAR_GAP))
        .ok_or_else(too_wide)?;
    let height = CHART_HEIGHT + 2;
    let max_count = histogram.max_count().max(1) as f64;

    let mut img: RgbImage = ImageBuffer::from_pixel(width, height, Rgb([255, 255, 255]));
    let baseline = height - 1;

    for division in 1..=CHART_GRID_DIVISIONS {
        let y = baseline - CHART_HEIGHT * division / CHART_GRID_DIVISIONS;
        for x in (0..width).filter(|x| (x / CHART_GRID_DASH) % 2 == 0) {
            img.put_pixel(x, y, Rgb(CHART_GRID_COLOR));
        }
    }

    for (index, &count) in histogram.counts.iter().enumerate() {
        let left = CHART_BAR_GAP + index as u32 * stride;
        let right = left + CHART_BAR_WIDTH - 1;
        let bar_height = ((count as f64 / max_count) * f64::from(CHART_HEIGHT)).round() as u32;
        let top = baseline - bar_height;

        for x in left..=right {
            for y in top..=baseline {
                let is_edge = x == left || x == right || y == top || y == baseline;
                let color = if is_edge {
                    CHART_EDGE_COLOR
                } else {
                    CHART_BAR_COLOR
                };
                img.put_pixel(x, y, Rgb(color));
            }
        }
    }

    Ok(img)
}

fn save_png(img: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AnalysisError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| AnalysisError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(path = %output_path.display(), "exported png");

    Ok(())
}
