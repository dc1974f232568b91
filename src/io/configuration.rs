//! Generation constants and runtime configuration defaults

// Chessboard defaults
/// Side length of the generated square image in pixels
pub const DEFAULT_IMAGE_SIZE: usize = 512;
/// Number of cell rows in the chessboard
pub const DEFAULT_GRID_ROWS: usize = 6;
/// Number of cell columns in the chessboard
pub const DEFAULT_GRID_COLS: usize = 6;

/// Green channel of painted cells in the first row
pub const GREEN_SHADE_MIN: u8 = 30;
/// Green channel of painted cells in the last row
pub const GREEN_SHADE_MAX: u8 = 220;
/// Background color of unpainted cells
pub const BACKGROUND_COLOR: [u8; 3] = [255, 255, 255];

// Safety limit to prevent excessive memory allocation
/// Maximum allowed image dimension and grid dimension
pub const MAX_IMAGE_SIZE: usize = 10_000;

// Grayscale conversion
/// Luminance weights applied to the red, green and blue channels
pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.2989, 0.587, 0.114];

// Histogram defaults
/// Number of equal-width intensity bins
pub const HISTOGRAM_BIN_COUNT: usize = 10;
/// Closed intensity range partitioned by the bins
pub const INTENSITY_RANGE: (f64, f64) = (0.0, 255.0);
/// Largest bin count accepted by the histogram and its chart
pub const MAX_HISTOGRAM_BINS: usize = 1024;

// Warp defaults
/// Horizontal displacement amplitude in pixels
pub const DEFAULT_X_STRENGTH: f64 = 15.0;
/// Vertical displacement amplitude in pixels
pub const DEFAULT_Y_STRENGTH: f64 = 20.0;
/// Period of the sinusoidal displacement in pixels
pub const DEFAULT_FREQUENCY: f64 = 500.0;
/// Amplitude of the uniform jitter term
pub const DEFAULT_JITTER: f64 = 0.0;
/// Value of remapped samples falling outside the source image
pub const BORDER_VALUE: u8 = 0;

/// Fixed seed for reproducible jitter
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// File name of the generated chessboard
pub const CHESSBOARD_FILE_NAME: &str = "chessboard.png";
/// File name of the warped chessboard
pub const WARPED_FILE_NAME: &str = "chessboard_warped.png";
/// File name of the rendered histogram chart
pub const HISTOGRAM_FILE_NAME: &str = "histogram.png";

// Histogram chart geometry
/// Width of a single histogram bar in pixels
pub const CHART_BAR_WIDTH: u32 = 32;
/// Gap between adjacent histogram bars in pixels
pub const CHART_BAR_GAP: u32 = 4;
/// Height of the chart plotting area in pixels
pub const CHART_HEIGHT: u32 = 240;
/// Bar fill color
pub const CHART_BAR_COLOR: [u8; 3] = [0, 128, 0];
/// Bar outline color
pub const CHART_EDGE_COLOR: [u8; 3] = [0, 0, 0];
/// Color of the horizontal grid lines behind the bars
pub const CHART_GRID_COLOR: [u8; 3] = [210, 210, 210];
/// Number of equal height bands separated by grid lines
pub const CHART_GRID_DIVISIONS: u32 = 4;
/// Length in pixels of each dash and each gap of a grid line
pub const CHART_GRID_DASH: u32 = 4;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
