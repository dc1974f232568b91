//! Command-line interface and the session that drives generation, analysis and display

use crate::analysis::grayscale::to_grayscale;
use crate::analysis::histogram::{Histogram, compute_default_histogram};
use crate::analysis::statistics::{Statistics, compute_statistics};
use crate::generation::chessboard::{ChessboardConfig, build_chessboard};
use crate::generation::warp::{WarpParams, warp};
use crate::io::configuration::{
    DEFAULT_FREQUENCY, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_IMAGE_SIZE, DEFAULT_JITTER,
    DEFAULT_SEED, DEFAULT_X_STRENGTH, DEFAULT_Y_STRENGTH,
};
use crate::io::display::{DisplaySurface, FileSurface, ImageSlot};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::spatial::raster::Image;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

/// Which flow to run
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Build the chessboard and report its histogram and statistics
    Generate,
    /// Build the chessboard and show its warped variant
    Warp,
    /// Run both flows on the same chessboard
    All,
}

impl Command {
    /// Number of progress stages the flow reports
    pub const fn stage_count(self) -> usize {
        match self {
            Self::Generate => 5,
            Self::Warp => 3,
            Self::All => 7,
        }
    }

    const fn analyzes(self) -> bool {
        matches!(self, Self::Generate | Self::All)
    }

    const fn warps(self) -> bool {
        matches!(self, Self::Warp | Self::All)
    }
}

#[derive(Parser, Debug)]
#[command(name = "chesswarp")]
#[command(
    author,
    version,
    about = "Generate a chessboard test image, warp it and report intensity statistics"
)]
/// Command-line arguments for the chessboard tool
pub struct Cli {
    /// Flow to run (defaults to all)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory receiving the PNG outputs
    #[arg(short, long, global = true, default_value = ".")]
    pub output: PathBuf,

    /// Side length of the square image in pixels
    #[arg(long, global = true, default_value_t = DEFAULT_IMAGE_SIZE)]
    pub size: usize,

    /// Number of chessboard cell rows
    #[arg(long, global = true, default_value_t = DEFAULT_GRID_ROWS)]
    pub rows: usize,

    /// Number of chessboard cell columns
    #[arg(long, global = true, default_value_t = DEFAULT_GRID_COLS)]
    pub cols: usize,

    /// Horizontal warp amplitude in pixels
    #[arg(
        short = 'x',
        long,
        global = true,
        allow_hyphen_values = true,
        default_value_t = DEFAULT_X_STRENGTH
    )]
    pub x_strength: f64,

    /// Vertical warp amplitude in pixels
    #[arg(
        short = 'y',
        long,
        global = true,
        allow_hyphen_values = true,
        default_value_t = DEFAULT_Y_STRENGTH
    )]
    pub y_strength: f64,

    /// Period of the warp waves in pixels
    #[arg(
        short,
        long,
        global = true,
        allow_hyphen_values = true,
        default_value_t = DEFAULT_FREQUENCY
    )]
    pub frequency: f64,

    /// Amplitude of the uniform jitter added to warp coordinates
    #[arg(short, long, global = true, default_value_t = DEFAULT_JITTER)]
    pub jitter: f64,

    /// Random seed for reproducible jitter
    #[arg(short, long, global = true, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output and informational logging
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Flow selected on the command line
    pub const fn selected_command(&self) -> Command {
        match self.command {
            Some(command) => command,
            None => Command::All,
        }
    }

    /// Chessboard dimensions from the arguments
    pub const fn chessboard_config(&self) -> ChessboardConfig {
        ChessboardConfig {
            size: self.size,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Warp parameters from the arguments
    pub const fn warp_params(&self) -> WarpParams {
        WarpParams::new(self.x_strength, self.y_strength, self.frequency)
            .with_jitter(self.jitter, self.seed)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Maximum level for the log subscriber
    pub const fn log_level(&self) -> Level {
        if self.quiet {
            Level::WARN
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }
}

/// Values produced by one session run
#[derive(Debug, Clone)]
pub struct SessionReport {
    /// The generated chessboard
    pub original: Image,
    /// Statistics of the chessboard, when the flow analyzes it
    pub statistics: Option<Statistics>,
    /// Histogram of the chessboard, when the flow analyzes it
    pub histogram: Option<Histogram>,
    /// The warped chessboard, when the flow warps it
    pub warped: Option<Image>,
}

/// Runs the generation flows and hands every result to a display surface
pub struct Session<S: DisplaySurface> {
    surface: S,
    progress: Option<ProgressManager>,
}

impl<S: DisplaySurface> Session<S> {
    /// Create a session presenting to `surface`
    pub fn new(surface: S, show_progress: bool) -> Self {
        let progress = show_progress.then(ProgressManager::new);
        Self { surface, progress }
    }

    /// Borrow the display surface
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Consume the session and return its surface
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn begin(&self, stage: &'static str) {
        tracing::debug!(stage, "stage started");
        if let Some(ref pm) = self.progress {
            pm.start_stage(stage);
        }
    }

    fn end(&self) {
        if let Some(ref pm) = self.progress {
            pm.complete_stage();
        }
    }

    /// Run `command` with the given chessboard and warp configuration
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, analysis or display fails
    pub fn run(
        &mut self,
        command: Command,
        config: &ChessboardConfig,
        params: &WarpParams,
    ) -> Result<SessionReport> {
        if command.warps() {
            params.validate()?;
        }
        if let Some(ref pm) = self.progress {
            pm.initialize(command.stage_count());
        }

        self.begin("build chessboard");
        let original = build_chessboard(config)?;
        self.end();

        let mut report = SessionReport {
            original,
            statistics: None,
            histogram: None,
            warped: None,
        };

        if command.analyzes() {
            let (statistics, histogram) = self.analyze(&report.original)?;
            report.statistics = Some(statistics);
            report.histogram = Some(histogram);
        }

        if command.warps() {
            report.warped = Some(self.distort(&report.original, params)?);
        }

        if let Some(ref pm) = self.progress {
            pm.finish();
        }

        Ok(report)
    }

    /// Convert to grayscale, compute statistics and histogram, and display them
    ///
    /// # Errors
    ///
    /// Returns an error if the image is empty or the surface rejects the output
    pub fn analyze(&mut self, image: &Image) -> Result<(Statistics, Histogram)> {
        self.begin("grayscale");
        let gray = to_grayscale(image);
        self.end();

        self.begin("statistics");
        let statistics = compute_statistics(&gray)?;
        self.end();

        self.begin("histogram");
        let histogram = compute_default_histogram(&gray)?;
        self.end();

        self.begin("display");
        self.surface.set_image(ImageSlot::Original, image)?;
        self.surface.set_chart(&histogram, &statistics)?;
        self.end();

        tracing::info!(%statistics, "analyzed chessboard");

        Ok((statistics, histogram))
    }

    /// Warp `image` and display the result
    ///
    /// # Errors
    ///
    /// Returns an error if the warp parameters are invalid or the surface rejects the output
    pub fn distort(&mut self, image: &Image, params: &WarpParams) -> Result<Image> {
        self.begin("warp");
        let warped = warp(image, params)?;
        self.end();

        self.begin("display warped");
        self.surface.set_image(ImageSlot::Warped, &warped)?;
        self.end();

        Ok(warped)
    }
}

/// Run the command described by `cli`, writing outputs to its output directory
///
/// # Errors
///
/// Returns an error if any stage of the selected flow fails
pub fn run(cli: &Cli) -> Result<SessionReport> {
    let surface = FileSurface::new(cli.output.clone());
    let mut session = Session::new(surface, cli.should_show_progress());
    session.run(cli.selected_command(), &cli.chessboard_config(), &cli.warp_params())
}
