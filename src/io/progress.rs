//! Stage progress display for a generation session

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!("[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar advanced once per completed stage
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no stages
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(STAGE_STYLE.clone());
        Self { bar }
    }

    /// Set the total number of stages
    pub fn initialize(&self, stage_count: usize) {
        self.bar.set_length(stage_count as u64);
        self.bar.set_position(0);
    }

    /// Show the name of the stage now running
    pub fn start_stage(&self, name: &'static str) {
        self.bar.set_message(name);
    }

    /// Mark the running stage as done
    pub fn complete_stage(&self) {
        self.bar.inc(1);
    }

    /// Number of stages completed so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
