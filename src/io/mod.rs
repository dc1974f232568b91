//! Input/output operations, presentation surfaces and error handling

/// Command-line parsing and session orchestration
pub mod cli;
/// Default parameters and output settings
pub mod configuration;
/// Display surfaces for images and histogram charts
pub mod display;
/// Error types shared by every module
pub mod error;
/// PNG export and chart rendering
pub mod image;
/// Stage progress display
pub mod progress;
