//! Test image synthesis and geometric distortion

/// Chessboard test image construction
pub mod chessboard;
/// Sinusoidal warp distortion
pub mod warp;

pub use chessboard::{ChessboardConfig, build_chessboard};
pub use warp::{WarpParams, warp};
