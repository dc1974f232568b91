//! CLI entry point for chessboard generation, warping and analysis

use chesswarp::io::cli::{Cli, run};
use clap::Parser;

fn main() -> chesswarp::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let report = run(&cli)?;
    tracing::debug!(
        analyzed = report.statistics.is_some(),
        warped = report.warped.is_some(),
        "session finished"
    );
    Ok(())
}
