//! CLI entry point for the gas-tank and pipe board solver

use clap::Parser;
use pipeflow::io::cli::{Cli, FileProcessor};
use tracing::Level;

fn main() -> pipeflow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet { Level::WARN } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
