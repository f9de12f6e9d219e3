//! CLI entry point for the randomized tile mosaic tool

use clap::Parser;
use mosaictile::io::cli::{Cli, FileProcessor};

fn main() -> mosaictile::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
