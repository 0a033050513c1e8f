//! CLI entry point for the halftone tile renderer

use clap::Parser;
use halftile::io::cli::{Cli, PatternRunner};

fn main() -> halftile::Result<()> {
    let cli = Cli::parse();
    let mut runner = PatternRunner::new(cli);
    runner.run().map(|_| ())
}
