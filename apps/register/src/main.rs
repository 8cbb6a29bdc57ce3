//! # Slice Register Entry Point
//!
//! Thin binary wrapper: parse command line flags, delegate to
//! `slice_register_lib::run`.

use std::path::PathBuf;

use clap::Parser;

/// Slice POS terminal register
#[derive(Parser)]
#[command(name = "slice-register")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Shop configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = slice_register_lib::run(cli.config.as_deref(), cli.verbose) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
