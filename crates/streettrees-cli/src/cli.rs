//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Look up how common a tree species is on New York City streets
#[derive(Parser)]
#[command(name = "streettrees")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the street tree census CSV
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print each report as a JSON object
    #[arg(long)]
    pub json: bool,

    /// Log and skip rows that fail validation instead of stopping
    #[arg(long)]
    pub skip_invalid: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
