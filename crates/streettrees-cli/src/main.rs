//! streettrees CLI - species popularity on NYC streets.

mod cli;
mod commands;
mod logging;
mod session;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = commands::query::run(cli.file, cli.json, cli.skip_invalid, cli.verbose);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
