//! Query command - load a census file and answer species queries.

use std::io;
use std::path::PathBuf;

use colored::Colorize;
use streettrees::{InvalidRowPolicy, Loader, LoaderConfig, collection::group_thousands};

use crate::session::{OutputFormat, QuerySession};

pub fn run(
    file: PathBuf,
    json: bool,
    skip_invalid: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Validate input file exists
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let loader = Loader::with_config(LoaderConfig {
        invalid_rows: if skip_invalid {
            InvalidRowPolicy::Skip
        } else {
            InvalidRowPolicy::Abort
        },
        ..LoaderConfig::default()
    });

    let (outcome, source) = loader.load_file(&file)?;

    if verbose && !json {
        println!(
            "{} {} trees from {}",
            "Loaded".cyan().bold(),
            group_thousands(source.row_count).white().bold(),
            source.file.white()
        );
        if outcome.skipped > 0 {
            println!(
                "Skipped {} invalid rows",
                group_thousands(outcome.skipped).yellow()
            );
        }
        println!("Source hash: {}", source.hash);
        println!();
    }

    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let session = QuerySession::new(&outcome.trees, format);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let answered = session.run(stdin.lock(), &mut stdout.lock())?;
    tracing::debug!(answered, "session ended");

    Ok(())
}
