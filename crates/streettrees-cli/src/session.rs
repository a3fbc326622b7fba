//! Interactive read-eval loop over species queries.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use streettrees::{SpeciesReport, TreeList};

const PROMPT: &str = "Enter the tree species to learn more about it: (\"quit\" to stop): ";
const QUIT: &str = "quit";

/// How reports are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per line, no prompts.
    Json,
}

/// Reads species queries line by line and writes a report for each.
pub struct QuerySession<'a> {
    trees: &'a TreeList,
    format: OutputFormat,
}

impl<'a> QuerySession<'a> {
    pub fn new(trees: &'a TreeList, format: OutputFormat) -> Self {
        Self { trees, format }
    }

    /// Run until `quit` or end of input. Returns the number of queries answered.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> io::Result<usize> {
        let mut answered = 0;
        let mut line = String::new();

        loop {
            if self.format == OutputFormat::Text {
                writeln!(out, "{}", PROMPT)?;
                out.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            let query = line.trim();
            if query.eq_ignore_ascii_case(QUIT) {
                break;
            }
            if query.is_empty() {
                continue;
            }

            let report = SpeciesReport::build(self.trees, query);
            match self.format {
                OutputFormat::Text => write_text(out, &report)?,
                OutputFormat::Json => {
                    serde_json::to_writer(&mut *out, &report)?;
                    writeln!(out)?;
                }
            }
            answered += 1;
        }

        Ok(answered)
    }
}

fn write_text<W: Write>(out: &mut W, report: &SpeciesReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "All matching species:".yellow().bold())?;

    if report.is_empty() {
        writeln!(
            out,
            "There are no records of {} trees on NYC streets.",
            report.query
        )?;
        writeln!(out)?;
        return Ok(());
    }

    for name in &report.matching_species {
        writeln!(out, "\t {}", name)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", "Popularity in the city:".yellow().bold())?;
    for area in &report.areas {
        writeln!(out, "{}", area)?;
    }
    writeln!(out)?;

    Ok(())
}
