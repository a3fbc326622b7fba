//! CSV loader that turns census rows into validated records.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use super::columns::{ColumnMap, names};
use super::source::SourceMetadata;
use crate::collection::TreeList;
use crate::error::{Result, TreesError};
use crate::record::TreeRecord;

/// First field of the header row.
const HEADER_MARKER: &str = "tree_id";

/// Typographic quotes that some exports use in place of `"`.
const CURLY_QUOTES: [char; 2] = ['\u{201C}', '\u{201D}'];

/// What to do with a row whose fields fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidRowPolicy {
    /// Stop loading and report the row.
    #[default]
    Abort,
    /// Log the row and continue.
    Skip,
}

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Column offsets for each record field.
    pub columns: ColumnMap,
    /// Field delimiter.
    pub delimiter: u8,
    /// Maximum records to load (None = all).
    pub max_rows: Option<usize>,
    /// Handling of rows that fail validation.
    pub invalid_rows: InvalidRowPolicy,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            columns: ColumnMap::default(),
            delimiter: b',',
            max_rows: None,
            invalid_rows: InvalidRowPolicy::Abort,
        }
    }
}

/// Result of loading a census file.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub trees: TreeList,
    /// Rows dropped under [`InvalidRowPolicy::Skip`].
    pub skipped: usize,
}

/// Loads census CSV data into a [`TreeList`].
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    /// Create a loader for the standard census layout.
    pub fn new() -> Self {
        Self {
            config: LoaderConfig::default(),
        }
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load a file and return its records and metadata.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<(LoadOutcome, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| TreesError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(|e| TreesError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        drop(file);

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let text = String::from_utf8_lossy(&contents);
        let outcome = self.load_str(&text)?;

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            outcome.trees.len(),
        );
        info!(
            file = %metadata.file,
            rows = metadata.row_count,
            skipped = outcome.skipped,
            "loaded census records"
        );

        Ok((outcome, metadata))
    }

    /// Load records from in-memory CSV text.
    pub fn load_str(&self, text: &str) -> Result<LoadOutcome> {
        let normalized = normalize_quotes(text, self.config.delimiter as char);

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(normalized.as_bytes());

        let mut trees = TreeList::new();
        let mut skipped = 0;

        for (index, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if trees.len() >= max {
                    break;
                }
            }

            let record = result?;
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(index as u64 + 1);

            match record.get(0) {
                None | Some("") => continue,
                Some(HEADER_MARKER) => {
                    debug!(line, "skipping header row");
                    continue;
                }
                Some(_) => {}
            }

            let tree = match self.parse_row(&record, line) {
                Ok(tree) => tree,
                Err(TreesError::Validation { line, source })
                    if self.config.invalid_rows == InvalidRowPolicy::Skip =>
                {
                    warn!(line, field = source.field(), error = %source, "skipping invalid row");
                    skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            trees
                .push(tree)
                .map_err(|source| TreesError::Conflict { line, source })?;
        }

        if trees.is_empty() {
            warn!("no census records found");
        }

        Ok(LoadOutcome { trees, skipped })
    }

    fn parse_row(&self, record: &StringRecord, line: u64) -> Result<TreeRecord> {
        let cols = &self.config.columns;
        let cells = Cells { record, line };

        let id = cells.integer(cols.id, names::ID)?;
        let diameter = cells.integer(cols.diameter, names::DIAMETER)?;
        let status = cells.text(cols.status, names::STATUS)?;
        let health = cells.text(cols.health, names::HEALTH)?;
        let species = cells.text(cols.species, names::SPECIES)?;
        let zip = cells.integer(cols.zip_code, names::ZIP_CODE)?;
        let borough = cells.text(cols.borough, names::BOROUGH)?;
        let x = cells.float(cols.x, names::X)?;
        let y = cells.float(cols.y, names::Y)?;

        TreeRecord::new(id, diameter, status, health, species, zip, borough, x, y)
            .map_err(|source| TreesError::Validation { line, source })
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Rewrite curly quotes to `"` and drop whitespace between a field start and
/// its opening quote, so the csv reader sees the quote as the first byte.
fn normalize_quotes(text: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending = String::new();
    let mut in_quotes = false;
    let mut at_field_start = true;

    for ch in text.chars() {
        let ch = if CURLY_QUOTES.contains(&ch) { '"' } else { ch };

        if at_field_start && !in_quotes && (ch == ' ' || ch == '\t') {
            pending.push(ch);
            continue;
        }
        if ch != '"' {
            out.push_str(&pending);
        }
        pending.clear();
        out.push(ch);

        if ch == '"' {
            in_quotes = !in_quotes;
            at_field_start = false;
        } else if !in_quotes && (ch == delimiter || ch == '\n') {
            at_field_start = true;
        } else {
            at_field_start = false;
        }
    }
    out.push_str(&pending);
    out
}

/// Typed access to the cells of one row.
struct Cells<'r> {
    record: &'r StringRecord,
    line: u64,
}

impl<'r> Cells<'r> {
    fn text(&self, index: usize, column: &'static str) -> Result<&'r str> {
        self.record.get(index).ok_or_else(|| TreesError::Field {
            line: self.line,
            column,
            message: format!(
                "row has {} columns, expected at least {}",
                self.record.len(),
                index + 1
            ),
        })
    }

    fn integer(&self, index: usize, column: &'static str) -> Result<i64> {
        let raw = self.text(index, column)?;
        raw.parse().map_err(|_| TreesError::Field {
            line: self.line,
            column,
            message: format!("'{}' is not an integer", raw),
        })
    }

    fn float(&self, index: usize, column: &'static str) -> Result<f64> {
        let raw = self.text(index, column)?;
        raw.parse().map_err(|_| TreesError::Field {
            line: self.line,
            column,
            message: format!("'{}' is not a number", raw),
        })
    }
}
