//! Error types for the streettrees library.

use std::path::PathBuf;
use thiserror::Error;

/// A single field of a census record failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("id must be non-negative (got {0})")]
    Id(i64),

    #[error("diameter must be non-negative (got {0})")]
    Diameter(i64),

    #[error("invalid status: '{0}'")]
    Status(String),

    #[error("invalid health: '{0}'")]
    Health(String),

    #[error("invalid species: species must not be empty")]
    Species,

    #[error("invalid zip code: {0}")]
    ZipCode(String),

    #[error("invalid borough: '{0}'")]
    Borough(String),

    #[error("invalid coordinate: {axis} must be finite (got {value})")]
    Coordinate { axis: &'static str, value: f64 },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Id(_) => "id",
            ValidationError::Diameter(_) => "diameter",
            ValidationError::Status(_) => "status",
            ValidationError::Health(_) => "health",
            ValidationError::Species => "species",
            ValidationError::ZipCode(_) => "zip_code",
            ValidationError::Borough(_) => "borough",
            ValidationError::Coordinate { axis, .. } => *axis,
        }
    }
}

/// Two records share an id but name different species.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("tree {id} is recorded as both '{existing}' and '{incoming}'")]
pub struct ConflictError {
    pub id: u64,
    pub existing: String,
    pub incoming: String,
}

/// Main error type for loading census data.
#[derive(Debug, Error)]
pub enum TreesError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A cell was missing or could not be converted to its column type.
    #[error("Parse error at line {line}, column '{column}': {message}")]
    Field {
        line: u64,
        column: &'static str,
        message: String,
    },

    /// A row parsed but one of its fields is out of range.
    #[error("Invalid record at line {line}: {source}")]
    Validation {
        line: u64,
        #[source]
        source: ValidationError,
    },

    /// A row contradicts an earlier row with the same id.
    #[error("Conflicting record at line {line}: {source}")]
    Conflict {
        line: u64,
        #[source]
        source: ConflictError,
    },
}

/// Result type alias for streettrees operations.
pub type Result<T> = std::result::Result<T, TreesError>;
