//! streettrees: validated loading and species queries for the NYC street tree census.
//!
//! Rows of the census CSV are validated into [`TreeRecord`]s and collected in a
//! [`TreeList`], which answers frequency questions by species substring and by
//! borough.
//!
//! # Example
//!
//! ```no_run
//! use streettrees::{Loader, SpeciesReport};
//!
//! let (outcome, source) = Loader::new().load_file("2015_Street_Tree_Census.csv").unwrap();
//! println!("Loaded {} trees from {}", source.row_count, source.file);
//!
//! let report = SpeciesReport::build(&outcome.trees, "oak");
//! for area in &report.areas {
//!     println!("{}", area);
//! }
//! ```

pub mod collection;
pub mod error;
pub mod input;
pub mod record;

pub use collection::{AreaCount, SpeciesReport, TreeList};
pub use error::{ConflictError, Result, TreesError, ValidationError};
pub use input::{ColumnMap, InvalidRowPolicy, LoadOutcome, Loader, LoaderConfig, SourceMetadata};
pub use record::{Borough, TreeHealth, TreeRecord, TreeStatus, ZipCode};
