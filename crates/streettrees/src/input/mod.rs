//! Census file loading and column layout.

mod columns;
mod loader;
mod source;

pub use columns::ColumnMap;
pub use loader::{InvalidRowPolicy, LoadOutcome, Loader, LoaderConfig};
pub use source::SourceMetadata;
