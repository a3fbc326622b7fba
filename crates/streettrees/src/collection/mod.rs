//! Tree collection and aggregation queries.

mod report;
mod tree_list;

pub use report::{AreaCount, CITY_LABEL, SpeciesReport, group_thousands};
pub use tree_list::TreeList;
