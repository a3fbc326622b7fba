//! Census record model and field validation.

mod fields;
mod tree;

pub use fields::{Borough, TreeHealth, TreeStatus, ZipCode};
pub use tree::TreeRecord;
