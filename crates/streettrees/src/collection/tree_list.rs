//! Ordered collection of census records with frequency queries.

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexSet;

use crate::error::ConflictError;
use crate::record::TreeRecord;

/// Records in load order.
///
/// The list owns its records and only grows through [`TreeList::push`],
/// which rejects a record whose id is already taken by a different species.
/// Repeated rows (same id, same species) are kept.
#[derive(Debug, Clone, Default)]
pub struct TreeList {
    records: Vec<TreeRecord>,
    /// Position of the first record seen for each id.
    first_by_id: HashMap<u64, usize>,
}

impl TreeList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, rejecting id/species conflicts.
    pub fn push(&mut self, record: TreeRecord) -> Result<(), ConflictError> {
        match self.first_by_id.get(&record.id()) {
            Some(&index) => self.records[index].check_conflict(&record)?,
            None => {
                self.first_by_id.insert(record.id(), self.records.len());
            }
        }
        self.records.push(record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TreeRecord> {
        self.records.iter()
    }

    /// Total number of records.
    pub fn count_total(&self) -> usize {
        self.records.len()
    }

    /// Records whose species contains `query`, ignoring case.
    pub fn count_by_species(&self, query: &str) -> usize {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.species_contains_lowered(&needle))
            .count()
    }

    /// Records in the named borough, ignoring case.
    ///
    /// Names that are not boroughs simply count zero.
    pub fn count_by_borough(&self, borough_name: &str) -> usize {
        self.records
            .iter()
            .filter(|r| r.borough().matches(borough_name))
            .count()
    }

    /// Records matching both the species substring and the borough.
    pub fn count_by_species_and_borough(&self, query: &str, borough_name: &str) -> usize {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.borough().matches(borough_name) && r.species_contains_lowered(&needle))
            .count()
    }

    /// Distinct species names containing `query`, in first-seen order.
    pub fn matching_species_names(&self, query: &str) -> IndexSet<String> {
        let needle = query.to_lowercase();
        let mut names = IndexSet::new();
        for record in self.records.iter().filter(|r| r.species_contains_lowered(&needle)) {
            if !names.contains(record.species()) {
                names.insert(record.species().to_string());
            }
        }
        names
    }
}

impl<'a> IntoIterator for &'a TreeList {
    type Item = &'a TreeRecord;
    type IntoIter = std::slice::Iter<'a, TreeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for TreeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}
