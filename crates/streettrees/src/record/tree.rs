//! The validated census record.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::fields::{Borough, TreeHealth, TreeStatus, ZipCode};
use crate::error::{ConflictError, ValidationError};

/// One row of the street tree census.
///
/// A `TreeRecord` can only be obtained through [`TreeRecord::new`], so every
/// instance satisfies the field rules. Equality and ordering look only at the
/// id and the species name (case-insensitively); use
/// [`TreeRecord::check_conflict`] to detect two rows that claim the same id
/// for different species.
#[derive(Debug, Clone, Serialize)]
pub struct TreeRecord {
    id: u64,
    diameter: u32,
    status: TreeStatus,
    health: TreeHealth,
    species: String,
    zip_code: ZipCode,
    borough: Borough,
    x: f64,
    y: f64,
}

impl TreeRecord {
    /// Validate the nine census fields and build a record.
    ///
    /// Fields are checked in argument order and the first violation is
    /// returned. Status and health may be empty; borough may not. Zip codes
    /// shorter than five digits are left-padded with zeros.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        diameter: i64,
        status: &str,
        health: &str,
        species: &str,
        zip: i64,
        borough: &str,
        x: f64,
        y: f64,
    ) -> Result<Self, ValidationError> {
        let id = u64::try_from(id).map_err(|_| ValidationError::Id(id))?;
        let diameter = u32::try_from(diameter).map_err(|_| ValidationError::Diameter(diameter))?;
        let status: TreeStatus = status.parse()?;
        let health: TreeHealth = health.parse()?;

        let species = species.trim();
        if species.is_empty() {
            return Err(ValidationError::Species);
        }

        let zip_code = ZipCode::from_number(zip)?;
        let borough: Borough = borough.parse()?;
        let x = finite("x", x)?;
        let y = finite("y", y)?;

        Ok(Self {
            id,
            diameter,
            status,
            health,
            species: species.to_string(),
            zip_code,
            borough,
            x,
            y,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Trunk diameter at breast height, in inches.
    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    pub fn status(&self) -> TreeStatus {
        self.status
    }

    pub fn health(&self) -> TreeHealth {
        self.health
    }

    /// Common species name in its original casing.
    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn zip_code(&self) -> &ZipCode {
        &self.zip_code
    }

    pub fn borough(&self) -> Borough {
        self.borough
    }

    /// State Plane x coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// State Plane y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Substring match on the lowercased species name.
    ///
    /// `needle` must already be lowercase so a scan lowers the query once.
    /// An empty needle matches every record.
    pub(crate) fn species_contains_lowered(&self, needle: &str) -> bool {
        self.species.to_lowercase().contains(needle)
    }

    /// Error if `other` has the same id but names a different species.
    pub fn check_conflict(&self, other: &TreeRecord) -> Result<(), ConflictError> {
        if self.id == other.id && !species_eq(&self.species, &other.species) {
            return Err(ConflictError {
                id: self.id,
                existing: self.species.clone(),
                incoming: other.species.clone(),
            });
        }
        Ok(())
    }
}

fn finite(axis: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::Coordinate { axis, value })
    }
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

fn species_eq(a: &str, b: &str) -> bool {
    folded(a).eq(folded(b))
}

impl PartialEq for TreeRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && species_eq(&self.species, &other.species)
    }
}

impl Eq for TreeRecord {}

impl Hash for TreeRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        for c in folded(&self.species) {
            c.hash(state);
        }
    }
}

impl Ord for TreeRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        folded(&self.species)
            .cmp(folded(&other.species))
            .then(self.id.cmp(&other.id))
    }
}

impl PartialOrd for TreeRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TreeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tree ID: {} Diameter: {} Status: {} Health: {} Species: {} Zip Code: {} Borough: {} x: {} y: {}",
            self.id,
            self.diameter,
            self.status,
            self.health,
            self.species,
            self.zip_code,
            self.borough,
            self.x,
            self.y
        )
    }
}
