//! Typed census fields and their parsing rules.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

/// Condition of the tree at survey time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeStatus {
    Alive,
    Dead,
    Stump,
    /// Left blank in the census.
    #[default]
    Unspecified,
}

impl TreeStatus {
    /// Get a human-readable label, empty for unspecified.
    pub fn label(&self) -> &'static str {
        match self {
            TreeStatus::Alive => "Alive",
            TreeStatus::Dead => "Dead",
            TreeStatus::Stump => "Stump",
            TreeStatus::Unspecified => "",
        }
    }
}

impl FromStr for TreeStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Ok(TreeStatus::Unspecified)
        } else if trimmed.eq_ignore_ascii_case("alive") {
            Ok(TreeStatus::Alive)
        } else if trimmed.eq_ignore_ascii_case("dead") {
            Ok(TreeStatus::Dead)
        } else if trimmed.eq_ignore_ascii_case("stump") {
            Ok(TreeStatus::Stump)
        } else {
            Err(ValidationError::Status(s.to_string()))
        }
    }
}

impl fmt::Display for TreeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Perceived health of a living tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeHealth {
    Good,
    Fair,
    Poor,
    /// Left blank in the census (dead trees and stumps).
    #[default]
    Unspecified,
}

impl TreeHealth {
    /// Get a human-readable label, empty for unspecified.
    pub fn label(&self) -> &'static str {
        match self {
            TreeHealth::Good => "Good",
            TreeHealth::Fair => "Fair",
            TreeHealth::Poor => "Poor",
            TreeHealth::Unspecified => "",
        }
    }
}

impl FromStr for TreeHealth {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Ok(TreeHealth::Unspecified)
        } else if trimmed.eq_ignore_ascii_case("good") {
            Ok(TreeHealth::Good)
        } else if trimmed.eq_ignore_ascii_case("fair") {
            Ok(TreeHealth::Fair)
        } else if trimmed.eq_ignore_ascii_case("poor") {
            Ok(TreeHealth::Poor)
        } else {
            Err(ValidationError::Health(s.to_string()))
        }
    }
}

impl fmt::Display for TreeHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the five boroughs of New York City.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Borough {
    Manhattan,
    Bronx,
    Brooklyn,
    Queens,
    #[serde(rename = "Staten Island")]
    StatenIsland,
}

impl Borough {
    /// All boroughs in reporting order.
    pub const ALL: [Borough; 5] = [
        Borough::Manhattan,
        Borough::Bronx,
        Borough::Brooklyn,
        Borough::Queens,
        Borough::StatenIsland,
    ];

    /// Official borough name as it appears in the census.
    pub fn name(&self) -> &'static str {
        match self {
            Borough::Manhattan => "Manhattan",
            Borough::Bronx => "Bronx",
            Borough::Brooklyn => "Brooklyn",
            Borough::Queens => "Queens",
            Borough::StatenIsland => "Staten Island",
        }
    }

    /// Case-insensitive comparison against a free-text borough name.
    pub fn matches(&self, name: &str) -> bool {
        self.name().eq_ignore_ascii_case(name.trim())
    }
}

impl FromStr for Borough {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Borough::ALL
            .into_iter()
            .find(|b| b.matches(s))
            .ok_or_else(|| ValidationError::Borough(s.to_string()))
    }
}

impl fmt::Display for Borough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A five-digit US zip code, kept as text so leading zeros survive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ZipCode(String);

impl ZipCode {
    const WIDTH: usize = 5;

    /// Build from a numeric zip, left-padding with zeros.
    pub fn from_number(zip: i64) -> Result<Self, ValidationError> {
        if !(0..=99_999).contains(&zip) {
            return Err(ValidationError::ZipCode(zip.to_string()));
        }
        Ok(Self(format!("{:0width$}", zip, width = Self::WIDTH)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ZipCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.len() > Self::WIDTH
            || !trimmed.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ValidationError::ZipCode(s.to_string()));
        }
        Ok(Self(format!("{:0>width$}", trimmed, width = Self::WIDTH)))
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
