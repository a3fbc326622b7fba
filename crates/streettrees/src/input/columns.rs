//! Positional column layout of the census export.

/// Zero-based column offsets for each record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub id: usize,
    pub diameter: usize,
    pub status: usize,
    pub health: usize,
    pub species: usize,
    pub zip_code: usize,
    pub borough: usize,
    pub x: usize,
    pub y: usize,
}

impl ColumnMap {
    /// Layout of the 2015 Street Tree Census export from NYC Open Data.
    pub const CENSUS_2015: ColumnMap = ColumnMap {
        id: 0,
        diameter: 3,
        status: 6,
        health: 7,
        species: 9,
        zip_code: 25,
        borough: 29,
        x: 39,
        y: 40,
    };

    /// Number of columns a row must have to cover every field.
    pub fn min_width(&self) -> usize {
        [
            self.id,
            self.diameter,
            self.status,
            self.health,
            self.species,
            self.zip_code,
            self.borough,
            self.x,
            self.y,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
            + 1
    }
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self::CENSUS_2015
    }
}

/// Header names used in diagnostics.
pub(crate) mod names {
    pub const ID: &str = "tree_id";
    pub const DIAMETER: &str = "tree_dbh";
    pub const STATUS: &str = "status";
    pub const HEALTH: &str = "health";
    pub const SPECIES: &str = "spc_common";
    pub const ZIP_CODE: &str = "zipcode";
    pub const BOROUGH: &str = "boroname";
    pub const X: &str = "x_sp";
    pub const Y: &str = "y_sp";
}
