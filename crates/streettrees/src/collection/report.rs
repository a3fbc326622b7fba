//! Species popularity report across the city and its boroughs.

use std::fmt;

use indexmap::IndexSet;
use serde::Serialize;

use super::tree_list::TreeList;
use crate::record::Borough;

/// Label used for the city-wide row.
pub const CITY_LABEL: &str = "NYC";

/// Matching trees within one area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaCount {
    /// "NYC" or a borough name.
    pub area: &'static str,
    /// Trees in the area whose species matched.
    pub count: usize,
    /// All trees in the area.
    pub total: usize,
    /// `count / total` as a percentage, 0 when the area is empty.
    pub percentage: f64,
}

impl AreaCount {
    fn new(area: &'static str, count: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        };
        Self {
            area,
            count,
            total,
            percentage,
        }
    }
}

impl fmt::Display for AreaCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\t {:<18} : {} ({}) {:.2}%",
            self.area,
            group_thousands(self.count),
            group_thousands(self.total),
            self.percentage
        )
    }
}

/// Answer to a single species query.
#[derive(Debug, Clone, Serialize)]
pub struct SpeciesReport {
    pub query: String,
    /// Distinct species names containing the query, first-seen order.
    pub matching_species: IndexSet<String>,
    /// City row followed by one row per borough.
    pub areas: Vec<AreaCount>,
}

impl SpeciesReport {
    /// Run all queries needed to report on `query`.
    pub fn build(trees: &TreeList, query: &str) -> Self {
        let mut areas = Vec::with_capacity(Borough::ALL.len() + 1);
        areas.push(AreaCount::new(
            CITY_LABEL,
            trees.count_by_species(query),
            trees.count_total(),
        ));
        for borough in Borough::ALL {
            areas.push(AreaCount::new(
                borough.name(),
                trees.count_by_species_and_borough(query, borough.name()),
                trees.count_by_borough(borough.name()),
            ));
        }

        Self {
            query: query.to_string(),
            matching_species: trees.matching_species_names(query),
            areas,
        }
    }

    /// True when no species matched the query.
    pub fn is_empty(&self) -> bool {
        self.matching_species.is_empty()
    }

    /// Row for a given area label, if present.
    pub fn area(&self, label: &str) -> Option<&AreaCount> {
        self.areas.iter().find(|a| a.area.eq_ignore_ascii_case(label))
    }
}

/// Format an integer with comma thousands separators.
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TreeRecord;

    fn sample() -> TreeList {
        let mut list = TreeList::new();
        for (id, species, borough) in [
            (1, "Red oak", "Queens"),
            (2, "White Oak", "Queens"),
            (3, "Maple", "Bronx"),
        ] {
            list.push(
                TreeRecord::new(id, 4, "Alive", "Good", species, 11101, borough, 0.0, 0.0)
                    .unwrap(),
            )
            .unwrap();
        }
        list
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(683788), "683,788");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_report_rows_in_fixed_order() {
        let report = SpeciesReport::build(&sample(), "oak");
        let labels: Vec<&str> = report.areas.iter().map(|a| a.area).collect();
        assert_eq!(
            labels,
            vec!["NYC", "Manhattan", "Bronx", "Brooklyn", "Queens", "Staten Island"]
        );
    }

    #[test]
    fn test_report_counts() {
        let report = SpeciesReport::build(&sample(), "oak");
        assert!(!report.is_empty());

        let nyc = report.area("NYC").unwrap();
        assert_eq!((nyc.count, nyc.total), (2, 3));

        let queens = report.area("queens").unwrap();
        assert_eq!((queens.count, queens.total), (2, 2));
        assert_eq!(queens.percentage, 100.0);
    }

    #[test]
    fn test_empty_borough_reports_zero_percent() {
        let report = SpeciesReport::build(&sample(), "oak");
        let manhattan = report.area("Manhattan").unwrap();
        assert_eq!(manhattan.total, 0);
        assert_eq!(manhattan.percentage, 0.0);
        assert!(manhattan.to_string().ends_with("0 (0) 0.00%"));
    }

    #[test]
    fn test_row_format() {
        let row = AreaCount::new("NYC", 1234, 683788);
        assert_eq!(
            row.to_string(),
            format!("\t {:<18} : 1,234 (683,788) 0.18%", "NYC")
        );
    }

    #[test]
    fn test_no_match() {
        let report = SpeciesReport::build(&sample(), "baobab");
        assert!(report.is_empty());
        assert!(report.areas.iter().all(|a| a.count == 0));
    }
}
