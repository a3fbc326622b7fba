//! Integration tests for loading census files and querying them.

use std::io::Write;
use tempfile::NamedTempFile;

use streettrees::{Borough, InvalidRowPolicy, Loader, LoaderConfig, SpeciesReport, TreesError};

/// Header of the 2015 census export.
const HEADER: &str = "tree_id,block_id,created_at,tree_dbh,stump_diam,curb_loc,status,health,spc_latin,spc_common,steward,guards,sidewalk,user_type,problems,root_stone,root_grate,root_other,trunk_wire,trnk_light,trnk_other,brch_light,brch_shoe,brch_other,address,zipcode,zip_city,cb_num,borocode,boroname,cncldist,st_assem,st_senate,nta,nta_name,boro_ct,state,latitude,longitude,x_sp,y_sp";

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

/// One census row with realistic filler in the unused columns.
fn census_row(id: u32, dbh: u32, status: &str, health: &str, species: &str, zip: &str, boro: &str) -> String {
    format!(
        "{id},348711,08/27/2015,{dbh},0,OnCurb,{status},{health},Acer rubrum,{species},None,None,NoDamage,TreesCount Staff,None,No,No,No,No,No,No,No,No,No,\"108-005 70 AVENUE\",{zip},Forest Hills,406,4,{boro},29,28,16,QN17,Forest Hills,4073900,New York,40.72309177,-73.84421522,1027431.148,202756.7687"
    )
}

fn sample_census() -> String {
    [
        HEADER.to_string(),
        census_row(180683, 3, "Alive", "Fair", "red maple", "11375", "Queens"),
        census_row(200540, 21, "Alive", "Fair", "pin oak", "11357", "Queens"),
        census_row(204026, 3, "Alive", "Good", "honeylocust", "11211", "Brooklyn"),
        census_row(204337, 10, "Alive", "Good", "honeylocust", "11211", "Brooklyn"),
        census_row(189565, 21, "Alive", "Good", "American linden", "11215", "Brooklyn"),
        census_row(190422, 11, "Alive", "Good", "honeylocust", "10023", "Manhattan"),
        census_row(190426, 11, "Alive", "Good", "northern red oak", "10023", "Manhattan"),
        census_row(208649, 9, "Alive", "Good", "Northern Red Oak", "10460", "Bronx"),
        String::new(),
    ]
    .join("\n")
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_load_census_file() {
    let file = create_test_file(&sample_census());

    let (outcome, source) = Loader::new().load_file(file.path()).expect("Load failed");

    assert_eq!(outcome.trees.len(), 8);
    assert_eq!(source.row_count, 8);
    assert!(source.hash.starts_with("sha256:"));
    assert_eq!(source.size_bytes, sample_census().len() as u64);

    let first = outcome.trees.iter().next().unwrap();
    assert_eq!(first.id(), 180683);
    assert_eq!(first.species(), "red maple");
    assert_eq!(first.borough(), Borough::Queens);
    assert_eq!(first.zip_code().as_str(), "11375");
    assert_eq!(first.x(), 1027431.148);
}

#[test]
fn test_missing_file() {
    let err = Loader::new()
        .load_file("/definitely/not/here/trees.csv")
        .unwrap_err();
    assert!(matches!(err, TreesError::Io { .. }));
}

#[test]
fn test_malformed_row_aborts() {
    let content = format!(
        "{}\n{}\n{}\n",
        HEADER,
        census_row(1, 3, "Alive", "Fair", "red maple", "11375", "Queens"),
        census_row(2, 3, "Alive", "Fair", "red maple", "11375", "Jersey City"),
    );
    let file = create_test_file(&content);

    let err = Loader::new().load_file(file.path()).unwrap_err();
    match err {
        TreesError::Validation { line, source } => {
            assert_eq!(line, 3);
            assert_eq!(source.field(), "borough");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_stumps_without_species_can_be_skipped() {
    let content = format!(
        "{}\n{}\n{}\n",
        HEADER,
        census_row(1, 3, "Alive", "Fair", "red maple", "11375", "Queens"),
        census_row(2, 0, "Stump", "", "", "11375", "Queens"),
    );
    let file = create_test_file(&content);

    let loader = Loader::with_config(LoaderConfig {
        invalid_rows: InvalidRowPolicy::Skip,
        ..LoaderConfig::default()
    });
    let (outcome, _) = loader.load_file(file.path()).unwrap();
    assert_eq!(outcome.trees.len(), 1);
    assert_eq!(outcome.skipped, 1);
}

#[test]
fn test_short_zip_padded_on_load() {
    let content = census_row(1, 3, "Alive", "Good", "ginkgo", "7302", "Staten Island");
    let file = create_test_file(&content);

    let (outcome, _) = Loader::new().load_file(file.path()).unwrap();
    let tree = outcome.trees.iter().next().unwrap();
    assert_eq!(tree.zip_code().as_str(), "07302");
    assert_eq!(tree.borough(), Borough::StatenIsland);
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn test_species_report_over_file() {
    let file = create_test_file(&sample_census());
    let (outcome, _) = Loader::new().load_file(file.path()).unwrap();
    let trees = &outcome.trees;

    assert_eq!(trees.count_by_species("oak"), 3);
    assert_eq!(trees.count_by_species("HONEY"), 3);
    assert_eq!(trees.count_by_borough("brooklyn"), 3);
    assert_eq!(trees.count_by_species_and_borough("oak", "Manhattan"), 1);

    let matches = trees.matching_species_names("red");
    let names: Vec<&str> = matches.iter().map(String::as_str).collect();
    assert_eq!(names, vec!["red maple", "northern red oak", "Northern Red Oak"]);

    let report = SpeciesReport::build(trees, "oak");
    let nyc = report.area("NYC").unwrap();
    assert_eq!((nyc.count, nyc.total), (3, 8));
    assert_eq!(format!("{:.2}", nyc.percentage), "37.50");

    let staten = report.area("Staten Island").unwrap();
    assert_eq!((staten.count, staten.total), (0, 0));
    assert_eq!(staten.percentage, 0.0);
}

#[test]
fn test_report_serializes_to_json() {
    let file = create_test_file(&sample_census());
    let (outcome, _) = Loader::new().load_file(file.path()).unwrap();

    let report = SpeciesReport::build(&outcome.trees, "linden");
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["query"], "linden");
    assert_eq!(json["matching_species"][0], "American linden");
    assert_eq!(json["areas"][0]["area"], "NYC");
    assert_eq!(json["areas"][0]["count"], 1);
    assert_eq!(json["areas"].as_array().unwrap().len(), 6);
}

#[test]
fn test_records_sort_by_species_then_id() {
    let file = create_test_file(&sample_census());
    let (outcome, _) = Loader::new().load_file(file.path()).unwrap();

    let mut records: Vec<_> = outcome.trees.iter().cloned().collect();
    records.sort();

    let first = &records[0];
    assert_eq!(first.species(), "American linden");
    let oaks: Vec<u64> = records
        .iter()
        .filter(|r| r.species().eq_ignore_ascii_case("northern red oak"))
        .map(|r| r.id())
        .collect();
    assert_eq!(oaks, vec![190426, 208649]);
}
