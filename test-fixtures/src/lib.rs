//! Fixture loader and row builders for causenet integration tests.
//!
//! JSON datasets live under `test-fixtures/datasets/`. The builders produce
//! rows following the dataset column contract for a single country.

use std::path::PathBuf;

use causenet_core::constants::{
    death_count_column, total_deaths_column, year_column, CONCEPT_ID_COLUMN,
    PREDECESSOR_COLUMN, SUCCESSOR_COLUMN,
};
use causenet_core::{AgeBand, Dataset, RawRow, Sex};
use serde::de::DeserializeOwned;

/// Country used by every builder.
pub const COUNTRY: &str = "FRANCE";

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    // From a member crate, walk up to the workspace root.
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load a dataset fixture (a JSON array of rows).
pub fn load_dataset(relative_path: &str) -> Dataset {
    Dataset::new(load_fixture::<Vec<RawRow>>(relative_path))
}

/// Six causes over two years with repairable, broken, and dangling cells.
pub fn sample_dataset() -> Dataset {
    load_dataset("datasets/sample.json")
}

/// A row with only a cause id.
pub fn cause_row(cause: &str) -> RawRow {
    RawRow::new().with(CONCEPT_ID_COLUMN, cause)
}

/// A row with one populated death-count cell per stratum and a year value.
pub fn stratified_row(cause: &str, strata: &[(Sex, AgeBand)], year: i32) -> RawRow {
    let mut row = cause_row(cause).with(&year_column(COUNTRY), year);
    for (sex, band) in strata {
        row.set(&death_count_column(*sex, *band, COUNTRY), 10);
    }
    row
}

pub fn with_successors(row: RawRow, cell: &str) -> RawRow {
    row.with(SUCCESSOR_COLUMN, cell)
}

pub fn with_predecessors(row: RawRow, cell: &str) -> RawRow {
    row.with(PREDECESSOR_COLUMN, cell)
}

pub fn with_total_deaths(row: RawRow, deaths: impl Into<serde_json::Value>) -> RawRow {
    row.with(&total_deaths_column(COUNTRY), deaths)
}

/// "stroke" with a successor entry on "heart failure"; both share the
/// `(male, >=65yo, FRANCE, 2010)` stratum, and "heart failure" also has a
/// `(female, <=4yo)` stratum that must stay unconnected.
pub fn stroke_scenario() -> Dataset {
    let stroke = with_successors(
        stratified_row("stroke", &[(Sex::Male, AgeBand::From65)], 2010),
        r#"[{"successor_id":"heart failure","impact":0.4}]"#,
    );
    let heart_failure = stratified_row(
        "heart failure",
        &[(Sex::Male, AgeBand::From65), (Sex::Female, AgeBand::UpTo4)],
        2010,
    );
    Dataset::new(vec![stroke, heart_failure])
}
