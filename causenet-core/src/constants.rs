//! Column names and column-name builders for the source dataset.

use crate::models::{AgeBand, Sex};

/// Column holding the cause identifier.
pub const CONCEPT_ID_COLUMN: &str = "concept_id";

/// Column holding the successor relation cell.
pub const SUCCESSOR_COLUMN: &str = "successor_array";

/// Column holding the predecessor relation cell.
pub const PREDECESSOR_COLUMN: &str = "predecessors_array";

/// Key carrying the counterpart in a successor descriptor.
pub const SUCCESSOR_ID_KEY: &str = "successor_id";

/// Key carrying the counterpart in a predecessor descriptor.
pub const PREDECESSOR_ID_KEY: &str = "predecessor_id";

/// Key carrying the weight of a descriptor.
pub const IMPACT_KEY: &str = "impact";

/// Death count for one `(sex, age band, country)` stratum,
/// e.g. `male_yr_deaths_>=_65_FRANCE`.
pub fn death_count_column(sex: Sex, band: AgeBand, country: &str) -> String {
    format!(
        "{}_yr_deaths_{}_{}",
        sex.as_str(),
        band.column_fragment(),
        country
    )
}

/// Column whose distinct values enumerate the valid years for a country.
pub fn year_column(country: &str) -> String {
    format!("total_deaths_source_year_{country}")
}

/// Column holding the yearly total deaths for a country.
pub fn total_deaths_column(country: &str) -> String {
    format!("total_yr_deaths_{country}")
}
