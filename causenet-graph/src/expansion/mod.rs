//! Node Expander: one raw row → the nodes it contributes.
//!
//! In stratified mode each populated `(sex, age band)` death-count cell fans
//! out into one node per valid year of the country. Years are not read from
//! the row; they are injected as [`CountryYears`].

pub mod cause_index;

use causenet_core::constants::{death_count_column, total_deaths_column};
use causenet_core::{AgeBand, CountryYears, GraphMode, NodeKey, RawRow, Sex, StratifiedKey};

pub use cause_index::CauseIndex;

/// Expands rows into node keys according to a [`GraphMode`].
#[derive(Debug, Clone)]
pub struct NodeExpander {
    mode: GraphMode,
    countries: Vec<String>,
}

impl NodeExpander {
    pub fn new(mode: GraphMode, countries: Vec<String>) -> Self {
        Self { mode, countries }
    }

    /// Nodes contributed by `row`. A row without a cause id, or a stratified
    /// row without any populated stratum, contributes nothing.
    pub fn expand_row(&self, row: &RawRow, years: &CountryYears) -> Vec<NodeKey> {
        let Some(cause) = row.concept_id() else {
            return Vec::new();
        };
        match self.mode {
            GraphMode::Stratified => self.expand_stratified(&cause, row, years),
            GraphMode::Flat | GraphMode::Hierarchical => vec![NodeKey::cause_node(cause)],
        }
    }

    fn expand_stratified(&self, cause: &str, row: &RawRow, years: &CountryYears) -> Vec<NodeKey> {
        let mut out = Vec::new();
        for country in &self.countries {
            let country_years = years.years(country);
            if country_years.is_empty() {
                continue;
            }
            for sex in Sex::ALL {
                for band in AgeBand::ALL {
                    if !row.is_present(&death_count_column(sex, band, country)) {
                        continue;
                    }
                    out.extend(country_years.iter().map(|&year| {
                        NodeKey::Stratified(StratifiedKey::new(cause, sex, band, country.as_str(), year))
                    }));
                }
            }
        }
        out
    }

    /// Yearly total deaths of the row for the first configured country;
    /// `0` when absent or non-numeric.
    pub fn total_deaths(&self, row: &RawRow) -> f64 {
        self.countries
            .first()
            .and_then(|country| row.number(&total_deaths_column(country)))
            .unwrap_or(0.0)
    }
}
