//! Dataset location and country scope.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Dataset file. `.json` holds an array of row objects, `.jsonl` one row per line.
    pub path: Option<PathBuf>,
    /// Countries whose stratification columns are expanded. Default: `["FRANCE"]`.
    pub countries: Vec<String>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: None,
            countries: vec![defaults::DEFAULT_COUNTRY.to_string()],
        }
    }
}

impl DatasetConfig {
    /// First configured country; used for cause-level death totals.
    pub fn primary_country(&self) -> &str {
        self.countries
            .first()
            .map(String::as_str)
            .unwrap_or(defaults::DEFAULT_COUNTRY)
    }
}
