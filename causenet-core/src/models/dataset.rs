//! Raw tabular input: rows, the dataset, and the per-country year lists.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{year_column, CONCEPT_ID_COLUMN};

/// Lowercase and trim a cause identifier.
pub fn normalize_cause_id(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether a cell counts as missing: null, blank, or a textual NaN.
fn is_missing(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => {
            let s = s.trim();
            s.is_empty() || s.eq_ignore_ascii_case("nan")
        }
        _ => false,
    }
}

/// One record of the source table. Column names are trimmed on construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct RawRow {
    fields: BTreeMap<String, Value>,
}

impl From<Map<String, Value>> for RawRow {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            fields: map
                .into_iter()
                .map(|(k, v)| (k.trim().to_string(), v))
                .collect(),
        }
    }
}

impl From<RawRow> for Map<String, Value> {
    fn from(row: RawRow) -> Self {
        row.fields.into_iter().collect()
    }
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.set(column, value);
        self
    }

    pub fn set(&mut self, column: &str, value: impl Into<Value>) {
        self.fields.insert(column.trim().to_string(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Whether the column exists and is not missing.
    pub fn is_present(&self, column: &str) -> bool {
        self.get(column).is_some_and(|v| !is_missing(v))
    }

    /// Numeric coercion: numbers pass through, numeric strings are parsed,
    /// anything else is `None`.
    pub fn number(&self, column: &str) -> Option<f64> {
        match self.get(column)? {
            Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        }
    }

    /// Normalized cause id, or `None` when the column is missing or blank.
    pub fn concept_id(&self) -> Option<String> {
        match self.get(CONCEPT_ID_COLUMN)? {
            Value::String(s) if !s.trim().is_empty() => Some(normalize_cause_id(s)),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// A relation cell as stored. Arrays are already structured; any other
    /// scalar or object is rendered as text for the repair-and-parse path.
    pub fn relation_cell(&self, column: &str) -> Option<RelationCell<'_>> {
        let value = self.get(column)?;
        if is_missing(value) {
            return None;
        }
        Some(match value {
            Value::Array(items) => RelationCell::Items(items),
            Value::String(s) => RelationCell::Text(Cow::Borrowed(s.as_str())),
            other => RelationCell::Text(Cow::Owned(other.to_string())),
        })
    }

    /// Year value of the row, truncated to an integer.
    fn year(&self, column: &str) -> Option<i32> {
        if !self.is_present(column) {
            return None;
        }
        self.number(column)
            .filter(|v| *v >= i32::MIN as f64 && *v <= i32::MAX as f64)
            .map(|v| v.trunc() as i32)
    }
}

/// Raw content of a relation cell.
#[derive(Debug, Clone, PartialEq)]
pub enum RelationCell<'a> {
    /// Near-JSON text that still needs repair.
    Text(Cow<'a, str>),
    /// An already structured list.
    Items(&'a [Value]),
}

/// The valid years for each country, injected into node expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryYears(BTreeMap<String, Vec<i32>>);

impl CountryYears {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, country: impl Into<String>, years: Vec<i32>) {
        self.0.insert(country.into(), years);
    }

    /// Builder-style insert.
    pub fn with(mut self, country: impl Into<String>, years: Vec<i32>) -> Self {
        self.insert(country, years);
        self
    }

    /// Years for `country`; empty when unknown.
    pub fn years(&self, country: &str) -> &[i32] {
        self.0.get(country).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// A loaded table: its rows plus the ordered union of their column names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<RawRow>,
}

impl Dataset {
    pub fn new(rows: Vec<RawRow>) -> Self {
        let mut seen = HashSet::new();
        let mut columns = Vec::new();
        for row in &rows {
            for column in row.columns() {
                if seen.insert(column.to_string()) {
                    columns.push(column.to_string());
                }
            }
        }
        Self { columns, rows }
    }

    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct non-missing values of the country's year column, in
    /// first-appearance order.
    pub fn distinct_years(&self, country: &str) -> Vec<i32> {
        let column = year_column(country);
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .filter_map(|row| row.year(&column))
            .filter(|year| seen.insert(*year))
            .collect()
    }

    /// Year lists for every requested country.
    pub fn country_years(&self, countries: &[String]) -> CountryYears {
        let mut out = CountryYears::new();
        for country in countries {
            out.insert(country.clone(), self.distinct_years(country));
        }
        out
    }
}
