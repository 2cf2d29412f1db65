//! Composite node identities.
//!
//! A node's identity is its key and nothing else: inserting the same key twice
//! yields one node.

use serde::{Deserialize, Serialize};

use super::stratum::{AgeBand, Sex};

/// The 5-tuple identifying a stratified node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StratifiedKey {
    pub cause: String,
    pub sex: Sex,
    pub age_band: AgeBand,
    pub country: String,
    pub year: i32,
}

impl StratifiedKey {
    pub fn new(
        cause: impl Into<String>,
        sex: Sex,
        age_band: AgeBand,
        country: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            cause: cause.into(),
            sex,
            age_band,
            country: country.into(),
            year,
        }
    }

    /// Whether `other` sits in the same `(sex, age band, country)` stratum.
    /// Cause and year are not compared.
    pub fn same_stratum(&self, other: &StratifiedKey) -> bool {
        self.sex == other.sex && self.age_band == other.age_band && self.country == other.country
    }

    /// Canonical slash-joined label: `cause/sex/age_band/country/year`.
    pub fn label(&self) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.cause, self.sex, self.age_band, self.country, self.year
        )
    }

    /// Compact label for drawing: `cause (sex, country, year)`.
    pub fn short_label(&self) -> String {
        format!("{} ({}, {}, {})", self.cause, self.sex, self.country, self.year)
    }
}

/// Identity of a graph node under either construction policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKey {
    /// One node per `(cause, sex, age band, country, year)`.
    Stratified(StratifiedKey),
    /// One node per cause, ignoring stratification.
    Cause { cause: String },
}

impl NodeKey {
    pub fn cause_node(cause: impl Into<String>) -> Self {
        Self::Cause {
            cause: cause.into(),
        }
    }

    pub fn cause(&self) -> &str {
        match self {
            Self::Stratified(key) => &key.cause,
            Self::Cause { cause } => cause,
        }
    }

    pub fn as_stratified(&self) -> Option<&StratifiedKey> {
        match self {
            Self::Stratified(key) => Some(key),
            Self::Cause { .. } => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Stratified(key) => key.label(),
            Self::Cause { cause } => cause.clone(),
        }
    }

    pub fn short_label(&self) -> String {
        match self {
            Self::Stratified(key) => key.short_label(),
            Self::Cause { cause } => cause.clone(),
        }
    }
}

impl From<StratifiedKey> for NodeKey {
    fn from(key: StratifiedKey) -> Self {
        Self::Stratified(key)
    }
}

impl std::fmt::Display for NodeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}
