//! Graph-construction policies.

use serde::{Deserialize, Serialize};

use super::relation::RelationRole;

/// Which graph the engine builds from the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphMode {
    /// Nodes keyed by `(cause, sex, age band, country, year)`; edges only
    /// inside one `(sex, age band, country)` stratum.
    #[default]
    Stratified,
    /// One node per cause; successor edges weighted by impact.
    Flat,
    /// One node per cause; predecessor edges weighted by
    /// `impact × total_deaths / divisor`.
    Hierarchical,
}

impl GraphMode {
    pub const ALL: [GraphMode; 3] = [Self::Stratified, Self::Flat, Self::Hierarchical];

    /// Which relation cell feeds this mode.
    pub fn relation_role(&self) -> RelationRole {
        match self {
            Self::Stratified | Self::Flat => RelationRole::Successor,
            Self::Hierarchical => RelationRole::Predecessor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stratified => "stratified",
            Self::Flat => "flat",
            Self::Hierarchical => "hierarchical",
        }
    }

    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stratified" => Some(Self::Stratified),
            "flat" => Some(Self::Flat),
            "hierarchical" => Some(Self::Hierarchical),
            _ => None,
        }
    }
}

impl std::fmt::Display for GraphMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether descriptors must carry an `impact` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactPolicy {
    /// Missing impact falls back to the default weight.
    #[default]
    Lenient,
    /// Missing impact rejects the whole cell.
    Strict,
}

impl ImpactPolicy {
    pub fn requires_impact(&self) -> bool {
        matches!(self, Self::Strict)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }

    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Some(Self::Lenient),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }
}
