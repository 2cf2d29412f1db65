//! Stratification dimensions: sex and age band.

use serde::{Deserialize, Serialize};

/// Sex stratum of a death count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// All variants, in the order the expander walks them.
    pub const ALL: [Sex; 2] = [Self::Male, Self::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Age band stratum of a death count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeBand {
    /// Four years old or younger.
    #[serde(rename = "<=4yo")]
    UpTo4,
    /// Five to sixty-four years old.
    #[serde(rename = "5-64yo")]
    From5To64,
    /// Sixty-five or older.
    #[serde(rename = ">=65yo")]
    From65,
}

impl AgeBand {
    pub const ALL: [AgeBand; 3] = [Self::UpTo4, Self::From5To64, Self::From65];

    /// Display label used in node keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpTo4 => "<=4yo",
            Self::From5To64 => "5-64yo",
            Self::From65 => ">=65yo",
        }
    }

    /// Fragment used by the dataset's death-count column names.
    /// The source spells these inconsistently; they must match byte for byte.
    pub fn column_fragment(&self) -> &'static str {
        match self {
            Self::UpTo4 => "=<_4yo",
            Self::From5To64 => ">=5yo,_<=64yo",
            Self::From65 => ">=_65",
        }
    }
}

impl std::fmt::Display for AgeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
