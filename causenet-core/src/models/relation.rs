//! Relationship descriptors parsed out of successor/predecessor cells.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{
    PREDECESSOR_COLUMN, PREDECESSOR_ID_KEY, SUCCESSOR_COLUMN, SUCCESSOR_ID_KEY,
};

/// Which side of a relationship a cell describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationRole {
    /// Outgoing: the row's cause leads to the counterpart.
    Successor,
    /// Incoming: the counterpart leads to the row's cause.
    Predecessor,
}

impl RelationRole {
    /// Key that must carry the counterpart id in every descriptor.
    pub fn counterpart_key(&self) -> &'static str {
        match self {
            Self::Successor => SUCCESSOR_ID_KEY,
            Self::Predecessor => PREDECESSOR_ID_KEY,
        }
    }

    /// Dataset column holding the cell for this role.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Successor => SUCCESSOR_COLUMN,
            Self::Predecessor => PREDECESSOR_COLUMN,
        }
    }
}

/// The `impact` weight of a descriptor as it appeared in the cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum Impact {
    /// No `impact` key.
    Absent,
    /// A finite number, or a string holding one.
    Numeric(f64),
    /// Present but not convertible to a finite number.
    Unparsed(String),
}

impl Impact {
    /// Classify the raw JSON value found under the `impact` key.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None => Self::Absent,
            Some(Value::Number(n)) => match n.as_f64() {
                Some(v) if v.is_finite() => Self::Numeric(v),
                _ => Self::Unparsed(n.to_string()),
            },
            Some(Value::String(s)) => match s.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Self::Numeric(v),
                _ => Self::Unparsed(s.clone()),
            },
            Some(other) => Self::Unparsed(other.to_string()),
        }
    }

    /// Whether the key was present at all, convertible or not.
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// The numeric weight, or `default` when absent or unconvertible.
    pub fn resolve(&self, default: f64) -> f64 {
        match self {
            Self::Numeric(v) => *v,
            Self::Absent | Self::Unparsed(_) => default,
        }
    }
}

/// One validated `{counterpart_id, impact}` entry of a relation cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationDescriptor {
    /// Counterpart cause id, trimmed and lowercased.
    pub counterpart_id: String,
    pub impact: Impact,
}
